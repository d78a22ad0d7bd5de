/// Default scale factor, five decimal digits
pub const DEFAULT_PRECISION: f64 = 1e5;

/// Default number of decimal digits kept by the scale factor
pub const DEFAULT_PRECISION_DIGITS: u32 = 5;

/// Largest digit count accepted by `Precision::new`.
///
/// At seven digits a full 360 degree longitude delta no longer fits in
/// six chunks.
pub const MAX_PRECISION_DIGITS: u32 = 6;

/// Largest delta between consecutive points, a full sweep of longitude
pub const MAX_DELTA_DEGREES: f64 = 360.0;

/// Offset added to every chunk to keep it printable
pub const ASCII_OFFSET: u8 = 63;

/// Bits of payload carried by each chunk
pub const CHUNK_BITS: u32 = 5;

/// Mask extracting the payload of a chunk
pub const CHUNK_MASK: u32 = 0x1F;

/// Set on every chunk except the last of a value
pub const CONTINUATION_BIT: u32 = 0x20;

/// Maximum chunks a single value may span when decoding
pub const MAX_CHUNKS: u32 = 6;

/// Largest unsigned value that fits in `MAX_CHUNKS` chunks
pub const MAX_CHUNKED_VALUE: u32 = (1 << (CHUNK_BITS * MAX_CHUNKS)) - 1;

/// Highest byte a well-formed chunk can produce (`~`)
pub(crate) const MAX_ENCODED_BYTE: u8 = ASCII_OFFSET + (CHUNK_MASK | CONTINUATION_BIT) as u8;
