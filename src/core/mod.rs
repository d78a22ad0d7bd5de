pub mod chunk;
pub mod constants;
pub mod precision;

pub use chunk::{ChunkReader, write_signed, write_unsigned};
pub use constants::{
    ASCII_OFFSET, CHUNK_BITS, CHUNK_MASK, CONTINUATION_BIT, DEFAULT_PRECISION,
    DEFAULT_PRECISION_DIGITS, MAX_CHUNKED_VALUE, MAX_CHUNKS, MAX_DELTA_DEGREES,
    MAX_PRECISION_DIGITS,
};
pub use precision::Precision;
