use crate::core::constants::{
    ASCII_OFFSET, CHUNK_BITS, CHUNK_MASK, CONTINUATION_BIT, MAX_CHUNKS, MAX_ENCODED_BYTE,
};
use crate::error::{Malformed, PolylineError};

enum ChunkState {
    ReadingChunk,
    Done,
    Error(Malformed),
}

/// Cursor over an encoded byte string, reading one chunked value at a time.
///
/// Works on raw bytes, never on chars. Holds only its own cursor, so
/// separate readers over the same input never interfere.
#[derive(Debug, Clone)]
pub struct ChunkReader<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> ChunkReader<'a> {
    pub fn new(encoded: &'a str) -> Self {
        Self::from_bytes(encoded.as_bytes())
    }

    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.bytes.len()
    }

    /// Reads one value without the zigzag step.
    ///
    /// At most six chunks are accepted, so the result fits in 30 bits.
    pub fn read_unsigned(&mut self) -> Result<u32, PolylineError> {
        let mut value: u32 = 0;
        let mut chunks: u32 = 0;
        let mut state = ChunkState::ReadingChunk;

        loop {
            match state {
                ChunkState::ReadingChunk => {
                    state = match self.bytes.get(self.cursor) {
                        None => ChunkState::Error(Malformed::Truncated),
                        Some(&byte) if !(ASCII_OFFSET..=MAX_ENCODED_BYTE).contains(&byte) => {
                            ChunkState::Error(Malformed::InvalidByte(byte))
                        }
                        Some(&byte) => {
                            let chunk = u32::from(byte - ASCII_OFFSET);
                            value |= (chunk & CHUNK_MASK) << (CHUNK_BITS * chunks);
                            chunks += 1;
                            self.cursor += 1;

                            if chunk & CONTINUATION_BIT == 0 {
                                ChunkState::Done
                            } else if chunks == MAX_CHUNKS {
                                ChunkState::Error(Malformed::TooManyChunks)
                            } else {
                                ChunkState::ReadingChunk
                            }
                        }
                    }
                }
                ChunkState::Done => return Ok(value),
                ChunkState::Error(reason) => {
                    return Err(PolylineError::MalformedEncoding {
                        position: self.cursor,
                        reason,
                    });
                }
            }
        }
    }

    /// Reads one zigzag-encoded signed value.
    pub fn read_signed(&mut self) -> Result<i32, PolylineError> {
        self.read_unsigned().map(unzigzag)
    }
}

/// Undoes the zigzag transform in 32-bit two's complement.
pub(crate) fn unzigzag(value: u32) -> i32 {
    let value = value as i32;
    if value & 1 == 1 {
        !(value >> 1)
    } else {
        value >> 1
    }
}

pub(crate) fn zigzag(value: i64) -> u64 {
    if value < 0 {
        !(value << 1) as u64
    } else {
        (value << 1) as u64
    }
}

/// Appends `value` as 5-bit chunks, least significant first.
pub fn write_unsigned(mut value: u64, out: &mut String) {
    let mask = u64::from(CHUNK_MASK);
    let continuation = u64::from(CONTINUATION_BIT);

    while value >= continuation {
        out.push(char::from(((value & mask) | continuation) as u8 + ASCII_OFFSET));
        value >>= CHUNK_BITS;
    }
    out.push(char::from(value as u8 + ASCII_OFFSET));
}

/// Appends a signed value, zigzag-transformed, as 5-bit chunks.
pub fn write_signed(value: i64, out: &mut String) {
    write_unsigned(zigzag(value), out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_signed(value: i64) -> String {
        let mut out = String::new();
        write_signed(value, &mut out);
        out
    }

    #[test]
    fn test_zigzag() {
        assert_eq!(zigzag(0), 0);
        assert_eq!(zigzag(-1), 1);
        assert_eq!(zigzag(1), 2);
        assert_eq!(zigzag(-2), 3);
        assert_eq!(zigzag(-17998321), 35996641);
    }

    #[test]
    fn test_unzigzag() {
        assert_eq!(unzigzag(0), 0);
        assert_eq!(unzigzag(1), -1);
        assert_eq!(unzigzag(2), 1);
        assert_eq!(unzigzag(3), -2);
        assert_eq!(unzigzag(35996641), -17998321);
    }

    #[test]
    fn test_write_signed_reference_value() {
        // Worked example from the format description.
        assert_eq!(encode_signed(-17998321), "`~oia@");
    }

    #[test]
    fn test_write_small_values() {
        assert_eq!(encode_signed(0), "?");
        assert_eq!(encode_signed(-1), "@");
        assert_eq!(encode_signed(1), "A");
    }

    #[test]
    fn test_read_signed() -> Result<(), PolylineError> {
        let mut reader = ChunkReader::new("`~oia@?");
        assert_eq!(reader.read_signed()?, -17998321);
        assert_eq!(reader.position(), 6);
        assert_eq!(reader.read_signed()?, 0);
        assert!(reader.is_at_end());
        Ok(())
    }

    #[test]
    fn test_read_unsigned_multi_chunk() -> Result<(), PolylineError> {
        let mut reader = ChunkReader::new("~F");
        assert_eq!(reader.read_unsigned()?, 255);
        Ok(())
    }

    #[test]
    fn test_truncated() {
        let mut reader = ChunkReader::new("_");
        assert_eq!(
            reader.read_unsigned(),
            Err(PolylineError::MalformedEncoding {
                position: 1,
                reason: Malformed::Truncated,
            })
        );
    }

    #[test]
    fn test_empty_is_truncated() {
        let mut reader = ChunkReader::new("");
        assert!(matches!(
            reader.read_unsigned(),
            Err(PolylineError::MalformedEncoding {
                reason: Malformed::Truncated,
                ..
            })
        ));
    }

    #[test]
    fn test_too_many_chunks() {
        let mut reader = ChunkReader::new("~~~~~~?");
        assert_eq!(
            reader.read_unsigned(),
            Err(PolylineError::MalformedEncoding {
                position: 6,
                reason: Malformed::TooManyChunks,
            })
        );
    }

    #[test]
    fn test_six_chunks_accepted() -> Result<(), PolylineError> {
        let mut reader = ChunkReader::new("~~~~~^");
        assert_eq!(reader.read_unsigned()?, (1 << 30) - 1);
        Ok(())
    }

    #[test]
    fn test_invalid_bytes() {
        for input in ["\x7f", " ", ">"] {
            let mut reader = ChunkReader::new(input);
            assert!(matches!(
                reader.read_unsigned(),
                Err(PolylineError::MalformedEncoding {
                    position: 0,
                    reason: Malformed::InvalidByte(_),
                })
            ));
        }
    }
}
