use crate::core::chunk::{ChunkReader, write_unsigned};
use crate::core::constants::MAX_CHUNKED_VALUE;
use crate::error::PolylineError;

/// Decodes a zoom-level stream into one absolute value per point.
///
/// Uses the polyline chunk scheme without the zigzag step or running
/// deltas. An empty stream decodes to an empty vector.
///
/// # Example
///
/// ```
/// use polyline_codec::decode_levels;
///
/// # fn main() -> Result<(), polyline_codec::PolylineError> {
/// assert_eq!(decode_levels("?@AB~F")?, vec![0, 1, 2, 3, 255]);
/// # Ok(())
/// # }
/// ```
pub fn decode_levels(encoded: &str) -> Result<Vec<u32>, PolylineError> {
    let mut reader = ChunkReader::new(encoded);
    let mut levels = Vec::with_capacity(encoded.len());

    while !reader.is_at_end() {
        levels.push(reader.read_unsigned()?);
    }

    Ok(levels)
}

/// Encodes zoom levels, the inverse of [`decode_levels`].
///
/// Levels above `MAX_CHUNKED_VALUE` would need a seventh chunk and fail
/// with `LevelOutOfRange`.
pub fn encode_levels(levels: &[u32]) -> Result<String, PolylineError> {
    let mut encoded = String::with_capacity(levels.len());
    for &level in levels {
        if level > MAX_CHUNKED_VALUE {
            return Err(PolylineError::LevelOutOfRange(level));
        }
        write_unsigned(u64::from(level), &mut encoded);
    }
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Malformed;

    #[test]
    fn test_decode_levels_reference() -> Result<(), PolylineError> {
        assert_eq!(decode_levels("?@AB~F")?, vec![0, 1, 2, 3, 255]);
        Ok(())
    }

    #[test]
    fn test_decode_levels_empty() -> Result<(), PolylineError> {
        assert!(decode_levels("")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_levels_are_not_zigzagged() -> Result<(), PolylineError> {
        // "@" would be -1 as a signed coordinate delta
        assert_eq!(decode_levels("@@@")?, vec![1, 1, 1]);
        Ok(())
    }

    #[test]
    fn test_decode_levels_truncated() {
        assert_eq!(
            decode_levels("?@~"),
            Err(PolylineError::MalformedEncoding {
                position: 3,
                reason: Malformed::Truncated,
            })
        );
    }

    #[test]
    fn test_decode_levels_too_many_chunks() {
        assert!(matches!(
            decode_levels("~~~~~~~?"),
            Err(PolylineError::MalformedEncoding {
                reason: Malformed::TooManyChunks,
                ..
            })
        ));
    }

    #[test]
    fn test_encode_levels() -> Result<(), PolylineError> {
        let levels = [0, 1, 2, 3, 255, 17, 3];
        let encoded = encode_levels(&levels)?;
        assert!(encoded.starts_with("?@AB~F"));
        assert_eq!(decode_levels(&encoded)?, levels);
        Ok(())
    }

    #[test]
    fn test_encode_levels_six_chunk_boundary() -> Result<(), PolylineError> {
        let largest = (1 << 30) - 1;
        let encoded = encode_levels(&[largest])?;
        assert_eq!(encoded.len(), 6);
        assert_eq!(decode_levels(&encoded)?, vec![largest]);

        assert_eq!(
            encode_levels(&[3, 1 << 30]),
            Err(PolylineError::LevelOutOfRange(1 << 30))
        );
        assert_eq!(
            encode_levels(&[u32::MAX]),
            Err(PolylineError::LevelOutOfRange(u32::MAX))
        );
        Ok(())
    }
}
