use crate::core::chunk::ChunkReader;
use crate::core::precision::Precision;
use crate::error::PolylineError;
use geo_types::{Coord, LineString};
use std::iter::FusedIterator;

/// Streaming decoder yielding one coordinate per latitude/longitude pair.
///
/// Coords carry `x = longitude`, `y = latitude`. After the first error the
/// iterator is exhausted.
///
/// # Example
///
/// ```
/// use polyline_codec::{CoordinateDecoder, Precision};
///
/// let mut points = CoordinateDecoder::new("_p~iF~ps|U", Precision::default());
/// let first = points.next().unwrap().unwrap();
/// assert!((first.y - 38.5).abs() < 1e-9);
/// assert!(points.next().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CoordinateDecoder<'a> {
    reader: ChunkReader<'a>,
    precision: Precision,
    lat: i64,
    lon: i64,
    failed: bool,
}

impl<'a> CoordinateDecoder<'a> {
    pub fn new(encoded: &'a str, precision: Precision) -> Self {
        Self {
            reader: ChunkReader::new(encoded),
            precision,
            lat: 0,
            lon: 0,
            failed: false,
        }
    }

    fn read_pair(&mut self) -> Result<Coord<f64>, PolylineError> {
        let delta_lat = self.reader.read_signed()?;
        let delta_lon = self.reader.read_signed()?;

        self.lat += i64::from(delta_lat);
        self.lon += i64::from(delta_lon);

        Ok(Coord {
            x: self.precision.dequantize(self.lon),
            y: self.precision.dequantize(self.lat),
        })
    }
}

impl Iterator for CoordinateDecoder<'_> {
    type Item = Result<Coord<f64>, PolylineError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_at_end() {
            return None;
        }
        let item = self.read_pair();
        self.failed = item.is_err();
        Some(item)
    }
}

impl FusedIterator for CoordinateDecoder<'_> {}

/// Decodes an encoded polyline into a `LineString` (`x = lon`, `y = lat`).
///
/// Fails with `EmptyInput` for an empty string and with `MalformedEncoding`
/// if any value is cut short or overlong; no partial line is returned.
///
/// # Example
///
/// ```
/// use polyline_codec::{Precision, decode_polyline};
///
/// # fn main() -> Result<(), polyline_codec::PolylineError> {
/// let line = decode_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@", Precision::default())?;
/// assert_eq!(line.0.len(), 3);
/// # Ok(())
/// # }
/// ```
pub fn decode_polyline(
    encoded: &str,
    precision: Precision,
) -> Result<LineString<f64>, PolylineError> {
    if encoded.is_empty() {
        return Err(PolylineError::EmptyInput);
    }

    let coords = CoordinateDecoder::new(encoded, precision).collect::<Result<Vec<_>, _>>()?;
    if coords.is_empty() {
        return Err(PolylineError::EmptyInput);
    }

    Ok(LineString::from(coords))
}
