use crate::api::batch::decode_batch;
use crate::api::decode::{CoordinateDecoder, decode_polyline};
use crate::api::encode::encode_coordinates;
use crate::api::levels::decode_levels;
use crate::core::constants::DEFAULT_PRECISION_DIGITS;
use crate::core::precision::Precision;
use crate::error::PolylineError;
use crate::util::coord::LatLon;
use geo_types::LineString;

/// Encoder/decoder bound to one precision.
///
/// # Example
///
/// ```
/// use polyline_codec::PolylineCodec;
///
/// # fn main() -> Result<(), polyline_codec::PolylineError> {
/// let codec = PolylineCodec::builder().precision_digits(6).build()?;
/// let encoded = codec.encode([(38.5, -120.2)]);
/// let line = codec.decode(&encoded)?;
/// assert!((line.0[0].y - 38.5).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolylineCodec {
    precision: Precision,
}

impl PolylineCodec {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn builder() -> PolylineCodecBuilder {
        PolylineCodecBuilder::new()
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn encode<I>(&self, coords: I) -> String
    where
        I: IntoIterator,
        I::Item: LatLon,
    {
        encode_coordinates(coords, self.precision)
    }

    pub fn decode(&self, encoded: &str) -> Result<LineString<f64>, PolylineError> {
        decode_polyline(encoded, self.precision)
    }

    pub fn decoder<'a>(&self, encoded: &'a str) -> CoordinateDecoder<'a> {
        CoordinateDecoder::new(encoded, self.precision)
    }

    pub fn decode_levels(&self, encoded: &str) -> Result<Vec<u32>, PolylineError> {
        decode_levels(encoded)
    }

    pub fn decode_batch<S>(&self, encoded: &[S]) -> Vec<Result<LineString<f64>, PolylineError>>
    where
        S: AsRef<str> + Sync,
    {
        decode_batch(encoded, self.precision)
    }
}

#[derive(Debug, Default)]
pub struct PolylineCodecBuilder {
    digits: Option<u32>,
    factor: Option<f64>,
}

impl PolylineCodecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decimal digits kept (5 for the common format, 6 for routing engines).
    pub fn precision_digits(mut self, digits: u32) -> Self {
        self.digits = Some(digits);
        self.factor = None;
        self
    }

    pub fn precision_factor(mut self, factor: f64) -> Self {
        self.factor = Some(factor);
        self.digits = None;
        self
    }

    pub fn build(self) -> Result<PolylineCodec, PolylineError> {
        let precision = match (self.factor, self.digits) {
            (Some(factor), _) => Precision::from_factor(factor)?,
            (None, digits) => Precision::new(digits.unwrap_or(DEFAULT_PRECISION_DIGITS))?,
        };
        Ok(PolylineCodec::new(precision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() -> Result<(), PolylineError> {
        let codec = PolylineCodec::builder().build()?;
        assert_eq!(codec, PolylineCodec::default());
        assert_eq!(codec.precision().factor(), 1e5);
        Ok(())
    }

    #[test]
    fn test_builder_last_setting_wins() -> Result<(), PolylineError> {
        let codec = PolylineCodec::builder()
            .precision_factor(1e7)
            .precision_digits(6)
            .build()?;
        assert_eq!(codec.precision().factor(), 1e6);
        Ok(())
    }

    #[test]
    fn test_builder_rejects_bad_precision() {
        assert!(PolylineCodec::builder().precision_digits(12).build().is_err());
        assert!(PolylineCodec::builder().precision_factor(0.0).build().is_err());
    }

    #[test]
    fn test_codec_roundtrip() -> Result<(), PolylineError> {
        let codec = PolylineCodec::default();
        let encoded = codec.encode([(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)]);
        assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");

        let line = codec.decode(&encoded)?;
        assert_eq!(codec.encode(&line), encoded);
        assert_eq!(codec.decoder(&encoded).count(), 3);
        assert_eq!(codec.decode_levels("?@AB~F")?, vec![0, 1, 2, 3, 255]);
        assert_eq!(codec.decode_batch(&[encoded.as_str()]).len(), 1);
        Ok(())
    }
}
