use crate::core::chunk::zigzag;
use crate::core::constants::{
    DEFAULT_PRECISION, MAX_CHUNKED_VALUE, MAX_DELTA_DEGREES, MAX_PRECISION_DIGITS,
};
use crate::error::PolylineError;

/// Scale factor applied to degrees before integer encoding.
///
/// The factor is not stored in the encoded string, so the same precision
/// must be used on both sides.
///
/// Only factors under which a 360 degree delta still fits in six chunks
/// are accepted: at most 6 digits, or a factor up to about 1.49e6. Larger
/// factors would produce strings the decoder rejects.
///
/// # Example
///
/// ```
/// use polyline_codec::Precision;
///
/// # fn main() -> Result<(), polyline_codec::PolylineError> {
/// let p = Precision::new(6)?;
/// assert_eq!(p.factor(), 1e6);
/// assert_eq!(Precision::default().factor(), 1e5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Precision(f64);

impl Precision {
    /// Precision keeping `digits` decimal places (0-6).
    pub fn new(digits: u32) -> Result<Self, PolylineError> {
        if digits > MAX_PRECISION_DIGITS {
            return Err(PolylineError::InvalidPrecision(format!(
                "{} digits exceeds the maximum of {}",
                digits, MAX_PRECISION_DIGITS
            )));
        }
        Ok(Self(10f64.powi(digits as i32)))
    }

    /// Precision from an arbitrary positive scale factor.
    pub fn from_factor(factor: f64) -> Result<Self, PolylineError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(PolylineError::InvalidPrecision(format!(
                "factor must be positive and finite, got {}",
                factor
            )));
        }
        let precision = Self(factor);
        if zigzag(precision.quantize(MAX_DELTA_DEGREES)) > u64::from(MAX_CHUNKED_VALUE) {
            return Err(PolylineError::InvalidPrecision(format!(
                "factor {} overflows six chunks for a {} degree delta",
                factor, MAX_DELTA_DEGREES
            )));
        }
        Ok(precision)
    }

    pub fn factor(&self) -> f64 {
        self.0
    }

    /// Rounds degrees to the integer domain, half away from zero.
    pub(crate) fn quantize(&self, degrees: f64) -> i64 {
        (degrees * self.0).round() as i64
    }

    pub(crate) fn dequantize(&self, value: i64) -> f64 {
        value as f64 / self.0
    }

    /// Largest per-axis error introduced by a round trip.
    pub fn tolerance(&self) -> f64 {
        0.5 / self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(DEFAULT_PRECISION)
    }
}
