use crate::api::decode::decode_polyline;
use crate::core::precision::Precision;
use crate::error::PolylineError;
use crate::geom::export::bounds;
use geo_types::{LineString, Rect};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Map object attached to activities, routes and segments.
///
/// Holds the encoded strings as the API returns them; coordinates are
/// decoded on access.
///
/// # Example
///
/// ```
/// use polyline_codec::PolylineMap;
///
/// # fn main() -> Result<(), polyline_codec::PolylineError> {
/// let map = PolylineMap::from_json(
///     r#"{"id":"a123","summary_polyline":"_p~iF~ps|U_ulLnnqC_mqNvxq`@","resource_state":2}"#,
/// )?;
/// assert_eq!(map.summary_coordinates().map(|l| l.0.len()), Some(3));
/// assert!(map.coordinates().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolylineMap {
    #[serde(default)]
    pub id: Option<String>,
    /// Full-resolution track
    #[serde(default)]
    pub polyline: Option<String>,
    /// Simplified track used in list views
    #[serde(default)]
    pub summary_polyline: Option<String>,
    #[serde(default)]
    pub resource_state: Option<u8>,
}

impl PolylineMap {
    pub fn from_json(json: &str) -> Result<Self, PolylineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: &Value) -> Result<Self, PolylineError> {
        Ok(Self::deserialize(value)?)
    }

    /// Decoded `polyline`, or `None` when absent, empty or malformed.
    pub fn coordinates(&self) -> Option<LineString<f64>> {
        self.coordinates_with(Precision::default())
    }

    pub fn coordinates_with(&self, precision: Precision) -> Option<LineString<f64>> {
        decode_field("polyline", self.polyline.as_deref(), precision)
    }

    /// Decoded `summary_polyline`, or `None` when absent, empty or malformed.
    pub fn summary_coordinates(&self) -> Option<LineString<f64>> {
        self.summary_coordinates_with(Precision::default())
    }

    pub fn summary_coordinates_with(&self, precision: Precision) -> Option<LineString<f64>> {
        decode_field("summary_polyline", self.summary_polyline.as_deref(), precision)
    }

    /// Bounds of the best available track, full resolution first.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.coordinates()
            .or_else(|| self.summary_coordinates())
            .and_then(|line| bounds(&line))
    }
}

/// Extracts an encoded polyline string from a parsed JSON object.
pub fn polyline_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

fn decode_field(
    field: &'static str,
    encoded: Option<&str>,
    precision: Precision,
) -> Option<LineString<f64>> {
    let encoded = encoded?;
    match decode_polyline(encoded, precision) {
        Ok(line) => Some(line),
        Err(PolylineError::EmptyInput) => None,
        Err(e) => {
            tracing::debug!(field, error = %e, "discarding undecodable polyline");
            None
        }
    }
}
