use crate::api::encode::encode_coordinates;
use crate::core::precision::Precision;
use crate::error::PolylineError;
use geo_types::{Geometry, LineString};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a track string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_line_string(s: &str) -> Result<LineString<f64>, PolylineError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a line geometry (WKT or GeoJSON, `x = lon`) and encodes it.
///
/// # Example
///
/// ```
/// use polyline_codec::{Precision, encode_geometry};
///
/// # fn main() -> Result<(), polyline_codec::PolylineError> {
/// let encoded = encode_geometry(
///     "LINESTRING(-120.2 38.5, -120.95 40.7, -126.453 43.252)",
///     Precision::default(),
/// )?;
/// assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// # Ok(())
/// # }
/// ```
pub fn encode_geometry(s: &str, precision: Precision) -> Result<String, PolylineError> {
    let line = parse_line_string(s)?;
    Ok(encode_coordinates(&line, precision))
}

/// Parses a GeoJSON track.
///
/// Accepts a bare geometry, a Feature, or a FeatureCollection holding
/// exactly one Feature with a geometry.
pub fn parse_geojson(s: &str) -> Result<LineString<f64>, PolylineError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| PolylineError::GeometryParseError(e.to_string()))?;

    let geometry = match geojson {
        GeoJson::Geometry(geom) => geom,
        GeoJson::Feature(feat) => feat.geometry.ok_or_else(|| {
            PolylineError::GeometryParseError("Feature has no geometry".to_string())
        })?,
        GeoJson::FeatureCollection(collection) => {
            let mut geometries: Vec<_> = collection
                .features
                .into_iter()
                .filter_map(|feat| feat.geometry)
                .collect();
            if geometries.len() != 1 {
                return Err(PolylineError::GeometryParseError(format!(
                    "FeatureCollection must hold exactly one track, got {}",
                    geometries.len()
                )));
            }
            geometries.remove(0)
        }
    };

    let geometry = Geometry::try_from(geometry)
        .map_err(|e| PolylineError::GeometryParseError(e.to_string()))?;
    into_track(geometry)
}

/// Parses a WKT `LINESTRING`, or a `MULTILINESTRING` with a single line.
pub fn parse_wkt(s: &str) -> Result<LineString<f64>, PolylineError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| PolylineError::GeometryParseError(e.to_string()))?;

    let geometry = Geometry::try_from(wkt).map_err(|_| {
        PolylineError::GeometryParseError("WKT has no matching geometry type".to_string())
    })?;
    into_track(geometry)
}

/// Single-segment multi-lines are unwrapped; GPX exports often emit them.
fn into_track(geometry: Geometry<f64>) -> Result<LineString<f64>, PolylineError> {
    match geometry {
        Geometry::LineString(line) => Ok(line),
        Geometry::MultiLineString(mut lines) if lines.0.len() == 1 => Ok(lines.0.remove(0)),
        Geometry::MultiLineString(lines) => Err(PolylineError::GeometryParseError(format!(
            "expected one line, got MultiLineString of {}",
            lines.0.len()
        ))),
        other => Err(PolylineError::GeometryParseError(format!(
            "expected LineString, got {}",
            geometry_name(&other)
        ))),
    }
}

fn geometry_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        _ => "another geometry type",
    }
}
