use geo::{BoundingRect, Centroid};
use geo_types::{LineString, Point, Rect};
use wkt::ToWkt;

/// Formats a decoded line as WKT (`x = lon`, `y = lat`).
pub fn to_wkt(line: &LineString<f64>) -> String {
    line.wkt_string()
}

/// Converts a decoded line into a GeoJSON geometry.
pub fn to_geojson(line: &LineString<f64>) -> geojson::Geometry {
    geojson::Geometry::new(geojson::Value::from(line))
}

/// Bounding rectangle of a decoded line, `None` when it has no points.
pub fn bounds(line: &LineString<f64>) -> Option<Rect<f64>> {
    line.bounding_rect()
}

/// Length-weighted centroid of a decoded line, `None` when it has no points.
pub fn centroid(line: &LineString<f64>) -> Option<Point<f64>> {
    line.centroid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::decode::decode_polyline;
    use crate::core::precision::Precision;
    use crate::error::PolylineError;
    use crate::geom::parse::parse_line_string;

    fn reference_line() -> Result<LineString<f64>, PolylineError> {
        decode_polyline("_p~iF~ps|U_ulLnnqC_mqNvxq`@", Precision::default())
    }

    #[test]
    fn test_to_wkt_roundtrip() -> Result<(), PolylineError> {
        let line = reference_line()?;
        let wkt = to_wkt(&line);
        assert!(wkt.starts_with("LINESTRING"));

        let parsed = parse_line_string(&wkt)?;
        assert_eq!(parsed.0.len(), 3);
        assert!((parsed.0[2].y - 43.252).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_to_geojson() -> Result<(), PolylineError> {
        let line = reference_line()?;
        let geometry = to_geojson(&line);
        match &geometry.value {
            geojson::Value::LineString(coords) => {
                assert_eq!(coords.len(), 3);
                assert!((coords[0][0] - (-120.2)).abs() < 1e-9);
                assert!((coords[0][1] - 38.5).abs() < 1e-9);
            }
            _ => panic!("Expected LineString"),
        }
        let parsed = parse_line_string(&geometry.to_string())?;
        assert_eq!(parsed.0.len(), 3);
        Ok(())
    }

    #[test]
    fn test_bounds() -> Result<(), PolylineError> {
        let rect = bounds(&reference_line()?).ok_or(PolylineError::EmptyInput)?;
        assert!((rect.min().y - 38.5).abs() < 1e-9);
        assert!((rect.max().y - 43.252).abs() < 1e-9);
        assert!((rect.min().x - (-126.453)).abs() < 1e-9);
        assert!((rect.max().x - (-120.2)).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_empty_line_has_no_bounds_or_centroid() {
        let empty = LineString::<f64>::new(vec![]);
        assert!(bounds(&empty).is_none());
        assert!(centroid(&empty).is_none());
    }

    #[test]
    fn test_centroid_within_bounds() -> Result<(), PolylineError> {
        let line = reference_line()?;
        let c = centroid(&line).ok_or(PolylineError::EmptyInput)?;
        let rect = bounds(&line).ok_or(PolylineError::EmptyInput)?;
        assert!(c.x() >= rect.min().x && c.x() <= rect.max().x);
        assert!(c.y() >= rect.min().y && c.y() <= rect.max().y);
        Ok(())
    }
}
