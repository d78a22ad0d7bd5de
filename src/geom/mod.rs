pub mod export;
pub mod parse;

pub use export::{bounds, centroid, to_geojson, to_wkt};
pub use parse::{encode_geometry, parse_geojson, parse_line_string, parse_wkt};
