//! # polyline-codec
//!
//! Encoder and decoder for the Encoded Polyline Algorithm Format, the compact
//! ASCII track encoding carried by activity, route and segment maps.
//!
//! There are currently three main entry points.
//!
//! ### 1. Free functions - Encode and Decode
//!
//! ```
//! use polyline_codec::{Precision, decode_polyline, encode_coordinates};
//!
//! # fn main() -> Result<(), polyline_codec::PolylineError> {
//! let encoded = encode_coordinates([(38.5, -120.2), (40.7, -120.95)], Precision::default());
//! let line = decode_polyline(&encoded, Precision::default())?;
//! // geo convention: x = longitude, y = latitude
//! assert!((line.0[1].x - -120.95).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PolylineCodec` - A Codec Bound to One Precision
//!
//! ```
//! use polyline_codec::PolylineCodec;
//!
//! # fn main() -> Result<(), polyline_codec::PolylineError> {
//! let codec = PolylineCodec::builder().precision_digits(6).build()?;
//! for point in codec.decoder("_izlhA~rlgdF") {
//!     let point = point?;
//!     println!("{}, {}", point.y, point.x);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `PolylineMap` - Map Objects From the API
//!
//! ```
//! use polyline_codec::PolylineMap;
//!
//! # fn main() -> Result<(), polyline_codec::PolylineError> {
//! let map = PolylineMap::from_json(r#"{"id":"a1","summary_polyline":"_p~iF~ps|U"}"#)?;
//! if let Some(line) = map.summary_coordinates() {
//!     println!("{} points", line.0.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Zoom-level streams decode with [`decode_levels`].

pub mod api;
pub mod core;
pub mod error;
pub mod geom;
pub mod model;
pub mod util;

pub use api::{
    CoordinateDecoder, PolylineCodec, PolylineCodecBuilder, decode_batch, decode_levels,
    decode_polyline, encode_coordinates, encode_levels,
};
pub use crate::core::{
    ASCII_OFFSET, CHUNK_BITS, CHUNK_MASK, CONTINUATION_BIT, DEFAULT_PRECISION,
    DEFAULT_PRECISION_DIGITS, MAX_CHUNKED_VALUE, MAX_CHUNKS, MAX_DELTA_DEGREES,
    MAX_PRECISION_DIGITS, Precision,
};
pub use error::{Malformed, PolylineError};
pub use geom::{
    bounds, centroid, encode_geometry, parse_geojson, parse_line_string, parse_wkt, to_geojson,
    to_wkt,
};
pub use model::{PolylineMap, polyline_field};
pub use util::LatLon;

pub use geo_types;
