pub mod map;

pub use map::{PolylineMap, polyline_field};
