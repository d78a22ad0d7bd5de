pub mod coord;

pub use coord::LatLon;
