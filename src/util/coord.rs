use geo_types::{Coord, Point};

/// Trait for types that can provide a latitude/longitude pair in degrees.
///
/// Tuples are read as `(lat, lon)`, the order the polyline format encodes.
/// `geo_types` values follow the `geo` convention of `x = lon`, `y = lat`.
pub trait LatLon {
    fn lat(&self) -> f64;
    fn lon(&self) -> f64;
}

impl LatLon for (f64, f64) {
    fn lat(&self) -> f64 {
        self.0
    }
    fn lon(&self) -> f64 {
        self.1
    }
}

impl LatLon for Coord<f64> {
    fn lat(&self) -> f64 {
        self.y
    }
    fn lon(&self) -> f64 {
        self.x
    }
}

impl LatLon for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }
    fn lon(&self) -> f64 {
        self.x()
    }
}

impl<T: LatLon> LatLon for &T {
    fn lat(&self) -> f64 {
        (**self).lat()
    }
    fn lon(&self) -> f64 {
        (**self).lon()
    }
}
