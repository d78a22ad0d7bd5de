use crate::core::chunk::write_signed;
use crate::core::precision::Precision;
use crate::util::coord::LatLon;

/// Encodes coordinates as an encoded polyline string.
///
/// Each point is rounded half away from zero at `precision`, and the
/// difference to the previous rounded point is written latitude first.
/// Never fails; an empty input gives an empty string.
///
/// # Example
///
/// ```
/// use polyline_codec::{Precision, encode_coordinates};
///
/// let encoded = encode_coordinates(
///     [(38.5, -120.2), (40.7, -120.95), (43.252, -126.453)],
///     Precision::default(),
/// );
/// assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// ```
pub fn encode_coordinates<I>(coords: I, precision: Precision) -> String
where
    I: IntoIterator,
    I::Item: LatLon,
{
    let coords = coords.into_iter();
    // Typical points take four to six bytes per axis
    let mut encoded = String::with_capacity(coords.size_hint().0 * 10);

    let mut prev_lat = 0i64;
    let mut prev_lon = 0i64;

    for coord in coords {
        let lat = precision.quantize(coord.lat());
        let lon = precision.quantize(coord.lon());

        write_signed(lat.wrapping_sub(prev_lat), &mut encoded);
        write_signed(lon.wrapping_sub(prev_lon), &mut encoded);

        prev_lat = lat;
        prev_lon = lon;
    }

    encoded
}
