/// Relative distance score between a query point and a record
///
/// Local equirectangular approximation: the longitude delta is scaled by
/// `cos(lat1)` and the square root is omitted. Only the ordering of scores is
/// meaningful, and only for nearby points. The result is not in any physical unit.
///
/// # Arguments
/// * `lat1` - Query latitude in degrees
/// * `lon1` - Query longitude in degrees
/// * `lat2` - Record latitude in degrees
/// * `lon2` - Record longitude in degrees
#[inline]
pub fn planar_score(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = lat1 - lat2;
    let delta_lon = (lon1 - lon2) * lat1.to_radians().cos();

    delta_lat * delta_lat + delta_lon * delta_lon
}
