/// Mean Earth radius in meters. Earth is treated as a sphere, not an
/// oblate spheroid.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two coordinates given in
/// decimal degrees, calculated with the haversine formula.
// https://www.movable-type.co.uk/scripts/latlong.html
pub fn haversine_distance(from_lat: f64, from_lon: f64, to_lat: f64, to_lon: f64) -> f64 {
    let from_lat_rad = from_lat.to_radians();
    let to_lat_rad = to_lat.to_radians();

    let sin_half_dlat = ((to_lat - from_lat).to_radians() / 2.0).sin();
    let sin_half_dlon = ((to_lon - from_lon).to_radians() / 2.0).sin();

    let a = sin_half_dlat.powi(2)
        + from_lat_rad.cos() * to_lat_rad.cos() * sin_half_dlon.powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
