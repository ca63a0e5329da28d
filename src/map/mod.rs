use consts::EARTH_RADIUS_METERS;
use models::LatLng;

pub mod consts;
pub mod models;
#[cfg(test)]
pub mod tests;

/// Great-circle distance between two points in meters, via the haversine
/// formula on a spherical Earth.
pub fn distance_meters(guess: LatLng, target: LatLng) -> f64 {
    let phi_1 = guess.lat().to_radians();
    let phi_2 = target.lat().to_radians();
    let delta_phi = (target.lat() - guess.lat()).to_radians();
    let delta_lambda = (target.lng() - guess.lng()).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    EARTH_RADIUS_METERS * c
}
