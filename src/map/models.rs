use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A validated point on the map. Construction goes through [`LatLng::new`]
/// or [`FromStr`], so a value of this type always satisfies the latitude
/// and longitude range invariants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate::LatitudeOutOfRange(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(InvalidCoordinate::LongitudeOutOfRange(lng));
        }
        Ok(LatLng { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Parses the boundary encoding of a location: `"<lat>, <lng>"`.
impl FromStr for LatLng {
    type Err = InvalidCoordinate;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split(',');
        let (Some(raw_lat), Some(raw_lng), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(InvalidCoordinate::Malformed(raw.to_string()));
        };
        let lat = raw_lat
            .trim()
            .parse::<f64>()
            .map_err(|_err| InvalidCoordinate::Malformed(raw.to_string()))?;
        let lng = raw_lng
            .trim()
            .parse::<f64>()
            .map_err(|_err| InvalidCoordinate::Malformed(raw.to_string()))?;
        LatLng::new(lat, lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}, {}", self.lat, self.lng)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidCoordinate {
    #[error("expected a location that looks like \"<lat>, <lng>\", got {0:?}")]
    Malformed(String),
    #[error("latitude {0} is outside of the [-90, 90] range")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside of the [-180, 180] range")]
    LongitudeOutOfRange(f64),
}

/// Serializes a [`LatLng`] as the `"<lat>, <lng>"` string used everywhere
/// at the API boundary. Meant for `#[serde(with = ...)]` on struct fields.
pub mod latlng_string {
    use super::LatLng;
    use super::*;

    pub fn serialize<S: Serializer>(location: &LatLng, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&location.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LatLng, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}
