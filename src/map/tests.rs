use crate::map::distance_meters;
use crate::map::models::{InvalidCoordinate, LatLng};

fn point(lat: f64, lng: f64) -> LatLng {
    LatLng::new(lat, lng).expect("Test coordinate should be valid.")
}

#[test]
fn test_distance_between_identical_points_is_zero() {
    let hamilton_library = point(21.3008, -157.8175);

    assert_eq!(distance_meters(hamilton_library, hamilton_library), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let campus_center = point(21.2988, -157.8195);
    let hamilton_library = point(21.3008, -157.8175);

    let there = distance_meters(campus_center, hamilton_library);
    let back = distance_meters(hamilton_library, campus_center);

    assert!((there - back).abs() < 1e-9);
}

#[test]
fn test_one_degree_of_latitude_is_about_111_km() {
    let distance = distance_meters(point(20.0, -157.0), point(21.0, -157.0));

    // One degree of arc on a 6 371 000 m sphere is ~111 194.93 m.
    assert!((distance - 111_194.93).abs() < 1.0);
}

#[test]
fn test_small_campus_scale_distance() {
    // ~0.00009 degrees of latitude is roughly ten meters.
    let distance = distance_meters(point(21.3008, -157.8175), point(21.30089, -157.8175));

    assert!((9.0..11.0).contains(&distance));
}

#[test]
fn test_parses_boundary_location_string() {
    let location: LatLng = "21.3008, -157.8175".parse().expect("Should parse.");

    assert_eq!(location.lat(), 21.3008);
    assert_eq!(location.lng(), -157.8175);
}

#[test]
fn test_parsing_roundtrips_through_display() {
    let location = point(21.3008, -157.8175);

    let reparsed: LatLng = location.to_string().parse().expect("Should parse.");

    assert_eq!(reparsed, location);
}

#[test]
fn test_rejects_garbage_location_string() {
    let result = "Hamilton Library".parse::<LatLng>();

    assert_eq!(
        result,
        Err(InvalidCoordinate::Malformed(String::from(
            "Hamilton Library"
        ))),
    );
}

#[test]
fn test_rejects_too_many_components() {
    assert!("21.3, -157.8, 12.0".parse::<LatLng>().is_err());
}

#[test]
fn test_rejects_out_of_range_latitude() {
    assert_eq!(
        "91.0, 0.0".parse::<LatLng>(),
        Err(InvalidCoordinate::LatitudeOutOfRange(91.0)),
    );
}

#[test]
fn test_rejects_out_of_range_longitude() {
    assert_eq!(
        "0.0, -180.5".parse::<LatLng>(),
        Err(InvalidCoordinate::LongitudeOutOfRange(-180.5)),
    );
}

#[test]
fn test_rejects_non_finite_components() {
    assert!("NaN, 0.0".parse::<LatLng>().is_err());
    assert!("0.0, inf".parse::<LatLng>().is_err());
}
