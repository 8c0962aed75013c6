//! Great-circle distance helpers

use crate::domain::Coordinates;

/// Mean Earth radius used for all distance calculations
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometres.
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat() - from.lat()).to_radians();
    let d_lng = (to.lng() - from.lng()).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat().to_radians().cos() * to.lat().to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Sum of leg distances along an ordered path. Fewer than two points is 0.
pub fn path_length_km<I>(points: I) -> f64
where
    I: IntoIterator<Item = Coordinates>,
{
    let mut points = points.into_iter();
    let Some(mut prev) = points.next() else {
        return 0.0;
    };

    let mut total = 0.0;
    for next in points {
        total += haversine_km(prev, next);
        prev = next;
    }
    total
}
