//! Great-circle distance on the haversine formula.
//!
//! Used as the sort key for pharmacy ranking; accuracy only needs to be good
//! enough for ordering, not for geodesy.

/// Mean Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle surface distance in meters between two points given in
/// floating-point degrees.
///
/// Pure and symmetric; identical points yield exactly `0.0`.
#[must_use]
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(haversine_meters(28.6139, 77.2090, 28.6139, 77.2090), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            ((28.6139, 77.2090), (19.0760, 72.8777)),
            ((0.0, 0.0), (0.5, 0.5)),
            ((-33.8688, 151.2093), (51.5074, -0.1278)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let forward = haversine_meters(lat1, lon1, lat2, lon2);
            let backward = haversine_meters(lat2, lon2, lat1, lon1);
            assert!(
                (forward - backward).abs() < 1e-9,
                "asymmetry for ({lat1},{lon1})-({lat2},{lon2}): {forward} vs {backward}"
            );
        }
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let d = haversine_meters(0.0, 0.0, 1.0, 0.0);
        assert!(
            (d - 111_195.0).abs() < 10.0,
            "expected ~111195 m, got {d}"
        );
    }

    #[test]
    fn one_degree_of_longitude_at_equator_matches_latitude() {
        let along_lat = haversine_meters(0.0, 0.0, 1.0, 0.0);
        let along_lon = haversine_meters(0.0, 0.0, 0.0, 1.0);
        assert!((along_lat - along_lon).abs() < 1.0);
    }
}
