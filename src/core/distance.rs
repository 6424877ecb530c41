/// Degrees to radians
const DEG_TO_RAD: f64 = 0.017453292519943295;

/// Earth's diameter in miles (2 × 3958.756)
const EARTH_DIAMETER_MILES: f64 = 7917.512;

/// Calculate the Haversine distance between two points in miles
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in miles. NaN inputs produce NaN; callers decide how to score it.
#[inline]
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let a = 0.5 - ((lat2 - lat1) * DEG_TO_RAD).cos() / 2.0
        + (lat1 * DEG_TO_RAD).cos()
            * (lat2 * DEG_TO_RAD).cos()
            * (1.0 - ((lon2 - lon1) * DEG_TO_RAD).cos())
            / 2.0;

    // Rounding can push `a` a hair below zero for identical points.
    // `f64::max` would swallow NaN here, so compare instead.
    let a = if a < 0.0 { 0.0 } else { a };

    EARTH_DIAMETER_MILES * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let distance = haversine_miles(18.3721392, 121.5111211, 18.3721392, 121.5111211);
        assert!(distance.abs() < 1e-9, "got {}", distance);
    }

    #[test]
    fn test_haversine_london_paris() {
        // London to Paris is roughly 214 miles
        let distance = haversine_miles(51.5074, -0.1278, 48.8566, 2.3522);
        assert!((distance - 214.0).abs() < 5.0, "Distance should be ~214mi, got {}", distance);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let there = haversine_miles(40.7128, -74.0060, 34.0522, -118.2437);
        let back = haversine_miles(34.0522, -118.2437, 40.7128, -74.0060);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_propagates_nan() {
        assert!(haversine_miles(f64::NAN, 0.0, 0.0, 0.0).is_nan());
        assert!(haversine_miles(0.0, 0.0, 0.0, f64::NAN).is_nan());
        assert!(haversine_miles(f64::INFINITY, 0.0, 0.0, 0.0).is_nan());
    }
}
