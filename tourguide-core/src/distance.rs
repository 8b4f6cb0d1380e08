//! Great-circle distance between coordinates.

use geo::Coord;

/// Conversion factor from nautical miles to statute miles.
const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.150_779_45;

/// Great-circle distance between two points in statute miles.
///
/// Uses the spherical law of cosines. Symmetric, zero for coincident points,
/// stateless, and safe to call concurrently. Out-of-range coordinates are not
/// rejected; they simply yield atypical distances.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tourguide_core::distance_miles;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let one_degree_east = Coord { x: 1.0, y: 0.0 };
/// let d = distance_miles(origin, one_degree_east);
/// assert!((d - 69.046_767).abs() < 1e-6);
/// ```
#[must_use]
pub fn distance_miles(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat1 = a.y.to_radians();
    let lon1 = a.x.to_radians();
    let lat2 = b.y.to_radians();
    let lon2 = b.x.to_radians();

    // Rounding can push the argument just past 1.0 for coincident points,
    // which would make `acos` return NaN.
    let cos_angle = (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * (lon1 - lon2).cos())
        .clamp(-1.0, 1.0);
    let angle = cos_angle.acos();

    let nautical_miles = 60.0 * angle.to_degrees();
    STATUTE_MILES_PER_NAUTICAL_MILE * nautical_miles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coincident_points_have_zero_distance() {
        let p = Coord { x: 2.35, y: 48.85 };
        assert_eq!(distance_miles(p, p), 0.0);
    }

    #[test]
    fn antipodal_points_span_half_the_great_circle() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 180.0, y: 0.0 };
        // 10_800 nautical miles in statute miles.
        let expected = 10_800.0 * STATUTE_MILES_PER_NAUTICAL_MILE;
        assert!((distance_miles(a, b) - expected).abs() < 1e-6);
    }
}
