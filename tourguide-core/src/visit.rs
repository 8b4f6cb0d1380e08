//! Timestamped position samples from a user's travel history.

use std::time::SystemTime;

use geo::Coord;

/// A single GPS sample in a user's travel history.
///
/// Immutable once created; the owning [`User`](crate::User) keeps these in an
/// append-only ordered sequence.
///
/// # Examples
/// ```
/// use std::time::SystemTime;
/// use geo::Coord;
/// use tourguide_core::VisitedLocation;
///
/// let visit = VisitedLocation::new(1, Coord { x: 0.0, y: 0.0 }, SystemTime::now());
/// assert_eq!(visit.user_id, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitedLocation {
    /// Identifier of the user the sample belongs to.
    pub user_id: u64,
    /// Sampled position, `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// When the position was sampled.
    pub time: SystemTime,
}

impl VisitedLocation {
    /// Construct a visited location.
    pub fn new(user_id: u64, location: Coord<f64>, time: SystemTime) -> Self {
        Self {
            user_id,
            location,
            time,
        }
    }
}
