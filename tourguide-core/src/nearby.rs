//! Rank attractions by proximity to a user's current position.

use geo::Coord;
use thiserror::Error;

use crate::{
    Attraction, AttractionCatalog, CatalogError, RewardPointsError, RewardPointsProvider,
    distance_miles,
};

/// Number of attractions returned when the caller has no preference.
pub const DEFAULT_NEARBY_COUNT: usize = 5;

/// A ranked attraction annotated for the boundary layer.
///
/// Serialized as-is by the HTTP layer, so the field set mirrors the response
/// contract: attraction name and coordinates, the user's coordinates, the
/// distance between them, and the points the user would earn.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearbyAttraction {
    /// Attraction display name.
    pub name: String,
    /// Attraction position, `x = longitude`, `y = latitude`.
    pub attraction_location: Coord<f64>,
    /// The user's current position.
    pub user_location: Coord<f64>,
    /// Great-circle distance between the two, in statute miles.
    pub distance_miles: f64,
    /// Points the user would earn for visiting.
    pub reward_points: u32,
}

/// Errors from [`nearby_attractions`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NearbyError {
    /// The attraction catalog failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The reward-point oracle failed.
    #[error(transparent)]
    Points(#[from] RewardPointsError),
}

/// Return the `count` attractions closest to `user_location`.
///
/// Every catalog attraction is eligible regardless of distance. Results are
/// sorted by ascending distance; exact ties keep catalog order. The oracle is
/// consulted only for the selected attractions, and the user's reward
/// collection is never touched — the records report what the user *would*
/// earn.
///
/// # Errors
/// Propagates catalog and oracle failures unchanged.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tourguide_core::test_support::{FixedRewardPoints, MemoryCatalog};
/// use tourguide_core::{Attraction, nearby_attractions};
///
/// let catalog = MemoryCatalog::with_attraction(Attraction::new(
///     1,
///     "Disneyland",
///     Coord { x: -117.922, y: 33.817 },
/// ));
/// let nearby = nearby_attractions(
///     Coord { x: 0.0, y: 0.0 },
///     42,
///     &catalog,
///     &FixedRewardPoints(100),
///     5,
/// )?;
/// assert_eq!(nearby.len(), 1);
/// assert_eq!(nearby[0].reward_points, 100);
/// # Ok::<(), tourguide_core::NearbyError>(())
/// ```
pub fn nearby_attractions(
    user_location: Coord<f64>,
    user_id: u64,
    catalog: &dyn AttractionCatalog,
    points: &dyn RewardPointsProvider,
    count: usize,
) -> Result<Vec<NearbyAttraction>, NearbyError> {
    let mut ranked: Vec<(f64, Attraction)> = catalog
        .get_attractions()?
        .into_iter()
        .map(|attraction| (distance_miles(attraction.location, user_location), attraction))
        .collect();
    // Stable sort keeps catalog order for exact distance ties.
    ranked.sort_by(|left, right| left.0.total_cmp(&right.0));
    ranked.truncate(count);

    ranked
        .into_iter()
        .map(|(distance, attraction)| {
            let reward_points = points.attraction_reward_points(attraction.id, user_id)?;
            Ok(NearbyAttraction {
                name: attraction.name,
                attraction_location: attraction.location,
                user_location,
                distance_miles: distance,
                reward_points,
            })
        })
        .collect()
}
