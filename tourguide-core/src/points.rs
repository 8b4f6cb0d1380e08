//! Access to the external reward-point oracle.

use thiserror::Error;

/// Errors from [`RewardPointsProvider::attraction_reward_points`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewardPointsError {
    /// The oracle could not produce a point value for the pair.
    #[error("reward point lookup failed for attraction {attraction_id}: {reason}")]
    Lookup {
        /// Attraction whose lookup failed.
        attraction_id: u64,
        /// Service-provided description of the failure.
        reason: String,
    },
}

/// Fetch the point value a user earns for visiting an attraction.
///
/// The oracle is authoritative and side-effect-free from this engine's
/// perspective. Implementations must be `Send + Sync`; lookups run from many
/// worker threads.
///
/// # Examples
/// ```
/// use tourguide_core::{RewardPointsError, RewardPointsProvider};
///
/// struct FlatHundred;
///
/// impl RewardPointsProvider for FlatHundred {
///     fn attraction_reward_points(&self, _: u64, _: u64) -> Result<u32, RewardPointsError> {
///         Ok(100)
///     }
/// }
///
/// assert_eq!(FlatHundred.attraction_reward_points(1, 2)?, 100);
/// # Ok::<(), RewardPointsError>(())
/// ```
pub trait RewardPointsProvider: Send + Sync {
    /// Return the point value for the given attraction and user.
    fn attraction_reward_points(
        &self,
        attraction_id: u64,
        user_id: u64,
    ) -> Result<u32, RewardPointsError>;
}

impl<T: RewardPointsProvider + ?Sized> RewardPointsProvider for &T {
    fn attraction_reward_points(
        &self,
        attraction_id: u64,
        user_id: u64,
    ) -> Result<u32, RewardPointsError> {
        (**self).attraction_reward_points(attraction_id, user_id)
    }
}
