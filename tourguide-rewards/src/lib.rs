//! Concurrent reward calculation for TourGuide users.
//!
//! [`RewardCalculator`] evaluates every (visited location, attraction) pair
//! for a user, rewards each attraction at most once, and commits the results
//! only after all parallel work has joined. The fan-out runs on a bounded
//! [`rayon`] pool; the per-call dedup set is lock-guarded so discovery of the
//! same attraction from two locations cannot double-reward.

#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use thiserror::Error;

use tourguide_core::{
    Attraction, AttractionCatalog, CatalogError, ProximityPolicy, RewardPointsError,
    RewardPointsProvider, User, UserReward, VisitedLocation, distance_miles,
};

/// Errors from building or running a [`RewardCalculator`].
#[derive(Debug, Error)]
pub enum RewardError {
    /// The attraction catalog failed; nothing was committed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// The reward-point oracle failed; nothing was committed.
    #[error(transparent)]
    Points(#[from] RewardPointsError),
    /// The worker pool could not be constructed.
    #[error("failed to build reward worker pool")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Calculates and commits rewards for one user at a time.
///
/// The calculator may serve different users concurrently, but a single user
/// must not be calculated from two threads at once; the `&mut User` receiver
/// enforces that discipline for callers holding the user directly.
///
/// # Examples
/// ```
/// use std::time::SystemTime;
/// use geo::Coord;
/// use tourguide_core::test_support::{FixedRewardPoints, MemoryCatalog};
/// use tourguide_core::{Attraction, ProximityPolicy, User};
/// use tourguide_rewards::RewardCalculator;
///
/// # fn main() -> Result<(), tourguide_rewards::RewardError> {
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let catalog = MemoryCatalog::with_attraction(Attraction::new(1, "museum", origin));
/// let calculator = RewardCalculator::new(catalog, FixedRewardPoints(100))?;
///
/// let mut user = User::new(1, "jon");
/// user.add_visited_location(origin, SystemTime::now());
/// let added = calculator.calculate_rewards(&mut user, ProximityPolicy::new())?;
/// assert_eq!(added, 1);
/// assert_eq!(user.rewards()[0].reward_points, 100);
/// # Ok(())
/// # }
/// ```
pub struct RewardCalculator<C, P> {
    catalog: C,
    points: P,
    pool: ThreadPool,
    calculations: AtomicU64,
}

impl<C, P> RewardCalculator<C, P>
where
    C: AttractionCatalog,
    P: RewardPointsProvider,
{
    /// Build a calculator with rayon's default worker count.
    ///
    /// # Errors
    /// Returns [`RewardError::Pool`] when the worker pool cannot be built.
    pub fn new(catalog: C, points: P) -> Result<Self, RewardError> {
        Self::with_worker_threads(catalog, points, 0)
    }

    /// Build a calculator with a fixed worker count.
    ///
    /// `workers == 0` selects rayon's default. The pool caps the fan-out: no
    /// matter how large the location×attraction cross-product is, at most
    /// `workers` evaluations run at once.
    ///
    /// # Errors
    /// Returns [`RewardError::Pool`] when the worker pool cannot be built.
    pub fn with_worker_threads(catalog: C, points: P, workers: usize) -> Result<Self, RewardError> {
        let pool = ThreadPoolBuilder::new().num_threads(workers).build()?;
        Ok(Self {
            catalog,
            points,
            pool,
            calculations: AtomicU64::new(0),
        })
    }

    /// Number of calculations started on this calculator.
    #[must_use]
    pub fn calculation_count(&self) -> u64 {
        self.calculations.load(Ordering::Relaxed)
    }

    /// Evaluate the user's travel history against the catalog and append a
    /// reward for every newly qualifying attraction.
    ///
    /// Returns the number of rewards added. Re-invocation is idempotent:
    /// attractions already rewarded are skipped, existing rewards are never
    /// duplicated or removed, and an empty travel history yields zero rewards
    /// rather than an error.
    ///
    /// # Errors
    /// Any catalog or oracle failure aborts the whole calculation; the user's
    /// reward collection is left exactly as it was.
    pub fn calculate_rewards(
        &self,
        user: &mut User,
        policy: ProximityPolicy,
    ) -> Result<usize, RewardError> {
        self.calculations.fetch_add(1, Ordering::Relaxed);

        // Snapshot history and catalog; the catalog is fetched once per call.
        let attractions = self.catalog.get_attractions()?;
        let visits = user.visited_locations().to_vec();
        let user_id = user.id;

        // Seeded with already-rewarded attractions so re-invocation skips them.
        let claimed = Mutex::new(user.rewarded_attraction_ids());

        let discovered: Vec<Vec<UserReward>> = self.pool.install(|| {
            visits
                .par_iter()
                .map(|visit| self.rewards_for_visit(visit, user_id, &attractions, policy, &claimed))
                .collect::<Result<_, RewardError>>()
        })?;

        // All workers have joined; commit in a single pass so a reader never
        // observes a partial calculation.
        let mut added = 0;
        for reward in discovered.into_iter().flatten() {
            if user.add_reward(reward) {
                added += 1;
            }
        }
        debug!(
            "calculated rewards for user {user_id}: {added} added across {} visits and {} attractions",
            visits.len(),
            attractions.len(),
        );
        Ok(added)
    }

    fn rewards_for_visit(
        &self,
        visit: &VisitedLocation,
        user_id: u64,
        attractions: &[Attraction],
        policy: ProximityPolicy,
        claimed: &Mutex<HashSet<u64>>,
    ) -> Result<Vec<UserReward>, RewardError> {
        attractions
            .par_iter()
            .filter_map(|attraction| {
                // Cheap skip for attractions another worker already claimed.
                if lock_claimed(claimed).contains(&attraction.id) {
                    return None;
                }
                let distance = distance_miles(attraction.location, visit.location);
                if !policy.is_near_for_reward(distance) {
                    return None;
                }
                // `insert` under the lock is the atomic check-and-insert: of
                // two concurrent discoveries of the same attraction exactly
                // one wins the claim.
                if !lock_claimed(claimed).insert(attraction.id) {
                    return None;
                }
                Some(
                    self.points
                        .attraction_reward_points(attraction.id, user_id)
                        .map(|points| UserReward::new(visit.clone(), attraction.clone(), points))
                        .map_err(RewardError::from),
                )
            })
            .collect()
    }
}

fn lock_claimed(claimed: &Mutex<HashSet<u64>>) -> MutexGuard<'_, HashSet<u64>> {
    // A worker can only panic between claim and reward construction; the set
    // stays usable, so recover it rather than propagating the poison.
    claimed.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use geo::Coord;
    use tourguide_core::test_support::{FixedRewardPoints, MemoryCatalog};

    use super::*;

    const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

    fn calculator(
        catalog: MemoryCatalog,
    ) -> RewardCalculator<MemoryCatalog, FixedRewardPoints> {
        RewardCalculator::with_worker_threads(catalog, FixedRewardPoints(10), 4).unwrap()
    }

    #[test]
    fn empty_history_produces_no_rewards() {
        let calc = calculator(MemoryCatalog::with_attraction(Attraction::new(
            1, "museum", ORIGIN,
        )));
        let mut user = User::new(1, "jon");
        assert_eq!(calc.calculate_rewards(&mut user, ProximityPolicy::new()).unwrap(), 0);
        assert!(user.rewards().is_empty());
    }

    #[test]
    fn counts_calculations() {
        let calc = calculator(MemoryCatalog::default());
        let mut user = User::new(1, "jon");
        user.add_visited_location(ORIGIN, SystemTime::now());
        calc.calculate_rewards(&mut user, ProximityPolicy::new()).unwrap();
        calc.calculate_rewards(&mut user, ProximityPolicy::new()).unwrap();
        assert_eq!(calc.calculation_count(), 2);
    }
}
