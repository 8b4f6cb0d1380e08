//! Test-only, in-memory catalog and oracle implementations used by unit and
//! behaviour tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::{
    Attraction, AttractionCatalog, CatalogError, RewardPointsError, RewardPointsProvider,
};

/// In-memory `AttractionCatalog` backed by a `Vec`.
///
/// Intended only for small datasets in tests.
#[derive(Default, Debug)]
pub struct MemoryCatalog {
    attractions: Vec<Attraction>,
}

impl MemoryCatalog {
    /// Create a catalog containing a single attraction.
    #[must_use]
    pub fn with_attraction(attraction: Attraction) -> Self {
        Self::with_attractions(std::iter::once(attraction))
    }

    /// Create a catalog from a collection of attractions.
    pub fn with_attractions<I>(attractions: I) -> Self
    where
        I: IntoIterator<Item = Attraction>,
    {
        Self {
            attractions: attractions.into_iter().collect(),
        }
    }
}

impl AttractionCatalog for MemoryCatalog {
    fn get_attractions(&self) -> Result<Vec<Attraction>, CatalogError> {
        Ok(self.attractions.clone())
    }
}

/// Catalog that always fails, for error-path tests.
#[derive(Default, Debug, Copy, Clone)]
pub struct FailingCatalog;

impl AttractionCatalog for FailingCatalog {
    fn get_attractions(&self) -> Result<Vec<Attraction>, CatalogError> {
        Err(CatalogError::Unavailable {
            reason: "catalog offline".into(),
        })
    }
}

/// Oracle returning the same point value for every pair.
#[derive(Default, Debug, Copy, Clone)]
pub struct FixedRewardPoints(pub u32);

impl RewardPointsProvider for FixedRewardPoints {
    fn attraction_reward_points(&self, _: u64, _: u64) -> Result<u32, RewardPointsError> {
        Ok(self.0)
    }
}

/// Oracle that counts lookups, for asserting at-most-once semantics.
#[derive(Default, Debug)]
pub struct CountingRewardPoints {
    points: u32,
    calls: AtomicUsize,
}

impl CountingRewardPoints {
    /// Oracle returning `points` for every pair.
    #[must_use]
    pub fn new(points: u32) -> Self {
        Self {
            points,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of lookups performed so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RewardPointsProvider for CountingRewardPoints {
    fn attraction_reward_points(&self, _: u64, _: u64) -> Result<u32, RewardPointsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.points)
    }
}

/// Oracle that always fails, for error-path tests.
#[derive(Default, Debug, Copy, Clone)]
pub struct FailingRewardPoints;

impl RewardPointsProvider for FailingRewardPoints {
    fn attraction_reward_points(
        &self,
        attraction_id: u64,
        _: u64,
    ) -> Result<u32, RewardPointsError> {
        Err(RewardPointsError::Lookup {
            attraction_id,
            reason: "oracle offline".into(),
        })
    }
}
