//! Facade crate for the TourGuide reward engine.
//!
//! This crate re-exports the core domain types and the concurrent reward
//! calculator so consumers depend on a single crate.

#![forbid(unsafe_code)]

pub use tourguide_core::{
    Attraction, AttractionCatalog, CatalogError, DEFAULT_NEARBY_COUNT, NearbyAttraction,
    NearbyError, ProximityPolicy, RewardPointsError, RewardPointsProvider, User, UserReward,
    VisitedLocation, distance_miles, nearby_attractions,
};
pub use tourguide_rewards::{RewardCalculator, RewardError};
