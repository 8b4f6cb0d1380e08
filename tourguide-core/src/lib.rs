//! Core domain types for the TourGuide reward engine.
//!
//! Coordinates are WGS84 [`geo::Coord`] values with `x = longitude` and
//! `y = latitude`. Distances are statute miles throughout.
//!
//! The crate defines the user and attraction data model, the great-circle
//! distance function, the proximity policy, the traits for the two external
//! collaborators (attraction catalog and reward-point oracle), and the
//! nearby-attraction ranking. The concurrent reward calculation lives in the
//! `tourguide-rewards` crate.

#![forbid(unsafe_code)]

pub mod attraction;
pub mod catalog;
pub mod distance;
pub mod nearby;
pub mod points;
pub mod proximity;
pub mod test_support;
pub mod user;
pub mod visit;

pub use attraction::Attraction;
pub use catalog::{AttractionCatalog, CatalogError};
pub use distance::distance_miles;
pub use nearby::{DEFAULT_NEARBY_COUNT, NearbyAttraction, NearbyError, nearby_attractions};
pub use points::{RewardPointsError, RewardPointsProvider};
pub use proximity::ProximityPolicy;
pub use user::{User, UserReward};
pub use visit::VisitedLocation;
