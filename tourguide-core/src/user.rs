//! Users, their travel history, and earned rewards.

use std::collections::HashSet;
use std::time::SystemTime;

use geo::Coord;

use crate::{Attraction, VisitedLocation};

/// Points granted for having been near an attraction at least once.
///
/// At most one reward exists per (user, attraction) pair; [`User::add_reward`]
/// rejects duplicates for the same attraction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserReward {
    /// The qualifying position sample.
    pub visited_location: VisitedLocation,
    /// The attraction the user was near.
    pub attraction: Attraction,
    /// Point value fetched from the reward-point oracle.
    pub reward_points: u32,
}

impl UserReward {
    /// Construct a reward record.
    pub fn new(visited_location: VisitedLocation, attraction: Attraction, reward_points: u32) -> Self {
        Self {
            visited_location,
            attraction,
            reward_points,
        }
    }
}

/// A user with an append-only travel history and a reward collection.
///
/// The reward collection is mutated only by the reward calculator; there is
/// no removal path.
///
/// # Examples
/// ```
/// use std::time::SystemTime;
/// use geo::Coord;
/// use tourguide_core::User;
///
/// let mut user = User::new(1, "jon");
/// user.add_visited_location(Coord { x: 0.0, y: 0.0 }, SystemTime::now());
/// assert_eq!(user.visited_locations().len(), 1);
/// assert!(user.rewards().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    visited_locations: Vec<VisitedLocation>,
    rewards: Vec<UserReward>,
}

impl User {
    /// Construct a user with an empty history and no rewards.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            visited_locations: Vec::new(),
            rewards: Vec::new(),
        }
    }

    /// Append a position sample to the travel history.
    pub fn add_visited_location(&mut self, location: Coord<f64>, time: SystemTime) {
        self.visited_locations
            .push(VisitedLocation::new(self.id, location, time));
    }

    /// The travel history in sample order.
    #[must_use]
    pub fn visited_locations(&self) -> &[VisitedLocation] {
        &self.visited_locations
    }

    /// The most recent position sample, if any.
    #[must_use]
    pub fn latest_location(&self) -> Option<&VisitedLocation> {
        self.visited_locations.last()
    }

    /// The rewards earned so far, in commit order.
    #[must_use]
    pub fn rewards(&self) -> &[UserReward] {
        &self.rewards
    }

    /// Total points across all rewards.
    #[must_use]
    pub fn reward_points_total(&self) -> u64 {
        self.rewards.iter().map(|r| u64::from(r.reward_points)).sum()
    }

    /// Append a reward unless one already exists for the same attraction.
    ///
    /// Returns `true` when the reward was added.
    pub fn add_reward(&mut self, reward: UserReward) -> bool {
        if self
            .rewards
            .iter()
            .any(|r| r.attraction.id == reward.attraction.id)
        {
            return false;
        }
        self.rewards.push(reward);
        true
    }

    /// Identifiers of attractions already rewarded to this user.
    #[must_use]
    pub fn rewarded_attraction_ids(&self) -> HashSet<u64> {
        self.rewards.iter().map(|r| r.attraction.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reward(attraction_id: u64, points: u32) -> UserReward {
        let location = Coord { x: 0.0, y: 0.0 };
        UserReward::new(
            VisitedLocation::new(1, location, SystemTime::UNIX_EPOCH),
            Attraction::new(attraction_id, "museum", location),
            points,
        )
    }

    #[test]
    fn history_is_append_only_and_ordered() {
        let mut user = User::new(1, "ana");
        user.add_visited_location(Coord { x: 1.0, y: 1.0 }, SystemTime::UNIX_EPOCH);
        user.add_visited_location(Coord { x: 2.0, y: 2.0 }, SystemTime::now());
        assert_eq!(user.visited_locations().len(), 2);
        assert_eq!(user.latest_location().unwrap().location.x, 2.0);
    }

    #[test]
    fn rejects_second_reward_for_same_attraction() {
        let mut user = User::new(1, "ana");
        assert!(user.add_reward(sample_reward(5, 100)));
        assert!(!user.add_reward(sample_reward(5, 200)));
        assert_eq!(user.rewards().len(), 1);
        assert_eq!(user.reward_points_total(), 100);
    }

    #[test]
    fn tracks_rewarded_attraction_ids() {
        let mut user = User::new(1, "ana");
        user.add_reward(sample_reward(5, 10));
        user.add_reward(sample_reward(9, 10));
        let ids = user.rewarded_attraction_ids();
        assert!(ids.contains(&5) && ids.contains(&9));
        assert_eq!(ids.len(), 2);
    }
}
