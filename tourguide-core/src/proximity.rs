//! Proximity thresholds for reward qualification.
//!
//! The policy is a plain value passed to each calculation rather than
//! process-wide state, so concurrent calculations each see a fixed radius.

/// Default reward radius in statute miles.
pub const DEFAULT_REWARD_RADIUS_MILES: f64 = 10.0;

/// Radius within which an attraction counts as visible, in statute miles.
///
/// Always larger than the reward radius in practice, though not enforced.
const ATTRACTION_VISIBILITY_RADIUS_MILES: f64 = 200.0;

/// Distance thresholds deciding whether a visit qualifies for a reward.
///
/// # Examples
/// ```
/// use tourguide_core::ProximityPolicy;
///
/// let policy = ProximityPolicy::new().with_reward_radius(25.0);
/// assert!(policy.is_near_for_reward(25.0));
/// assert!(!policy.is_near_for_reward(25.1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityPolicy {
    reward_radius_miles: f64,
}

impl Default for ProximityPolicy {
    fn default() -> Self {
        Self {
            reward_radius_miles: DEFAULT_REWARD_RADIUS_MILES,
        }
    }
}

impl ProximityPolicy {
    /// Policy with the default reward radius.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reward radius while returning `self` for chaining.
    #[must_use]
    pub fn with_reward_radius(mut self, miles: f64) -> Self {
        self.set_reward_radius(miles);
        self
    }

    /// Replace the reward radius.
    pub fn set_reward_radius(&mut self, miles: f64) {
        self.reward_radius_miles = miles;
    }

    /// Restore the default reward radius.
    pub fn reset_reward_radius(&mut self) {
        self.reward_radius_miles = DEFAULT_REWARD_RADIUS_MILES;
    }

    /// The current reward radius in statute miles.
    #[must_use]
    pub fn reward_radius_miles(&self) -> f64 {
        self.reward_radius_miles
    }

    /// Whether a distance qualifies for a reward.
    #[must_use]
    pub fn is_near_for_reward(&self, distance_miles: f64) -> bool {
        distance_miles <= self.reward_radius_miles
    }

    /// Whether a distance is within attraction visibility.
    ///
    /// Currently unconsumed by the nearby-attraction ranking, which is
    /// deliberately unbounded; kept for boundary layers that want a coarse
    /// visibility filter.
    #[must_use]
    pub fn is_within_visibility(distance_miles: f64) -> bool {
        distance_miles <= ATTRACTION_VISIBILITY_RADIUS_MILES
    }
}
