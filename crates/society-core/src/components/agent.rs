//! Agent Components
//!
//! The individual occupying one grid cell.

use serde::{Deserialize, Serialize};

use society_events::ThinkerKind;

/// Upper bound (exclusive) on agent age
pub const MAX_AGE: u8 = 80;

/// Agents younger than this receive the education effect
pub const EDUCATION_AGE_LIMIT: u8 = 25;

/// One simulated individual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// The trait under diffusion
    pub kind: ThinkerKind,
    /// Persuasive weight in neighbor aggregation, bounded by the kind's cap
    pub influence: f64,
    /// Reserved. Initialized but not read by any rule.
    pub belief: f64,
    /// Age in years, 0-79
    pub age: u8,
}

impl Agent {
    pub fn new(kind: ThinkerKind, influence: f64, belief: f64, age: u8) -> Self {
        Self {
            kind,
            influence,
            belief,
            age,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.kind.is_critical()
    }

    /// Whether the agent is young enough to feel the education effect.
    pub fn in_education_age(&self) -> bool {
        self.age < EDUCATION_AGE_LIMIT
    }

    /// Raises influence by `amount` without exceeding `cap`.
    pub fn boost_influence(&mut self, amount: f64, cap: f64) {
        self.influence = (self.influence + amount).min(cap);
    }

    /// Switches kind and boosts influence up to the new kind's cap.
    pub fn become_kind(&mut self, kind: ThinkerKind, boost: f64, cap: f64) {
        self.kind = kind;
        self.boost_influence(boost, cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boost_is_capped() {
        let mut agent = Agent::new(ThinkerKind::NonCriticalThinker, 3.8, 0.2, 40);
        agent.boost_influence(0.5, 4.0);
        assert_eq!(agent.influence, 4.0);

        agent.influence = 1.0;
        agent.boost_influence(0.5, 4.0);
        assert_eq!(agent.influence, 1.5);
    }

    #[test]
    fn test_become_kind() {
        let mut agent = Agent::new(ThinkerKind::NonCriticalThinker, 0.0, 0.5, 30);
        agent.become_kind(ThinkerKind::CriticalThinker, 1.0, 10.0);
        assert!(agent.is_critical());
        assert_eq!(agent.influence, 1.0);
    }

    #[test]
    fn test_education_age() {
        assert!(Agent::new(ThinkerKind::CriticalThinker, 0.0, 0.0, 24).in_education_age());
        assert!(!Agent::new(ThinkerKind::CriticalThinker, 0.0, 0.0, 25).in_education_age());
    }
}
