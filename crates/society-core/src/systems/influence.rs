//! Social Influence System
//!
//! Neighbors pull each agent toward their kind in proportion to their
//! influence. Neighbor state is always read from the pre-tick snapshot so
//! the outcome does not depend on scan order.

use society_events::{ThinkerKind, TickReport};

use crate::components::{Agent, Grid};
use crate::config::Parameters;

/// Thresholds and conversion boosts
pub mod influence_constants {
    /// Critical ratio below `1 - this` converts a critical thinker
    pub const CRITICAL_THRESHOLD: f64 = 0.3;
    /// Base critical ratio a non-critical thinker must exceed to convert
    pub const NON_CRITICAL_BASE_THRESHOLD: f64 = 0.6;
    /// Influence gained when converting to critical thinking
    pub const TO_CRITICAL_BOOST: f64 = 1.0;
    /// Influence gained when converting to non-critical thinking
    pub const TO_NON_CRITICAL_BOOST: f64 = 0.5;
}

use influence_constants::*;

/// Summed influence of a neighborhood, split by kind
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NeighborInfluence {
    pub critical: f64,
    pub non_critical: f64,
}

impl NeighborInfluence {
    pub fn total(&self) -> f64 {
        self.critical + self.non_critical
    }

    /// Critical share of the total. `None` when the neighborhood carries no
    /// influence at all.
    pub fn critical_ratio(&self) -> Option<f64> {
        let total = self.total();
        if total > 0.0 {
            Some(self.critical / total)
        } else {
            None
        }
    }
}

/// Sums neighbor influence around (row, col) in `snapshot`.
pub fn neighbor_influence(snapshot: &Grid, row: usize, col: usize, radius: usize) -> NeighborInfluence {
    snapshot
        .neighbors(row, col, radius)
        .fold(NeighborInfluence::default(), |mut acc, neighbor| {
            match neighbor.kind {
                ThinkerKind::CriticalThinker => acc.critical += neighbor.influence,
                ThinkerKind::NonCriticalThinker => acc.non_critical += neighbor.influence,
            }
            acc
        })
}

/// Critical ratio cutoff for an agent.
///
/// Critical thinkers use a fixed 0.3 (they convert below 0.7). Non-critical
/// thinkers start at 0.6, raised by education when young and lowered by
/// confirmation bias.
pub fn change_threshold(agent: &Agent, params: &Parameters) -> f64 {
    match agent.kind {
        ThinkerKind::CriticalThinker => CRITICAL_THRESHOLD,
        ThinkerKind::NonCriticalThinker => {
            let education_effect = if agent.in_education_age() {
                params.education_strength / 10.0
            } else {
                0.0
            };
            let bias_effect = params.confirmation_bias / 10.0;
            NON_CRITICAL_BASE_THRESHOLD + education_effect - bias_effect
        }
    }
}

/// The kind the agent converts to, if any.
pub fn decide_transition(
    agent: &Agent,
    influence: NeighborInfluence,
    params: &Parameters,
) -> Option<ThinkerKind> {
    let ratio = influence.critical_ratio()?;
    let threshold = change_threshold(agent, params);

    let flips = match agent.kind {
        ThinkerKind::NonCriticalThinker => ratio > threshold,
        ThinkerKind::CriticalThinker => ratio < 1.0 - threshold,
    };
    flips.then(|| agent.kind.opposite())
}

/// Applies neighbor influence to every agent of `working`, reading neighbors
/// from `snapshot`. Both grids must share dimensions.
pub fn apply_social_influence(
    snapshot: &Grid,
    working: &mut Grid,
    params: &Parameters,
    report: &mut TickReport,
) {
    debug_assert_eq!(snapshot.dimensions(), working.dimensions());
    let cols = working.cols();

    for (index, agent) in working.agents_mut().iter_mut().enumerate() {
        let (row, col) = (index / cols, index % cols);
        let influence = neighbor_influence(snapshot, row, col, params.influence_radius);

        match decide_transition(agent, influence, params) {
            Some(ThinkerKind::CriticalThinker) => {
                agent.become_kind(
                    ThinkerKind::CriticalThinker,
                    TO_CRITICAL_BOOST,
                    params.education_strength,
                );
                report.converted_to_critical += 1;
            }
            Some(ThinkerKind::NonCriticalThinker) => {
                agent.become_kind(
                    ThinkerKind::NonCriticalThinker,
                    TO_NON_CRITICAL_BOOST,
                    params.confirmation_bias,
                );
                report.converted_to_non_critical += 1;
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(kind: ThinkerKind, influence: f64, age: u8) -> Agent {
        Agent::new(kind, influence, 0.5, age)
    }

    #[test]
    fn test_ratio_none_when_no_influence() {
        assert_eq!(NeighborInfluence::default().critical_ratio(), None);
        let influence = NeighborInfluence {
            critical: 3.0,
            non_critical: 1.0,
        };
        assert_eq!(influence.critical_ratio(), Some(0.75));
    }

    #[test]
    fn test_thresholds() {
        let params = Parameters {
            education_strength: 5.0,
            confirmation_bias: 4.0,
            ..Default::default()
        };

        let critical = agent(ThinkerKind::CriticalThinker, 1.0, 10);
        assert_eq!(change_threshold(&critical, &params), 0.3);

        let young = agent(ThinkerKind::NonCriticalThinker, 1.0, 18);
        assert!((change_threshold(&young, &params) - 0.7).abs() < 1e-12);

        let adult = agent(ThinkerKind::NonCriticalThinker, 1.0, 50);
        assert!((change_threshold(&adult, &params) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_critical_thinker_converts_below_seventy_percent() {
        let params = Parameters::default();
        let critical = agent(ThinkerKind::CriticalThinker, 1.0, 40);

        let weak = NeighborInfluence {
            critical: 6.0,
            non_critical: 4.0,
        };
        assert_eq!(
            decide_transition(&critical, weak, &params),
            Some(ThinkerKind::NonCriticalThinker)
        );

        let strong = NeighborInfluence {
            critical: 8.0,
            non_critical: 2.0,
        };
        assert_eq!(decide_transition(&critical, strong, &params), None);
    }

    #[test]
    fn test_non_critical_conversion_depends_on_threshold() {
        let params = Parameters {
            education_strength: 5.0,
            confirmation_bias: 4.0,
            ..Default::default()
        };
        let balanced = NeighborInfluence {
            critical: 1.0,
            non_critical: 1.0,
        };

        // threshold 0.2
        let adult = agent(ThinkerKind::NonCriticalThinker, 0.5, 40);
        assert_eq!(
            decide_transition(&adult, balanced, &params),
            Some(ThinkerKind::CriticalThinker)
        );

        // threshold 0.7
        let young = agent(ThinkerKind::NonCriticalThinker, 0.5, 20);
        assert_eq!(decide_transition(&young, balanced, &params), None);
    }

    #[test]
    fn test_neighbor_influence_sums_by_kind() {
        let grid = Grid::from_fn(3, 3, |r, c| {
            if (r + c) % 2 == 0 {
                agent(ThinkerKind::CriticalThinker, 2.0, 40)
            } else {
                agent(ThinkerKind::NonCriticalThinker, 1.0, 40)
            }
        })
        .unwrap();

        // center (1,1) is critical; 4 critical corners and 4 non-critical edges
        let influence = neighbor_influence(&grid, 1, 1, 1);
        assert_eq!(influence.critical, 8.0);
        assert_eq!(influence.non_critical, 4.0);
    }

    #[test]
    fn test_reads_snapshot_not_working_grid() {
        let params = Parameters {
            education_strength: 10.0,
            confirmation_bias: 1.0,
            influence_radius: 1,
            ..Default::default()
        };
        // A 1x3 strip: critical, non-critical, non-critical.
        let snapshot = Grid::from_agents(
            1,
            3,
            vec![
                agent(ThinkerKind::CriticalThinker, 5.0, 40),
                agent(ThinkerKind::NonCriticalThinker, 0.0, 40),
                agent(ThinkerKind::NonCriticalThinker, 0.0, 40),
            ],
        )
        .unwrap();
        let mut working = snapshot.clone();
        let mut report = TickReport::new(1);

        apply_social_influence(&snapshot, &mut working, &params, &mut report);

        // The middle agent converts; the right agent only sees the middle
        // agent's pre-tick state (zero influence) and stays put.
        assert!(working.get(0, 1).unwrap().is_critical());
        assert!(!working.get(0, 2).unwrap().is_critical());
        assert_eq!(report.converted_to_critical, 1);
        assert_eq!(report.converted_to_non_critical, 0);
    }
}
