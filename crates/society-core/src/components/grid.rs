//! Grid Component
//!
//! Dense row-major storage of agents. Edges are clipped, never wrapped.

use serde::{Deserialize, Serialize};

use society_events::{AgentSnapshot, ThinkerKind};

use crate::components::agent::{Agent, MAX_AGE};
use crate::config::Parameters;
use crate::error::InvariantViolation;

/// Fixed-size rectangular grid with exactly one agent per cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    agents: Vec<Agent>,
}

impl Grid {
    /// Builds a grid from row-major agents.
    pub fn from_agents(
        rows: usize,
        cols: usize,
        agents: Vec<Agent>,
    ) -> Result<Self, InvariantViolation> {
        if rows == 0 || cols == 0 {
            return Err(InvariantViolation::EmptyGrid { rows, cols });
        }
        if rows.checked_mul(cols) != Some(agents.len()) {
            return Err(InvariantViolation::CellCount {
                rows,
                cols,
                cells: agents.len(),
            });
        }
        Ok(Self { rows, cols, agents })
    }

    /// Builds a grid by calling `f(row, col)` for every cell in row-major order.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> Agent,
    ) -> Result<Self, InvariantViolation> {
        let Some(cells) = rows.checked_mul(cols) else {
            return Err(InvariantViolation::CellCount {
                rows,
                cols,
                cells: 0,
            });
        };
        let mut agents = Vec::with_capacity(cells);
        for row in 0..rows {
            for col in 0..cols {
                agents.push(f(row, col));
            }
        }
        Self::from_agents(rows, cols, agents)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Agent> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.agents.get(row * self.cols + col)
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Agent> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.agents.get_mut(row * self.cols + col)
    }

    /// Converts a row-major index back to (row, col).
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// Agents in row-major order.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    /// Iterates `((row, col), agent)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Agent)> + '_ {
        self.agents
            .iter()
            .enumerate()
            .map(move |(i, agent)| (self.coords(i), agent))
    }

    /// Agents within Chebyshev distance `radius` of (row, col), excluding the
    /// cell itself. The box is clipped at the grid edges.
    pub fn neighbors(
        &self,
        row: usize,
        col: usize,
        radius: usize,
    ) -> impl Iterator<Item = &Agent> + '_ {
        let row_lo = row.saturating_sub(radius);
        let row_hi = row.saturating_add(radius).min(self.rows - 1);
        let col_lo = col.saturating_sub(radius);
        let col_hi = col.saturating_add(radius).min(self.cols - 1);

        (row_lo..=row_hi)
            .flat_map(move |r| (col_lo..=col_hi).map(move |c| (r, c)))
            .filter(move |&cell| cell != (row, col))
            .map(move |(r, c)| &self.agents[r * self.cols + c])
    }

    /// Number of agents of a kind.
    pub fn count(&self, kind: ThinkerKind) -> usize {
        self.agents.iter().filter(|a| a.kind == kind).count()
    }

    /// Whether every influence is within the live cap of its agent's kind.
    pub fn within_caps(&self, params: &Parameters) -> bool {
        self.agents
            .iter()
            .all(|a| a.influence <= params.influence_cap(a.kind))
    }

    /// Clamps every influence to the live cap of the agent's current kind.
    /// Needed when caps are lowered between ticks.
    pub fn rebound_influence(&mut self, params: &Parameters) {
        for agent in &mut self.agents {
            let cap = params.influence_cap(agent.kind);
            if agent.influence > cap {
                agent.influence = cap;
            }
        }
    }

    /// Checks every agent-level invariant against the live parameters.
    pub fn verify(&self, params: &Parameters) -> Result<(), InvariantViolation> {
        if self.rows.checked_mul(self.cols) != Some(self.agents.len()) {
            return Err(InvariantViolation::CellCount {
                rows: self.rows,
                cols: self.cols,
                cells: self.agents.len(),
            });
        }

        for ((row, col), agent) in self.iter() {
            if !agent.influence.is_finite() || agent.influence < 0.0 {
                return Err(InvariantViolation::InvalidInfluence {
                    row,
                    col,
                    influence: agent.influence,
                });
            }
            let cap = params.influence_cap(agent.kind);
            if agent.influence > cap {
                return Err(InvariantViolation::InfluenceAboveCap {
                    row,
                    col,
                    influence: agent.influence,
                    cap,
                });
            }
            if !(0.0..1.0).contains(&agent.belief) {
                return Err(InvariantViolation::BeliefOutOfRange {
                    row,
                    col,
                    belief: agent.belief,
                });
            }
            if agent.age >= MAX_AGE {
                return Err(InvariantViolation::AgeOutOfRange {
                    row,
                    col,
                    age: agent.age,
                });
            }
        }
        Ok(())
    }

    /// Per-agent snapshots in row-major order.
    pub fn agent_snapshots(&self) -> Vec<AgentSnapshot> {
        self.iter()
            .map(|((row, col), agent)| AgentSnapshot {
                row,
                col,
                kind: agent.kind,
                influence: agent.influence,
                belief: agent.belief,
                age: agent.age,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_grid(rows: usize, cols: usize) -> Grid {
        Grid::from_fn(rows, cols, |r, c| {
            Agent::new(
                ThinkerKind::NonCriticalThinker,
                (r * cols + c) as f64 * 0.01,
                0.5,
                30,
            )
        })
        .unwrap()
    }

    #[test]
    fn test_from_agents_checks_cell_count() {
        let agents = vec![Agent::new(ThinkerKind::CriticalThinker, 0.0, 0.0, 0); 5];
        assert_eq!(
            Grid::from_agents(2, 3, agents),
            Err(InvariantViolation::CellCount {
                rows: 2,
                cols: 3,
                cells: 5
            })
        );
        assert!(matches!(
            Grid::from_agents(0, 3, Vec::new()),
            Err(InvariantViolation::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let rows = usize::MAX / 2 + 1;
        assert!(matches!(
            Grid::from_agents(rows, 2, Vec::new()),
            Err(InvariantViolation::CellCount { cells: 0, .. })
        ));

        let mut calls = 0;
        let result = Grid::from_fn(rows, 2, |_, _| {
            calls += 1;
            Agent::new(ThinkerKind::CriticalThinker, 0.0, 0.0, 0)
        });
        assert!(matches!(result, Err(InvariantViolation::CellCount { .. })));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = uniform_grid(3, 4);
        assert!(grid.get(2, 3).is_some());
        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 4).is_none());
        assert_eq!(grid.coords(7), (1, 3));
    }

    #[test]
    fn test_interior_neighborhood() {
        let grid = uniform_grid(5, 5);
        assert_eq!(grid.neighbors(2, 2, 1).count(), 8);
        assert_eq!(grid.neighbors(2, 2, 2).count(), 24);
    }

    #[test]
    fn test_corner_neighborhood_is_clipped() {
        let grid = uniform_grid(5, 5);
        assert_eq!(grid.neighbors(0, 0, 1).count(), 3);
        assert_eq!(grid.neighbors(4, 4, 1).count(), 3);
        assert_eq!(grid.neighbors(0, 2, 1).count(), 5);
    }

    #[test]
    fn test_huge_radius_covers_grid_without_overflow() {
        let grid = uniform_grid(4, 6);
        assert_eq!(grid.neighbors(1, 1, 1000).count(), 23);
        assert_eq!(grid.neighbors(3, 5, usize::MAX).count(), 23);
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let grid = uniform_grid(3, 3);
        let center = grid.get(1, 1).unwrap().influence;
        assert!(grid.neighbors(1, 1, 1).all(|a| a.influence != center));
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        let grid = uniform_grid(1, 1);
        assert_eq!(grid.neighbors(0, 0, 3).count(), 0);
    }

    #[test]
    fn test_verify_detects_cap_violation() {
        let params = Parameters::default();
        let mut grid = uniform_grid(2, 2);
        assert!(grid.verify(&params).is_ok());

        grid.get_mut(1, 0).unwrap().influence = params.confirmation_bias + 1.0;
        assert!(matches!(
            grid.verify(&params),
            Err(InvariantViolation::InfluenceAboveCap { row: 1, col: 0, .. })
        ));

        grid.rebound_influence(&params);
        assert!(grid.verify(&params).is_ok());
        assert_eq!(grid.get(1, 0).unwrap().influence, params.confirmation_bias);
    }

    #[test]
    fn test_verify_detects_negative_influence() {
        let params = Parameters::default();
        let mut grid = uniform_grid(2, 2);
        grid.get_mut(0, 1).unwrap().influence = -0.1;
        assert!(matches!(
            grid.verify(&params),
            Err(InvariantViolation::InvalidInfluence { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn test_count_by_kind() {
        let mut grid = uniform_grid(2, 2);
        grid.get_mut(0, 0).unwrap().kind = ThinkerKind::CriticalThinker;
        assert_eq!(grid.count(ThinkerKind::CriticalThinker), 1);
        assert_eq!(grid.count(ThinkerKind::NonCriticalThinker), 3);
    }
}
