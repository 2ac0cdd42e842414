//! Snapshot Types
//!
//! Serialization structs for population statistics and state output.
//!
//! Snapshots capture the complete grid at a point in time so an external
//! renderer can draw it without linking against the engine.

use serde::{Deserialize, Serialize};

use crate::ThinkerKind;

/// Generates a snapshot ID for the given generation.
pub fn generate_snapshot_id(generation: u64) -> String {
    format!("gen_{:06}", generation)
}

/// Population share of each kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationStats {
    pub critical_count: usize,
    pub non_critical_count: usize,
    /// Percentage of critical thinkers, one decimal place
    pub critical_percent: f64,
    /// Percentage of non-critical thinkers, one decimal place
    pub non_critical_percent: f64,
}

impl PopulationStats {
    /// Builds statistics from raw counts, rounding percentages to one decimal.
    pub fn from_counts(critical_count: usize, non_critical_count: usize) -> Self {
        let total = critical_count + non_critical_count;
        Self {
            critical_count,
            non_critical_count,
            critical_percent: percent_one_decimal(critical_count, total),
            non_critical_percent: percent_one_decimal(non_critical_count, total),
        }
    }

    pub fn total(&self) -> usize {
        self.critical_count + self.non_critical_count
    }

    /// Percentage for one kind.
    pub fn percent_of(&self, kind: ThinkerKind) -> f64 {
        match kind {
            ThinkerKind::CriticalThinker => self.critical_percent,
            ThinkerKind::NonCriticalThinker => self.non_critical_percent,
        }
    }
}

fn percent_one_decimal(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 1000.0 / total as f64).round() / 10.0
}

/// One agent in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub row: usize,
    pub col: usize,
    pub kind: ThinkerKind,
    pub influence: f64,
    pub belief: f64,
    pub age: u8,
}

/// Complete grid snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub snapshot_id: String,
    pub generation: u64,
    pub rows: usize,
    pub cols: usize,
    pub stats: PopulationStats,
    /// Row-major agents
    pub agents: Vec<AgentSnapshot>,
}

impl StateSnapshot {
    /// Finds the agent at a coordinate.
    pub fn agent_at(&self, row: usize, col: usize) -> Option<&AgentSnapshot> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.agents.get(row * self.cols + col)
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
