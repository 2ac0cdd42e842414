//! Statistics Output
//!
//! Population shares recomputed from a full grid scan.

use society_events::PopulationStats;

use crate::components::Grid;

/// Counts both kinds in a single scan and derives one-decimal percentages.
pub fn compute_stats(grid: &Grid) -> PopulationStats {
    let critical = grid.agents().iter().filter(|a| a.is_critical()).count();
    PopulationStats::from_counts(critical, grid.len() - critical)
}
