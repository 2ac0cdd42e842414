//! Snapshot Generation
//!
//! Builds serializable snapshots of the simulation state and writes them out.

use std::fs;
use std::path::Path;

use society_events::{generate_snapshot_id, StateSnapshot};

use crate::engine::SimulationState;

/// Captures the full grid, statistics and generation counter.
pub fn generate_snapshot(state: &SimulationState) -> StateSnapshot {
    let grid = state.grid();
    StateSnapshot {
        snapshot_id: generate_snapshot_id(state.generation()),
        generation: state.generation(),
        rows: grid.rows(),
        cols: grid.cols(),
        stats: *state.stats(),
        agents: grid.agent_snapshots(),
    }
}

/// Writes a snapshot as pretty JSON, replacing any previous file.
pub fn write_snapshot(snapshot: &StateSnapshot, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = snapshot.to_json()?;
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, json)
}
