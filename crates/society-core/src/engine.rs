//! Simulation Engine
//!
//! Initialization and the per-generation update. A tick is a pure function
//! of the previous state: it reads a snapshot of the old grid, writes into a
//! fresh buffer, and only replaces the state once every invariant holds.
//!
//! Stage order within a tick:
//! 1. media event (maybe)
//! 2. social influence, reading neighbors from the pre-tick snapshot
//! 3. life events (maybe)
//! 4. statistics

use std::borrow::Cow;

use rand::Rng;
use serde::{Deserialize, Serialize};

use society_events::{PopulationStats, StateSnapshot, TickReport};

use crate::components::Grid;
use crate::config::{GridConfig, Parameters};
use crate::error::{EngineError, InvariantViolation};
use crate::output::{compute_stats, generate_snapshot};
use crate::setup::populate_grid;
use crate::systems::{apply_life_events, apply_media_event, apply_social_influence, roll_media_event};

/// Grid, statistics and generation counter for one point in a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    grid: Grid,
    stats: PopulationStats,
    generation: u64,
}

impl SimulationState {
    /// Wraps an existing grid as generation 0, computing its statistics.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            stats: compute_stats(&grid),
            grid,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> &PopulationStats {
        &self.stats
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn snapshot(&self) -> StateSnapshot {
        generate_snapshot(self)
    }

    /// Advances this state by one generation in place. On error the state is
    /// left untouched.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        params: &Parameters,
        rng: &mut R,
    ) -> Result<TickReport, EngineError> {
        let (next, report) = tick(self, params, rng)?;
        *self = next;
        Ok(report)
    }
}

/// Creates a fresh population at generation 0.
pub fn initialize<R: Rng + ?Sized>(
    params: &Parameters,
    grid_config: GridConfig,
    rng: &mut R,
) -> Result<SimulationState, EngineError> {
    params.validate()?;
    grid_config.validate()?;

    let grid = populate_grid(params, grid_config, rng)?;
    grid.verify(params)?;

    let state = SimulationState::from_grid(grid);
    tracing::debug!(
        "Initialized {}x{} grid: {:.1}% critical thinkers",
        grid_config.rows,
        grid_config.cols,
        state.stats.critical_percent
    );
    Ok(state)
}

/// Computes the next generation from `state`.
pub fn tick<R: Rng + ?Sized>(
    state: &SimulationState,
    params: &Parameters,
    rng: &mut R,
) -> Result<(SimulationState, TickReport), EngineError> {
    params.validate()?;

    let generation = state.generation + 1;
    let mut report = TickReport::new(generation);

    // Caps may have been lowered since the last tick.
    let snapshot: Cow<'_, Grid> = if state.grid.within_caps(params) {
        Cow::Borrowed(&state.grid)
    } else {
        let mut rebounded = state.grid.clone();
        rebounded.rebound_influence(params);
        Cow::Owned(rebounded)
    };
    let mut working = snapshot.clone().into_owned();

    if let Some(event) = roll_media_event(params, rng) {
        report.media_event = Some(event);
        report.media_boosted = apply_media_event(&mut working, params, rng);
    }

    apply_social_influence(&snapshot, &mut working, params, &mut report);
    apply_life_events(&mut working, params, rng, &mut report);

    if let Err(violation) = check_next_grid(&state.grid, &working, params) {
        tracing::error!("Aborting generation {}: {}", generation, violation);
        return Err(violation.into());
    }

    tracing::debug!(
        "Generation {}: +{} critical, +{} non-critical, {} life events",
        generation,
        report.converted_to_critical,
        report.converted_to_non_critical,
        report.life_events()
    );

    let next = SimulationState {
        stats: compute_stats(&working),
        grid: working,
        generation,
    };
    Ok((next, report))
}

/// Current statistics. Never rescans, so repeated calls agree.
pub fn get_stats(state: &SimulationState) -> PopulationStats {
    state.stats
}

fn check_next_grid(
    previous: &Grid,
    next: &Grid,
    params: &Parameters,
) -> Result<(), InvariantViolation> {
    if previous.dimensions() != next.dimensions() {
        return Err(InvariantViolation::DimensionsChanged {
            expected: previous.dimensions(),
            actual: next.dimensions(),
        });
    }
    next.verify(params)
}
