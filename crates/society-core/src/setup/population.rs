//! Population Setup
//!
//! Fills a fresh grid with randomly drawn agents.

use rand::Rng;

use society_events::ThinkerKind;

use crate::components::{Agent, Grid, MAX_AGE};
use crate::config::{GridConfig, Parameters};
use crate::error::InvariantViolation;

/// Draws one agent.
///
/// Critical iff a uniform draw in [0, 100) falls below the initial share.
/// Influence is uniform below the kind's cap.
pub fn spawn_agent<R: Rng + ?Sized>(params: &Parameters, rng: &mut R) -> Agent {
    let kind = if rng.gen::<f64>() * 100.0 < params.initial_critical_percent {
        ThinkerKind::CriticalThinker
    } else {
        ThinkerKind::NonCriticalThinker
    };
    let influence = rng.gen_range(0.0..params.influence_cap(kind));
    let belief = rng.gen::<f64>();
    let age = rng.gen_range(0..MAX_AGE);

    Agent::new(kind, influence, belief, age)
}

/// Builds a fully populated grid. Parameters must already be validated.
pub fn populate_grid<R: Rng + ?Sized>(
    params: &Parameters,
    grid_config: GridConfig,
    rng: &mut R,
) -> Result<Grid, InvariantViolation> {
    Grid::from_fn(grid_config.rows, grid_config.cols, |_, _| {
        spawn_agent(params, rng)
    })
}
