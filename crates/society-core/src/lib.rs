//! Society Simulation Engine Library
//!
//! A grid of agents, each either a critical or a non-critical thinker,
//! influencing their neighbors one generation at a time under media shocks,
//! education, confirmation bias and rare life events.

use rand::rngs::SmallRng;
use rand::SeedableRng;

pub mod components;
pub mod config;
pub mod control;
pub mod engine;
pub mod error;
pub mod output;
pub mod setup;
pub mod systems;

pub use components::{Agent, Grid};
pub use config::{GridConfig, Parameters, RunConfig, SocietyConfig};
pub use control::{RunStatus, Simulation};
pub use engine::{get_stats, initialize, tick, SimulationState};
pub use error::{ConfigError, EngineError, InvariantViolation, ParameterError};

/// Seeded random number generator injected into every stochastic stage
#[derive(Debug, Clone)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}
