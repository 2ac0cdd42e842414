//! Run Control
//!
//! The Idle / Running / Paused state machine driven by an external clock.
//! Callers pass the current time as a `Duration` since any fixed origin, so
//! the controller can be driven by a wall clock or stepped in tests.
//!
//! Control signals only take effect between ticks: every tick needs
//! exclusive access to the controller, and `poll` runs at most one tick.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use society_events::{PopulationStats, TickReport};

use crate::config::{GridConfig, Parameters, SocietyConfig};
use crate::engine::{initialize, SimulationState};
use crate::error::{EngineError, ParameterError};
use crate::SimRng;

/// Current status of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Freshly reset, never started
    #[default]
    Idle,
    /// Ticking once per period
    Running,
    /// Stopped by the caller or by an aborted tick
    Paused,
}

/// A simulation run plus its schedule.
#[derive(Debug, Clone)]
pub struct Simulation {
    params: Parameters,
    grid_config: GridConfig,
    rng: SimRng,
    state: SimulationState,
    status: RunStatus,
    /// Time at which the next tick is due. `None` when nothing is scheduled.
    next_tick_at: Option<Duration>,
    last_report: Option<TickReport>,
}

impl Simulation {
    /// Builds an idle simulation seeded from the run configuration.
    pub fn new(config: &SocietyConfig) -> Result<Self, EngineError> {
        Self::with_rng(
            config.parameters.clone(),
            config.grid,
            SimRng::seeded(config.run.seed),
        )
    }

    /// Builds an idle simulation with an explicit random source.
    pub fn with_rng(
        params: Parameters,
        grid_config: GridConfig,
        mut rng: SimRng,
    ) -> Result<Self, EngineError> {
        let state = initialize(&params, grid_config, &mut rng.0)?;
        Ok(Self {
            params,
            grid_config,
            rng,
            state,
            status: RunStatus::Idle,
            next_tick_at: None,
            last_report: None,
        })
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn stats(&self) -> &PopulationStats {
        self.state.stats()
    }

    pub fn generation(&self) -> u64 {
        self.state.generation()
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    pub fn grid_config(&self) -> GridConfig {
        self.grid_config
    }

    /// Report of the most recent tick since the last reset.
    pub fn last_report(&self) -> Option<&TickReport> {
        self.last_report.as_ref()
    }

    /// Starts or resumes ticking. The first tick is due one period from `now`.
    pub fn start(&mut self, now: Duration) {
        if self.status == RunStatus::Running {
            return;
        }
        self.status = RunStatus::Running;
        self.next_tick_at = Some(now + self.params.tick_period());
        tracing::info!("Simulation running from generation {}", self.generation());
    }

    /// Stops ticking and cancels the pending tick.
    pub fn pause(&mut self) {
        if self.status != RunStatus::Running {
            return;
        }
        self.status = RunStatus::Paused;
        self.next_tick_at = None;
        tracing::info!("Simulation paused at generation {}", self.generation());
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self, now: Duration) {
        if self.is_running() {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Discards the grid and statistics, cancels any pending tick and
    /// repopulates from the current parameters. The run becomes idle.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.status = RunStatus::Idle;
        self.next_tick_at = None;
        self.last_report = None;
        self.state = initialize(&self.params, self.grid_config, &mut self.rng.0)?;
        tracing::info!(
            "Simulation reset: {}x{} grid, {:.1}% critical thinkers",
            self.grid_config.rows,
            self.grid_config.cols,
            self.stats().critical_percent
        );
        Ok(())
    }

    /// Replaces the rule parameters. Applies from the next tick, except
    /// `initial_critical_percent`, which only matters at reset.
    pub fn set_parameters(&mut self, params: Parameters) -> Result<(), ParameterError> {
        if let Err(e) = params.validate() {
            tracing::warn!("Rejected parameters: {}", e);
            return Err(e);
        }
        self.params = params;
        Ok(())
    }

    /// Replaces the grid dimensions. Applies at the next reset.
    pub fn set_grid_config(&mut self, grid_config: GridConfig) -> Result<(), ParameterError> {
        if let Err(e) = grid_config.validate() {
            tracing::warn!("Rejected grid dimensions: {}", e);
            return Err(e);
        }
        self.grid_config = grid_config;
        Ok(())
    }

    /// Time left until the next scheduled tick, if one is scheduled.
    pub fn time_until_next_tick(&self, now: Duration) -> Option<Duration> {
        self.next_tick_at.map(|due| due.saturating_sub(now))
    }

    /// Runs one tick if running and the period has elapsed.
    ///
    /// Missed periods are not replayed: the next tick is scheduled one period
    /// after `now`.
    pub fn poll(&mut self, now: Duration) -> Result<Option<TickReport>, EngineError> {
        if self.status != RunStatus::Running {
            return Ok(None);
        }
        match self.next_tick_at {
            Some(due) if now >= due => {}
            _ => return Ok(None),
        }

        let report = self.step()?;
        self.next_tick_at = Some(now + self.params.tick_period());
        Ok(Some(report))
    }

    /// Runs one tick immediately, ignoring the schedule.
    ///
    /// A failed tick leaves the previous state in place and pauses the run.
    pub fn step(&mut self) -> Result<TickReport, EngineError> {
        match self.state.advance(&self.params, &mut self.rng.0) {
            Ok(report) => {
                self.last_report = Some(report.clone());
                Ok(report)
            }
            Err(e) => {
                tracing::error!("Tick failed at generation {}: {}", self.generation(), e);
                if self.status == RunStatus::Running {
                    self.status = RunStatus::Paused;
                }
                self.next_tick_at = None;
                Err(e)
            }
        }
    }
}
