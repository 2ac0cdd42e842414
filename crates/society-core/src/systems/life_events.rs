//! Life Event System
//!
//! Rare exogenous shocks that force an agent's kind regardless of its
//! neighborhood. Runs after social influence, so it can override it.

use rand::Rng;

use society_events::{LifeEventKind, ThinkerKind, TickReport};

use crate::components::{Agent, Grid};
use crate::config::Parameters;

/// Fixed life event rates
pub mod life_event_constants {
    /// Per-agent, per-tick chance of a life event
    pub const LIFE_EVENT_CHANCE: f64 = 0.001;
    /// Share of life events that are crises (the rest are overloads)
    pub const LIFE_CRISIS_SHARE: f64 = 0.5;
    /// Influence gained from a life crisis
    pub const LIFE_CRISIS_BOOST: f64 = 2.0;
    /// Influence gained from information overload
    pub const INFORMATION_OVERLOAD_BOOST: f64 = 1.0;
}

use life_event_constants::*;

/// Rolls whether a single agent experiences a life event this tick.
pub fn roll_life_event<R: Rng + ?Sized>(rng: &mut R) -> Option<LifeEventKind> {
    if rng.gen::<f64>() >= LIFE_EVENT_CHANCE {
        return None;
    }
    if rng.gen::<f64>() < LIFE_CRISIS_SHARE {
        Some(LifeEventKind::LifeCrisis)
    } else {
        Some(LifeEventKind::InformationOverload)
    }
}

/// Applies a life event to one agent.
pub fn apply_life_event(agent: &mut Agent, event: LifeEventKind, params: &Parameters) {
    match event {
        LifeEventKind::LifeCrisis => agent.become_kind(
            ThinkerKind::CriticalThinker,
            LIFE_CRISIS_BOOST,
            params.education_strength,
        ),
        LifeEventKind::InformationOverload => agent.become_kind(
            ThinkerKind::NonCriticalThinker,
            INFORMATION_OVERLOAD_BOOST,
            params.confirmation_bias,
        ),
    }
}

/// Rolls and applies life events across the working grid. Does nothing, and
/// draws nothing from `rng`, when random events are disabled.
pub fn apply_life_events<R: Rng + ?Sized>(
    working: &mut Grid,
    params: &Parameters,
    rng: &mut R,
    report: &mut TickReport,
) {
    if !params.random_events_enabled {
        return;
    }

    for agent in working.agents_mut() {
        if let Some(event) = roll_life_event(rng) {
            apply_life_event(agent, event, params);
            report.record_life_event(event);
        }
    }
}
