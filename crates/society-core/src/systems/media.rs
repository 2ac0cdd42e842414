//! Media System
//!
//! Occasional media events that raise the influence of agents who absorb
//! them. Non-critical thinkers absorb by susceptibility, critical thinkers
//! by analysing the claim.

use rand::Rng;

use society_events::{MediaEvent, ThinkerKind, MEDIA_HEADLINES};

use crate::components::Grid;
use crate::config::Parameters;

/// Fixed media rates
pub mod media_constants {
    /// Per-tick chance that a media event fires
    pub const MEDIA_EVENT_CHANCE: f64 = 0.05;
    /// Chance a critical thinker analyses the claim and gains influence
    pub const CRITICAL_ANALYSIS_CHANCE: f64 = 0.7;
    /// Influence gained by a non-critical thinker who absorbs the event
    pub const NON_CRITICAL_BOOST: f64 = 0.5;
    /// Influence gained by a critical thinker who analyses the event
    pub const CRITICAL_BOOST: f64 = 0.2;
}

use media_constants::*;

/// Rolls whether a media event fires this tick and which headline it carries.
///
/// Media events share the random-events toggle with life events.
pub fn roll_media_event<R: Rng + ?Sized>(params: &Parameters, rng: &mut R) -> Option<MediaEvent> {
    if !params.random_events_enabled {
        return None;
    }
    if rng.gen::<f64>() >= MEDIA_EVENT_CHANCE {
        return None;
    }
    let event = MediaEvent::new(rng.gen_range(0..MEDIA_HEADLINES.len()));
    tracing::debug!("Media event fired: headline {}", event.headline_index);
    Some(event)
}

/// Applies a fired media event to every agent of the working grid.
/// Returns how many agents absorbed it.
pub fn apply_media_event<R: Rng + ?Sized>(
    working: &mut Grid,
    params: &Parameters,
    rng: &mut R,
) -> usize {
    let mut boosted = 0;

    for agent in working.agents_mut() {
        let (chance, boost) = match agent.kind {
            ThinkerKind::NonCriticalThinker => (params.media_susceptibility(), NON_CRITICAL_BOOST),
            ThinkerKind::CriticalThinker => (CRITICAL_ANALYSIS_CHANCE, CRITICAL_BOOST),
        };
        if rng.gen::<f64>() < chance {
            agent.boost_influence(boost, params.influence_cap(agent.kind));
            boosted += 1;
        }
    }

    boosted
}
