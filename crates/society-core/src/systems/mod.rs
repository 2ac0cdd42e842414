//! Simulation Systems
//!
//! The per-tick stages, in the order a tick runs them: media, social
//! influence, life events.

pub mod influence;
pub mod life_events;
pub mod media;

pub use influence::{
    apply_social_influence, change_threshold, decide_transition, neighbor_influence,
    NeighborInfluence,
};
pub use life_events::{apply_life_event, apply_life_events, roll_life_event};
pub use media::{apply_media_event, roll_media_event};
