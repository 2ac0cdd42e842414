//! Shared types and serialization for the society simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod event;
pub mod kind;
pub mod snapshot;

// Re-export kind types
pub use kind::ThinkerKind;

// Re-export event types
pub use event::{headline, LifeEventKind, MediaEvent, TickReport, MEDIA_HEADLINES};

// Re-export snapshot types
pub use snapshot::{generate_snapshot_id, AgentSnapshot, PopulationStats, StateSnapshot};
