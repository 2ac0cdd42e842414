//! Broadcast: media headline display.
//!
//! The engine only reports that a media event fired and which headline it
//! carried. This crate decides how long that headline stays on screen,
//! independent of how fast generations tick.
//!
//! # Modules
//!
//! - [`config`]: Display settings loaded from TOML
//! - [`ticker`]: Tracks the visible headline and hides it when it expires

pub mod config;
pub mod ticker;

pub use config::{BroadcastConfig, BroadcastConfigError};
pub use ticker::{ActiveHeadline, HeadlineTicker};
