//! Simulation State Components
//!
//! Agents and the grid that holds them.

pub mod agent;
pub mod grid;

pub use agent::*;
pub use grid::*;
