//! Population Setup
//!
//! Grid initialization on reset.

pub mod population;

pub use population::*;
