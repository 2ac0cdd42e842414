//! Output Generation
//!
//! Population statistics and serializable state snapshots.

pub mod snapshot;
pub mod stats;

pub use snapshot::*;
pub use stats::*;
