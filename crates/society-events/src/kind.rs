//! Thinker Kind
//!
//! The binary trait diffusing through the population.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The trait each agent holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThinkerKind {
    CriticalThinker,
    NonCriticalThinker,
}

impl ThinkerKind {
    /// Returns both variants.
    pub fn all() -> &'static [ThinkerKind] {
        &[ThinkerKind::CriticalThinker, ThinkerKind::NonCriticalThinker]
    }

    /// Returns the other kind.
    pub fn opposite(self) -> Self {
        match self {
            ThinkerKind::CriticalThinker => ThinkerKind::NonCriticalThinker,
            ThinkerKind::NonCriticalThinker => ThinkerKind::CriticalThinker,
        }
    }

    pub fn is_critical(self) -> bool {
        self == ThinkerKind::CriticalThinker
    }

    /// Stable snake_case label, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ThinkerKind::CriticalThinker => "critical_thinker",
            ThinkerKind::NonCriticalThinker => "non_critical_thinker",
        }
    }
}

impl fmt::Display for ThinkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
