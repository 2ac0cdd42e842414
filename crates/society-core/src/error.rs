//! Error types for the simulation engine.

use thiserror::Error;

/// A parameter outside its documented bound
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("{name} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
}

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("invalid parameter: {0}")]
    Invalid(#[from] ParameterError),
}

/// Engine state that should be impossible. Always an engine bug.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("grid has a zero dimension ({rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("grid {rows}x{cols} holds {cells} agents")]
    CellCount {
        rows: usize,
        cols: usize,
        cells: usize,
    },

    #[error("grid dimensions changed from {expected:?} to {actual:?}")]
    DimensionsChanged {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("agent at ({row}, {col}) has invalid influence {influence}")]
    InvalidInfluence {
        row: usize,
        col: usize,
        influence: f64,
    },

    #[error("agent at ({row}, {col}) has influence {influence} above cap {cap}")]
    InfluenceAboveCap {
        row: usize,
        col: usize,
        influence: f64,
        cap: f64,
    },

    #[error("agent at ({row}, {col}) has belief {belief} outside [0, 1)")]
    BeliefOutOfRange { row: usize, col: usize, belief: f64 },

    #[error("agent at ({row}, {col}) has age {age} outside [0, 80)")]
    AgeOutOfRange { row: usize, col: usize, age: u8 },
}

/// Errors returned by engine operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Parameter(#[from] ParameterError),

    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::OutOfRange {
            name: "media_influence",
            value: 11.0,
            min: 0.0,
            max: 10.0,
        };
        assert_eq!(err.to_string(), "media_influence = 11 is outside [0, 10]");
    }

    #[test]
    fn test_engine_error_wraps_sources() {
        let err: EngineError = InvariantViolation::CellCount {
            rows: 2,
            cols: 2,
            cells: 3,
        }
        .into();
        assert!(matches!(err, EngineError::Invariant(_)));
        assert!(err.to_string().contains("grid 2x2 holds 3 agents"));
    }
}
