use thiserror::Error;

use crate::core::types::HardwareFamily;

/// Errors raised while loading reference data or configuration.
///
/// Expected "no result" outcomes of the engines (no compliance row, no feasible
/// layout) are not errors; those come back as `None`.
#[derive(Error, Debug)]
pub enum BalustradeError {
    #[error("Invalid spacing row {index} in {family:?} table: {reason}")]
    InvalidSpacingRow {
        family: HardwareFamily,
        index: usize,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown code: {0}")]
    UnknownCode(String),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] crate::calculation::CalculationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BalustradeError>;
