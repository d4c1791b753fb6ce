//! Error types for simulation setup and queries

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("slot index must be non-negative, got {0}")]
    NegativeSlotIndex(i64),

    #[error("invalid screen {width}x{height}: need positive size taller than the {opening} px opening")]
    InvalidScreen { width: f32, height: f32, opening: f32 },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("malformed tuning json: {0}")]
    TuningJson(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
