//! Harmonic Signal - synthetic seasonal data and Fourier regressors
//!
//! Generates noisy periodic signals from a time-of-day-aware harmonic model
//! and builds intercept/trend/harmonic design matrices for seasonal
//! regression. A small SQLite store persists generated samples.

pub mod generator;
pub mod params;
pub mod regressors;
pub mod store;

use thiserror::Error;

// Re-export main types
pub use generator::{minute_of_day, Sample, SampleTime, SignalGenerator};
pub use params::SignalGeneratorConfig;
pub use regressors::{
    build_regressor_matrix, build_regressor_matrix_from_column, regressor_column_names,
    SEASONAL_PERIOD,
};
pub use store::{SignalRecord, SignalStore, DEFAULT_DB_PATH};

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("shape mismatch: expected {expected} index values, got {got}")]
    ShapeMismatch { expected: usize, got: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type SignalResult<T> = Result<T, SignalError>;
