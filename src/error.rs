//! Error types for calc-be.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
