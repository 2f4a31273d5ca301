//! Tariff domain error types

use thiserror::Error;

/// Errors produced by tariff validation and bill calculation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TariffError {
    /// Input is malformed or out of range; never retried automatically
    #[error("{0}")]
    Validation(String),
}

impl TariffError {
    pub fn validation(message: impl Into<String>) -> Self {
        TariffError::Validation(message.into())
    }
}
