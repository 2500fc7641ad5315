//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No eligible models for the requested modalities")]
    NoEligibleModels,

    #[error("Invalid prompt: {0}")]
    InvalidPrompt(String),
}

impl DomainError {
    /// Check if this error means routing has nothing to offer (as opposed to bad input)
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DomainError::NoEligibleModels)
    }
}
