//! Catalog validation errors

use crate::catalog::modality::Modality;
use thiserror::Error;

/// Reasons a catalog (or a single descriptor in it) is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("model id cannot be blank")]
    BlankId,

    #[error("model '{id}': {field} cannot be blank")]
    BlankField { id: String, field: &'static str },

    #[error("duplicate model id '{0}'")]
    DuplicateId(String),

    #[error("model '{0}' must support at least one modality")]
    NoModalities(String),

    #[error("model '{0}': latency must be positive")]
    InvalidLatency(String),

    #[error("model '{id}': cost must be positive, got {cost}")]
    InvalidCost { id: String, cost: f64 },

    #[error("model '{id}': quality must be within 0..=100, got {quality}")]
    QualityOutOfRange { id: String, quality: f64 },

    #[error("weight for {modality} must be positive, got {weight}")]
    InvalidModalityWeight { modality: Modality, weight: f64 },
}
