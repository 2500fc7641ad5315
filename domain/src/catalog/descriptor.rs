//! Model descriptor entity

use crate::catalog::error::CatalogError;
use crate::catalog::modality::{Modality, ModalitySet};
use serde::{Deserialize, Serialize};

/// Upper bound of the quality scale (inclusive)
pub const QUALITY_MAX: f64 = 100.0;

/// One entry of the model catalog.
///
/// Descriptors are static configuration: they are created when the catalog
/// is loaded and only ever borrowed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Unique identifier within the catalog
    pub id: String,
    /// Provider display name
    pub provider: String,
    /// Grouping tag such as "reasoning" or "vision"
    pub family: String,
    /// Supported input modalities (never empty)
    pub modalities: ModalitySet,
    /// Median latency in milliseconds, lower is better
    pub latency: u32,
    /// Relative cost unit, lower is better
    pub cost: f64,
    /// Quality rating in `0..=100`, higher is better
    pub quality: f64,
    /// One-line pitch
    pub tagline: String,
    /// Short tags used for tone matching
    #[serde(default)]
    pub strengths: Vec<String>,
}

impl ModelDescriptor {
    pub fn new(
        id: impl Into<String>,
        provider: impl Into<String>,
        family: impl Into<String>,
        modalities: ModalitySet,
    ) -> Self {
        Self {
            id: id.into(),
            provider: provider.into(),
            family: family.into(),
            modalities,
            latency: 1_000,
            cost: 1.0,
            quality: 50.0,
            tagline: String::new(),
            strengths: Vec::new(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_latency(mut self, latency: u32) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn with_strengths<S: Into<String>>(mut self, strengths: impl IntoIterator<Item = S>) -> Self {
        self.strengths = strengths.into_iter().map(Into::into).collect();
        self
    }

    // ==================== Queries ====================

    pub fn supports(&self, modality: Modality) -> bool {
        self.modalities.contains(modality)
    }

    /// True if any strength tag equals one of `tags` (case-insensitive)
    pub fn has_strength(&self, tags: &[&str]) -> bool {
        self.matching_strength(tags).is_some()
    }

    /// First strength tag, in declared order, that equals one of `tags`
    pub fn matching_strength(&self, tags: &[&str]) -> Option<&str> {
        self.strengths
            .iter()
            .map(String::as_str)
            .find(|strength| tags.iter().any(|tag| strength.eq_ignore_ascii_case(tag)))
    }

    /// Check the per-descriptor invariants.
    ///
    /// Uniqueness of `id` is a catalog-level rule and is checked by
    /// [`Catalog::new`](crate::catalog::Catalog::new).
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() {
            return Err(CatalogError::BlankId);
        }
        if self.provider.trim().is_empty() {
            return Err(CatalogError::BlankField {
                id: self.id.clone(),
                field: "provider",
            });
        }
        if self.family.trim().is_empty() {
            return Err(CatalogError::BlankField {
                id: self.id.clone(),
                field: "family",
            });
        }
        if self.modalities.is_empty() {
            return Err(CatalogError::NoModalities(self.id.clone()));
        }
        if self.latency == 0 {
            return Err(CatalogError::InvalidLatency(self.id.clone()));
        }
        if !(self.cost.is_finite() && self.cost > 0.0) {
            return Err(CatalogError::InvalidCost {
                id: self.id.clone(),
                cost: self.cost,
            });
        }
        if !(0.0..=QUALITY_MAX).contains(&self.quality) {
            return Err(CatalogError::QualityOutOfRange {
                id: self.id.clone(),
                quality: self.quality,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModelDescriptor {
        ModelDescriptor::new("m1", "Acme", "reasoning", ModalitySet::single(Modality::Text))
            .with_latency(500)
            .with_cost(2.0)
            .with_quality(88.0)
            .with_strengths(["Structured-JSON", "creative"])
    }

    #[test]
    fn test_valid_descriptor() {
        assert_eq!(sample().validate(), Ok(()));
    }

    #[test]
    fn test_zero_latency_rejected() {
        let model = sample().with_latency(0);
        assert_eq!(
            model.validate(),
            Err(CatalogError::InvalidLatency("m1".to_string()))
        );
    }

    #[test]
    fn test_non_positive_cost_rejected() {
        assert!(sample().with_cost(0.0).validate().is_err());
        assert!(sample().with_cost(-1.0).validate().is_err());
        assert!(sample().with_cost(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_quality_bounds() {
        assert!(sample().with_quality(0.0).validate().is_ok());
        assert!(sample().with_quality(100.0).validate().is_ok());
        assert!(sample().with_quality(100.5).validate().is_err());
        assert!(sample().with_quality(-0.1).validate().is_err());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut model = sample();
        model.id = "  ".to_string();
        assert_eq!(model.validate(), Err(CatalogError::BlankId));

        let mut model = sample();
        model.family = String::new();
        assert!(matches!(
            model.validate(),
            Err(CatalogError::BlankField { field: "family", .. })
        ));
    }

    #[test]
    fn test_matching_strength_is_case_insensitive() {
        let model = sample();
        assert_eq!(
            model.matching_strength(&["deterministic", "structured-json"]),
            Some("Structured-JSON")
        );
        assert!(model.has_strength(&["creative"]));
        assert!(!model.has_strength(&["storytelling"]));
    }

    #[test]
    fn test_strengths_default_when_missing() {
        let json = r#"{
            "id": "m2", "provider": "Acme", "family": "realtime",
            "modalities": ["text"], "latency": 300, "cost": 0.2,
            "quality": 70, "tagline": "fast"
        }"#;
        let model: ModelDescriptor = serde_json::from_str(json).unwrap();
        assert!(model.strengths.is_empty());
        assert!(model.validate().is_ok());
    }
}
