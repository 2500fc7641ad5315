//! List catalog use case
//!
//! Exposes a public-safe projection of every catalog entry. Scoring
//! inputs such as strength tags stay internal.

use paikeys_domain::{Catalog, ModalitySet, ModelDescriptor};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Public view of one catalog model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub provider: String,
    pub modalities: ModalitySet,
    pub family: String,
    pub latency: u32,
    pub cost: f64,
    pub quality: f64,
    pub tagline: String,
}

impl From<&ModelDescriptor> for CatalogEntry {
    fn from(model: &ModelDescriptor) -> Self {
        Self {
            id: model.id.clone(),
            provider: model.provider.clone(),
            modalities: model.modalities.clone(),
            family: model.family.clone(),
            latency: model.latency,
            cost: model.cost,
            quality: model.quality,
            tagline: model.tagline.clone(),
        }
    }
}

/// Response body of the listing operation: `{ "models": [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogListing {
    pub models: Vec<CatalogEntry>,
}

/// Use case for listing the catalog
pub struct ListCatalogUseCase {
    catalog: Arc<Catalog>,
}

impl ListCatalogUseCase {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// All models, in catalog order
    pub fn execute(&self) -> CatalogListing {
        let models: Vec<CatalogEntry> = self
            .catalog
            .list_models()
            .iter()
            .map(CatalogEntry::from)
            .collect();
        debug!("Listing {} catalog models", models.len());
        CatalogListing { models }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paikeys_domain::{Modality, ModalityWeights};

    #[test]
    fn test_empty_catalog_lists_nothing() {
        let use_case = ListCatalogUseCase::new(Arc::new(Catalog::empty()));
        assert!(use_case.execute().models.is_empty());
    }

    #[test]
    fn test_projection_keeps_order_and_hides_strengths() {
        let catalog = Catalog::new(
            vec![
                ModelDescriptor::new("b", "Beta", "vision", ModalitySet::single(Modality::Vision))
                    .with_tagline("sees things")
                    .with_strengths(["secret-tag"]),
                ModelDescriptor::new("a", "Alpha", "reasoning", ModalitySet::single(Modality::Text)),
            ],
            ModalityWeights::default(),
        )
        .unwrap();
        let listing = ListCatalogUseCase::new(Arc::new(catalog)).execute();

        let ids: Vec<_> = listing.models.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        let json = serde_json::to_value(&listing).unwrap();
        let first = &json["models"][0];
        assert_eq!(first["tagline"], "sees things");
        assert_eq!(first["modalities"], serde_json::json!(["vision"]));
        assert!(first.get("strengths").is_none());
        assert!(!json.to_string().contains("secret-tag"));
    }
}
