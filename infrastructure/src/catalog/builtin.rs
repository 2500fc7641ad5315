//! Built-in model catalog

use paikeys_application::{CatalogSource, CatalogSourceError};
use paikeys_domain::{Catalog, CatalogError, Modality, ModalitySet, ModalityWeights, ModelDescriptor};
use std::sync::LazyLock;
use tracing::debug;

/// Built-in catalog, validated on first use and never mutated afterwards
static BUILTIN_CATALOG: LazyLock<Result<Catalog, CatalogError>> = LazyLock::new(|| {
    let models = builtin_models();
    debug!("Building built-in catalog of {} models", models.len());
    Catalog::new(models, ModalityWeights::default())
});

/// The models shipped with the router.
pub fn builtin_models() -> Vec<ModelDescriptor> {
    use Modality::{Audio, Text, Vision};
    let set = |modalities: &[Modality]| ModalitySet::new(modalities.iter().copied()).unwrap_or_default();

    vec![
        ModelDescriptor::new("gpt-4o", "OpenAI", "multimodal", set(&[Text, Vision, Audio]))
            .with_latency(900)
            .with_cost(2.5)
            .with_quality(92.0)
            .with_tagline("Flagship multimodal generalist")
            .with_strengths(["multimodal", "tool-calling", "structured-json"]),
        ModelDescriptor::new("claude-3.5-sonnet", "Anthropic", "reasoning", set(&[Text, Vision]))
            .with_latency(1_100)
            .with_cost(3.0)
            .with_quality(94.0)
            .with_tagline("Careful long-form reasoning and code")
            .with_strengths(["reasoning", "coding", "storytelling"]),
        ModelDescriptor::new("deepseek-r1", "DeepSeek", "reasoning", set(&[Text]))
            .with_latency(2_400)
            .with_cost(0.8)
            .with_quality(90.0)
            .with_tagline("Open reasoning model with visible chains of thought")
            .with_strengths(["reasoning", "math", "deterministic"]),
        ModelDescriptor::new("gpt-4o-mini", "OpenAI", "realtime", set(&[Text, Vision]))
            .with_latency(450)
            .with_cost(0.3)
            .with_quality(78.0)
            .with_tagline("Fast, cheap default for everyday tasks")
            .with_strengths(["tool-calling", "structured-json", "summarization"]),
        ModelDescriptor::new("claude-3-haiku", "Anthropic", "realtime", set(&[Text, Vision]))
            .with_latency(380)
            .with_cost(0.4)
            .with_quality(74.0)
            .with_tagline("Snappy assistant for high-volume chat")
            .with_strengths(["ideation", "summarization", "chat"]),
        ModelDescriptor::new("llama-3.1-70b-instruct", "Meta", "open-weight", set(&[Text]))
            .with_latency(650)
            .with_cost(0.6)
            .with_quality(82.0)
            .with_tagline("Open-weight workhorse you can self-host")
            .with_strengths(["coding", "creative", "chat"]),
        ModelDescriptor::new("gemini-1.5-pro", "Google", "multimodal", set(&[Text, Vision, Audio]))
            .with_latency(1_300)
            .with_cost(2.0)
            .with_quality(89.0)
            .with_tagline("Long-context multimodal analysis")
            .with_strengths(["long-context", "document-qa", "video-understanding"]),
        ModelDescriptor::new("whisper-v3", "OpenAI", "speech", set(&[Audio]))
            .with_latency(700)
            .with_cost(0.5)
            .with_quality(85.0)
            .with_tagline("Speech-to-text transcription")
            .with_strengths(["transcription", "multilingual"]),
    ]
}

/// Catalog source backed by the process-wide built-in catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl CatalogSource for BuiltinCatalogSource {
    fn load(&self) -> Result<Catalog, CatalogSourceError> {
        BUILTIN_CATALOG.clone().map_err(CatalogSourceError::from)
    }

    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paikeys_application::{RouteRequest, RouteTaskUseCase};
    use std::sync::Arc;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = BuiltinCatalogSource.load().unwrap();
        assert_eq!(catalog.len(), 8);
        for modality in Modality::ALL {
            assert!(catalog.coverage(modality) > 0, "no model supports {}", modality);
        }
    }

    #[test]
    fn test_builtin_catalog_is_shared_snapshot() {
        let first = BuiltinCatalogSource.load().unwrap();
        let second = BuiltinCatalogSource.load().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.list_models(), builtin_models().as_slice());
    }

    #[test]
    fn test_builtin_catalog_covers_every_tone() {
        let models = builtin_models();
        for tag in ["creative", "storytelling", "deterministic", "structured-json"] {
            assert!(models.iter().any(|m| m.has_strength(&[tag])), "nobody lists {}", tag);
        }
    }

    #[test]
    fn test_builtin_routing_answers_every_priority() {
        let use_case = RouteTaskUseCase::new(Arc::new(BuiltinCatalogSource.load().unwrap()));
        for priority in ["speed", "cost", "quality"] {
            let response = use_case
                .execute(&RouteRequest::new("Summarize this meeting").with_priority(priority))
                .unwrap();
            assert_eq!(response.alternatives.len(), 2);
        }
    }

    #[test]
    fn test_builtin_audio_request() {
        let use_case = RouteTaskUseCase::new(Arc::new(BuiltinCatalogSource.load().unwrap()));
        let response = use_case
            .execute(
                &RouteRequest::new("Transcribe the standup")
                    .with_priority("cost")
                    .with_modalities(["audio"]),
            )
            .unwrap();
        assert_eq!(response.best.id, "whisper-v3");
    }
}
