//! Route task use case
//!
//! The request boundary of the router: normalizes untrusted fields into a
//! [`RoutingContext`], runs the engine, and shapes the response.
//!
//! ```text
//! RouteRequest ──normalize──▶ RoutingContext ──▶ ScoringEngine::evaluate
//!      │                                               │
//!      └─ blank prompt: InvalidPrompt                  ▼
//!                                      Selection ──▶ insights + tokens ──▶ RouteResponse
//!                                          │
//!                                          └─ nothing eligible: NoEligibleModels
//! ```

use paikeys_domain::{
    Catalog, DomainError, ModalitySet, Priority, Prompt, RoutingContext, ScoringEngine,
    ScoringWeights, Selection, TokenEstimate, Tone, build_insights, estimate_tokens,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while routing a task
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTaskError {
    #[error("A prompt description is required.")]
    InvalidPrompt,

    #[error("No models available for routing right now.")]
    NoEligibleModels,
}

impl RouteTaskError {
    /// HTTP status an HTTP collaborator should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            RouteTaskError::InvalidPrompt => 400,
            RouteTaskError::NoEligibleModels => 503,
        }
    }

    /// True for errors caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, RouteTaskError::InvalidPrompt)
    }

    /// `{ "message": ... }` body for error responses
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            message: self.to_string(),
        }
    }
}

impl From<DomainError> for RouteTaskError {
    fn from(error: DomainError) -> Self {
        if error.is_unavailable() {
            RouteTaskError::NoEligibleModels
        } else {
            RouteTaskError::InvalidPrompt
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Untrusted routing request, as received from a caller.
///
/// Every field is optional; [`RouteRequest::normalize`] applies the
/// defaulting rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteRequest {
    pub prompt: Option<String>,
    pub priority: Option<String>,
    pub tone: Option<String>,
    pub modalities: Option<Vec<String>>,
}

impl RouteRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            ..Default::default()
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_tone(mut self, tone: impl Into<String>) -> Self {
        self.tone = Some(tone.into());
        self
    }

    pub fn with_modalities<S: Into<String>>(mut self, modalities: impl IntoIterator<Item = S>) -> Self {
        self.modalities = Some(modalities.into_iter().map(Into::into).collect());
        self
    }

    /// Lenient extraction from an arbitrary JSON value.
    ///
    /// Fields of the wrong type are treated as missing rather than failing
    /// the whole request; non-string entries of `modalities` are dropped.
    pub fn from_json_value(value: &Value) -> Self {
        let string_field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            prompt: string_field("prompt"),
            priority: string_field("priority"),
            tone: string_field("tone"),
            modalities: value.get("modalities").and_then(Value::as_array).map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            }),
        }
    }

    /// Apply the boundary rules and build a [`RoutingContext`].
    ///
    /// - blank or missing prompt: [`RouteTaskError::InvalidPrompt`]
    /// - unknown priority: `quality`; unknown tone: `balanced`
    /// - modalities filtered to the known set, `{text}` if nothing remains
    ///
    /// Values are matched exactly: `"SPEED"` or `" speed"` count as unknown.
    pub fn normalize(&self) -> Result<RoutingContext, RouteTaskError> {
        let prompt = Prompt::parse(self.prompt.as_deref().unwrap_or_default())?;

        let modalities = match &self.modalities {
            Some(raw) => ModalitySet::normalize(raw),
            None => ModalitySet::default(),
        };

        Ok(RoutingContext::new(prompt)
            .with_priority(Priority::normalize(self.priority.as_deref()))
            .with_tone(Tone::normalize(self.tone.as_deref()))
            .with_modalities(modalities))
    }
}

/// The recommended model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestModel {
    pub id: String,
    pub provider: String,
    pub tagline: String,
    /// Rendered as `"<n>ms median"`
    pub latency: String,
    pub reason: String,
    pub strengths: Vec<String>,
}

/// A fallback model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeModel {
    pub id: String,
    pub provider: String,
    pub reason: String,
}

/// Successful routing response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub best: BestModel,
    pub alternatives: Vec<AlternativeModel>,
    pub insights: Vec<String>,
    pub tokens: TokenEstimate,
}

/// Use case for routing a task to the best-fitting model
pub struct RouteTaskUseCase {
    catalog: Arc<Catalog>,
    engine: ScoringEngine,
}

impl RouteTaskUseCase {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            engine: ScoringEngine::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.engine = ScoringEngine::new(weights);
        self
    }

    /// Normalize an untrusted request and route it
    pub fn execute(&self, request: &RouteRequest) -> Result<RouteResponse, RouteTaskError> {
        let context = request.normalize().inspect_err(|_| {
            debug!("Rejecting routing request with blank prompt");
        })?;
        self.execute_context(&context)
    }

    /// Route an already-normalized context
    pub fn execute_context(&self, context: &RoutingContext) -> Result<RouteResponse, RouteTaskError> {
        debug!(
            priority = %context.priority,
            tone = %context.tone,
            modalities = %context.modalities.joined(),
            "Routing request"
        );

        let evaluation = self.engine.evaluate(&self.catalog, context);
        debug!("{} eligible models", evaluation.ranked.len());
        let family_notes = evaluation.family_notes;

        let selection = evaluation.ranked.into_selection().inspect_err(|_| {
            warn!(
                "No model in a catalog of {} supports {}",
                self.catalog.len(),
                context.modalities.joined()
            );
        })?;

        let insights = build_insights(context, &selection, &family_notes, &self.catalog);
        let tokens = estimate_tokens(&context.prompt, &context.modalities, &self.catalog);

        info!(
            "Routed to {} (score {:.3}) with {} alternatives",
            selection.top.model.id,
            selection.top.score,
            selection.alternates.len()
        );

        Ok(Self::assemble(&selection, insights, tokens))
    }

    fn assemble(selection: &Selection<'_>, insights: Vec<String>, tokens: TokenEstimate) -> RouteResponse {
        let top = selection.top.model;
        RouteResponse {
            best: BestModel {
                id: top.id.clone(),
                provider: top.provider.clone(),
                tagline: top.tagline.clone(),
                latency: format!("{}ms median", top.latency),
                reason: selection.top_reason().to_string(),
                strengths: top.strengths.clone(),
            },
            alternatives: selection
                .alternates
                .iter()
                .map(|alt| AlternativeModel {
                    id: alt.model.id.clone(),
                    provider: alt.model.provider.clone(),
                    reason: Selection::alternate_reason(alt).to_string(),
                })
                .collect(),
            insights,
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paikeys_domain::{Modality, ModalityWeights, ModelDescriptor};
    use serde_json::json;

    fn text() -> ModalitySet {
        ModalitySet::single(Modality::Text)
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![
                ModelDescriptor::new("atlas", "Acme", "reasoning", text())
                    .with_latency(1_500)
                    .with_cost(3.0)
                    .with_quality(95.0)
                    .with_tagline("Deep reasoning"),
                ModelDescriptor::new("blink", "Bolt", "realtime", text())
                    .with_latency(250)
                    .with_cost(3.0)
                    .with_quality(70.0)
                    .with_tagline("Instant replies"),
                ModelDescriptor::new(
                    "lens",
                    "Optic",
                    "vision",
                    ModalitySet::new([Modality::Text, Modality::Vision]).unwrap(),
                )
                .with_latency(900)
                .with_cost(2.0)
                .with_quality(80.0)
                .with_strengths(["document-qa"]),
                ModelDescriptor::new("ear", "Sonic", "audio", ModalitySet::single(Modality::Audio))
                    .with_latency(600)
                    .with_cost(0.5)
                    .with_quality(85.0),
            ],
            ModalityWeights::default(),
        )
        .unwrap()
    }

    fn use_case(catalog: Catalog) -> RouteTaskUseCase {
        RouteTaskUseCase::new(Arc::new(catalog))
    }

    // ==================== Boundary normalization ====================

    #[test]
    fn test_blank_prompt_is_bad_request() {
        let use_case = use_case(sample_catalog());
        for request in [RouteRequest::default(), RouteRequest::new("   ")] {
            let err = use_case.execute(&request).unwrap_err();
            assert_eq!(err, RouteTaskError::InvalidPrompt);
            assert_eq!(err.status_code(), 400);
            assert!(err.is_client_error());
            assert_eq!(err.to_body().message, "A prompt description is required.");
        }
    }

    #[test]
    fn test_prompt_is_trimmed() {
        let context = RouteRequest::new("  plan a trip  ").normalize().unwrap();
        assert_eq!(context.prompt.content(), "plan a trip");
    }

    #[test]
    fn test_unknown_values_fall_back_to_defaults() {
        let context = RouteRequest::new("x")
            .with_priority("ludicrous")
            .with_tone("sarcastic")
            .with_modalities(["smell"])
            .normalize()
            .unwrap();
        assert_eq!(context.priority, Priority::Quality);
        assert_eq!(context.tone, Tone::Balanced);
        assert_eq!(context.modalities, text());
    }

    #[test]
    fn test_values_must_match_exactly() {
        let context = RouteRequest::new("x")
            .with_priority("SPEED")
            .with_tone(" Creative ")
            .with_modalities(["VISION"])
            .normalize()
            .unwrap();
        assert_eq!(context.priority, Priority::Quality);
        assert_eq!(context.tone, Tone::Balanced);
        assert_eq!(context.modalities, text());
    }

    #[test]
    fn test_omitted_fields_equal_explicit_defaults() {
        let use_case = use_case(sample_catalog());
        let implicit = use_case.execute(&RouteRequest::new("Write release notes")).unwrap();
        let explicit = use_case
            .execute(
                &RouteRequest::new("Write release notes")
                    .with_priority("quality")
                    .with_tone("balanced")
                    .with_modalities(["text"]),
            )
            .unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_from_json_value_is_lenient() {
        let request = RouteRequest::from_json_value(&json!({
            "prompt": "Transcribe a meeting",
            "priority": 42,
            "tone": "creative",
            "modalities": ["audio", 7, null, "vision"]
        }));
        assert_eq!(request.prompt.as_deref(), Some("Transcribe a meeting"));
        assert_eq!(request.priority, None);
        assert_eq!(
            request.modalities,
            Some(vec!["audio".to_string(), "vision".to_string()])
        );

        let missing = RouteRequest::from_json_value(&json!({ "prompt": 12 }));
        assert_eq!(missing.normalize().unwrap_err(), RouteTaskError::InvalidPrompt);

        let not_an_object = RouteRequest::from_json_value(&Value::Null);
        assert_eq!(not_an_object, RouteRequest::default());
    }

    // ==================== Routing outcomes ====================

    #[test]
    fn test_empty_catalog_is_unavailable() {
        let use_case = use_case(Catalog::empty());
        let err = use_case.execute(&RouteRequest::new("anything")).unwrap_err();
        assert_eq!(err, RouteTaskError::NoEligibleModels);
        assert_eq!(err.status_code(), 503);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_no_modality_overlap_is_unavailable() {
        let catalog = Catalog::new(
            vec![ModelDescriptor::new("t", "A", "f", text())],
            ModalityWeights::default(),
        )
        .unwrap();
        let err = use_case(catalog)
            .execute(&RouteRequest::new("listen").with_modalities(["audio"]))
            .unwrap_err();
        assert_eq!(err, RouteTaskError::NoEligibleModels);
    }

    #[test]
    fn test_single_eligible_model_has_no_alternatives() {
        let response = use_case(sample_catalog())
            .execute(&RouteRequest::new("Transcribe this call").with_modalities(["audio"]))
            .unwrap();
        assert_eq!(response.best.id, "ear");
        assert!(response.alternatives.is_empty());
    }

    #[test]
    fn test_priority_flip_changes_winner() {
        let use_case = use_case(sample_catalog());
        let quality = use_case
            .execute(&RouteRequest::new("Review this design"))
            .unwrap();
        let speed = use_case
            .execute(&RouteRequest::new("Review this design").with_priority("speed"))
            .unwrap();
        assert_eq!(quality.best.id, "atlas");
        assert_eq!(speed.best.id, "blink");
    }

    #[test]
    fn test_tone_match_breaks_tie() {
        let twin = |id: &str| {
            ModelDescriptor::new(id, "Acme", "general", text())
                .with_latency(700)
                .with_cost(1.0)
                .with_quality(80.0)
        };
        // Without the tag "a-plain" would win the id tie-break.
        let catalog = Catalog::new(
            vec![twin("a-plain"), twin("b-strict").with_strengths(["deterministic"])],
            ModalityWeights::default(),
        )
        .unwrap();
        let use_case = use_case(catalog);

        let balanced = use_case.execute(&RouteRequest::new("Emit JSON")).unwrap();
        assert_eq!(balanced.best.id, "a-plain");

        let strict = use_case
            .execute(&RouteRequest::new("Emit JSON").with_tone("deterministic"))
            .unwrap();
        assert_eq!(strict.best.id, "b-strict");
        assert_eq!(strict.alternatives[0].id, "a-plain");
    }

    #[test]
    fn test_response_shape() {
        let response = use_case(sample_catalog())
            .execute(&RouteRequest::new("Compare two contracts"))
            .unwrap();
        assert_eq!(response.best.latency, "1500ms median");
        assert_eq!(response.best.reason, "Ranked on quality: 95/100 quality rating");
        assert_eq!(response.alternatives.len(), 2);
        assert!(!response.insights.is_empty());

        let json = serde_json::to_value(&response).unwrap();
        for key in ["best", "alternatives", "insights", "tokens"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        for key in ["id", "provider", "tagline", "latency", "reason", "strengths"] {
            assert!(json["best"].get(key).is_some(), "missing best.{}", key);
        }
        assert!(json["tokens"]["estimated"].is_u64());
    }

    #[test]
    fn test_alternative_reason_is_own_primary_note() {
        let response = use_case(sample_catalog())
            .execute(&RouteRequest::new("Compare two contracts"))
            .unwrap();
        let lens = response
            .alternatives
            .iter()
            .find(|alt| alt.id == "lens")
            .unwrap();
        assert_eq!(lens.reason, "Ranked on quality: 80/100 quality rating");
    }

    // ==================== Properties ====================

    #[test]
    fn test_deterministic_across_runs() {
        let use_case = use_case(sample_catalog());
        let request = RouteRequest::new("Summarize a podcast and its slides")
            .with_priority("cost")
            .with_tone("creative")
            .with_modalities(["audio", "vision"]);
        let first = use_case.execute(&request).unwrap();
        for _ in 0..10 {
            assert_eq!(use_case.execute(&request).unwrap(), first);
        }
    }

    #[test]
    fn test_token_estimate_ignores_priority_and_tone() {
        let use_case = use_case(sample_catalog());
        let base = use_case.execute(&RouteRequest::new("Estimate me")).unwrap();
        for priority in ["speed", "cost", "quality"] {
            for tone in ["balanced", "creative", "deterministic"] {
                let response = use_case
                    .execute(&RouteRequest::new("Estimate me").with_priority(priority).with_tone(tone))
                    .unwrap();
                assert_eq!(response.tokens, base.tokens);
            }
        }
    }

    #[test]
    fn test_insights_never_repeat_best_reason() {
        let use_case = use_case(sample_catalog());
        for priority in ["speed", "cost", "quality"] {
            for modalities in [vec!["text"], vec!["vision"], vec!["text", "audio"]] {
                let response = use_case
                    .execute(
                        &RouteRequest::new("Check it")
                            .with_priority(priority)
                            .with_modalities(modalities),
                    )
                    .unwrap();
                assert!(!response.insights.contains(&response.best.reason));
            }
        }
    }

    #[test]
    fn test_parallel_requests_share_catalog() {
        let use_case = Arc::new(use_case(sample_catalog()));
        let request = RouteRequest::new("Caption product photos").with_modalities(["vision"]);
        let expected = use_case.execute(&request).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let use_case = Arc::clone(&use_case);
                    let request = request.clone();
                    scope.spawn(move || use_case.execute(&request).unwrap())
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
