//! Domain layer for paikeys
//!
//! This crate contains the routing engine: catalog, scoring, ranking,
//! insights and token estimation. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Flow
//!
//! ```text
//! RoutingContext ──▶ ScoringEngine ──▶ RankingResult ──▶ Selection ──▶ build_insights
//!                        ▲                                                  ▲
//!                        └──────────────── Catalog ─────────────────────────┘
//! ```
//!
//! Every step is a pure function of the catalog and the request, so the same
//! input always produces the same ranking, notes, insights and estimate.

pub mod catalog;
pub mod config;
pub mod core;
pub mod insight;
pub mod ranking;
pub mod routing;
pub mod scoring;
pub mod tokens;

// Re-export commonly used types
pub use catalog::{
    Catalog, CatalogError, Modality, ModalitySet, ModalityWeights, ModelDescriptor, QUALITY_MAX,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, prompt::Prompt};
pub use insight::{FamilyNotes, MAX_INSIGHTS, build_insights};
pub use ranking::{
    DEFAULT_ALTERNATE_REASON, DEFAULT_BEST_REASON, MAX_ALTERNATES, RankingResult, Selection,
};
pub use routing::{Priority, RoutingContext, Tone};
pub use scoring::{Axis, Evaluation, ScoreBreakdown, ScoredCandidate, ScoringEngine, ScoringWeights};
pub use tokens::{TokenEstimate, estimate_tokens};
