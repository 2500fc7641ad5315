//! Ranking of scored candidates and winner selection.

pub mod ranker;

pub use ranker::{
    DEFAULT_ALTERNATE_REASON, DEFAULT_BEST_REASON, MAX_ALTERNATES, RankingResult, Selection,
};
