//! Related-FAQ retrieval - the search core of the helpdesk / 関連FAQ検索モジュール
//!
//! Architecture principles / 構成方針:
//! - The module only exposes retrieval primitives: extract_keywords,
//!   CandidateSearcher, rank_candidates, and the RelatedFaqEngine pipeline
//! - Persistence stays behind the FaqRepository trait; the engine never writes
//! - Call direction: API → engine → repository (unidirectional)
//!
//! Retrieval features / 検索特性:
//! - Heuristic Japanese suffix stemming (no dictionary, no POS tagging)
//! - Naive substring matching per field (SQL LIKE), no full-text index
//! - Scoped→broadened category fallback, weighted relevance ranking

pub mod engine;
pub mod keyword;
pub mod ranker;
pub mod repository;
pub mod searcher;

pub use engine::{RelatedFaqEngine, DEFAULT_RELATED_LIMIT};
pub use keyword::extract_keywords;
pub use ranker::{rank_candidates, score_candidate};
pub use repository::{CategoryFilter, FaqRepository, MemoryFaqRepository, SqliteFaqRepository};
pub use searcher::CandidateSearcher;
