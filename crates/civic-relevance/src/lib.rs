//! Relevance scoring and ranking for regulatory and legislative documents.
//!
//! The [`relevance`] module is a pure function library: callers hand it
//! documents, a [`relevance::UserRelevanceProfile`] and an explicit evaluation
//! date, and get back scores, ranked feeds, trending keywords, and agency
//! suggestions. [`feed`] is the file boundary used by the command-line
//! consumer; [`config`], [`error`] and [`telemetry`] carry the ambient stack.

pub mod config;
pub mod error;
pub mod feed;
pub mod relevance;
pub mod telemetry;

pub use relevance::{
    calculate_quick_relevance, extract_top_keywords, score_and_rank_documents, score_document,
    suggested_agencies, Agency, Document, DocumentType, KeywordCount, RankOptions, RankedEntry,
    RelevanceEngine, RelevanceScore, ScoringWeights, UserRelevanceProfile,
};
