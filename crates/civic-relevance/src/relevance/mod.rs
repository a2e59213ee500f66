//! Multi-signal relevance scoring for regulatory documents.
//!
//! Every function here is pure: output depends only on the arguments,
//! including the explicit evaluation date wherever deadlines matter. The
//! keyword and agency-suggestion tables are `'static` and never mutated, so
//! all entry points can be called concurrently without coordination.

pub mod agencies;
pub mod dates;
pub mod domain;
mod engine;
pub mod keywords;
mod quick;
mod rank;
pub mod signals;
mod trending;

#[cfg(test)]
mod tests;

pub use agencies::{match_agencies, suggested_agencies, AgencyMatch, AGENCY_SUGGESTIONS};
pub use domain::{
    Agency, Document, DocumentType, KeywordCount, RankedEntry, RelevanceScore,
    UserRelevanceProfile,
};
pub use engine::{score_document, RelevanceEngine, ScoringWeights};
pub use keywords::{match_keywords, KeywordMatch, PolicyKeywordTable};
pub use quick::calculate_quick_relevance;
pub use rank::{score_and_rank_documents, RankOptions};
pub use signals::{type_weight, urgency, UrgencySignal};
pub use trending::{extract_top_keywords, DEFAULT_TOP_KEYWORDS};
