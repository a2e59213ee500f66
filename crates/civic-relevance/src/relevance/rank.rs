use std::cmp::Ordering;

use chrono::{Local, NaiveDate};
use tracing::debug;

use super::domain::{Document, RankedEntry, UserRelevanceProfile};
use super::engine::RelevanceEngine;

/// Controls for building a ranked feed.
#[derive(Debug, Clone, PartialEq)]
pub struct RankOptions {
    /// Entries whose total is strictly below this are dropped. Default 0.
    pub min_score: f64,
    /// Maximum entries returned. Default unbounded.
    pub limit: Option<usize>,
    /// Evaluation date for comment-deadline urgency.
    pub now: NaiveDate,
}

impl RankOptions {
    pub fn as_of(now: NaiveDate) -> Self {
        Self {
            min_score: 0.0,
            limit: None,
            now,
        }
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Default for RankOptions {
    /// Evaluates as of the local calendar date at construction time.
    fn default() -> Self {
        Self::as_of(Local::now().date_naive())
    }
}

impl RelevanceEngine {
    /// Scores every document, drops those below `min_score`, and orders the rest
    /// by total, then newest publication, then document id.
    pub fn rank<'a>(
        &self,
        documents: &'a [Document],
        profile: &UserRelevanceProfile,
        options: &RankOptions,
    ) -> Vec<RankedEntry<'a>> {
        let mut entries: Vec<RankedEntry<'a>> = documents
            .iter()
            .map(|document| RankedEntry {
                document,
                score: self.score(document, profile, options.now),
            })
            .filter(|entry| entry.score.total >= options.min_score)
            .collect();
        let retained = entries.len();

        entries.sort_by(compare_entries);
        if let Some(limit) = options.limit {
            entries.truncate(limit);
        }

        debug!(
            scored = documents.len(),
            retained,
            returned = entries.len(),
            min_score = options.min_score,
            "ranked documents"
        );

        entries
    }
}

fn compare_entries(left: &RankedEntry<'_>, right: &RankedEntry<'_>) -> Ordering {
    right
        .score
        .total
        .total_cmp(&left.score.total)
        .then_with(|| {
            right
                .document
                .publication_date
                .cmp(&left.document.publication_date)
        })
        .then_with(|| left.document.id.cmp(&right.document.id))
}

/// Ranks documents with the default, unweighted engine.
pub fn score_and_rank_documents<'a>(
    documents: &'a [Document],
    profile: &UserRelevanceProfile,
    options: &RankOptions,
) -> Vec<RankedEntry<'a>> {
    RelevanceEngine::default().rank(documents, profile, options)
}
