use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::agencies::match_agencies;
use super::domain::{Document, RelevanceScore, UserRelevanceProfile};
use super::keywords::match_keywords;
use super::signals::{type_weight, urgency};

const DEFAULT_WEIGHT: f64 = 1.0;

/// Multipliers applied to each signal when forming the total.
///
/// The default is an unweighted sum of the four component scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub agency: f64,
    pub document_type: f64,
    pub urgency: f64,
}

impl ScoringWeights {
    /// Non-finite or negative weights fall back to 1.0.
    pub fn new(keyword: f64, agency: f64, document_type: f64, urgency: f64) -> Self {
        Self {
            keyword: sanitize(keyword),
            agency: sanitize(agency),
            document_type: sanitize(document_type),
            urgency: sanitize(urgency),
        }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT, DEFAULT_WEIGHT, DEFAULT_WEIGHT, DEFAULT_WEIGHT)
    }
}

fn sanitize(weight: f64) -> f64 {
    if weight.is_finite() && weight >= 0.0 {
        weight
    } else {
        DEFAULT_WEIGHT
    }
}

/// Stateless scorer combining keyword, agency, type, and urgency signals.
#[derive(Debug, Clone, Default)]
pub struct RelevanceEngine {
    weights: ScoringWeights,
}

impl RelevanceEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(
        &self,
        document: &Document,
        profile: &UserRelevanceProfile,
        now: NaiveDate,
    ) -> RelevanceScore {
        let keywords = match_keywords(document, &profile.policy_interests);
        let agencies = match_agencies(document, profile);
        let type_score = type_weight(document);
        let deadline = urgency(document, now);

        let total = self.weights.keyword * keywords.score
            + self.weights.agency * agencies.score
            + self.weights.document_type * type_score
            + self.weights.urgency * deadline.score;

        RelevanceScore {
            keyword_score: keywords.score,
            agency_score: agencies.score,
            type_score,
            urgency_score: deadline.score,
            total,
            matched_keywords: keywords.matched,
            matched_agencies: agencies.matched,
            reason: deadline.reason,
        }
    }
}

/// Scores one document with the default, unweighted engine.
pub fn score_document(
    document: &Document,
    profile: &UserRelevanceProfile,
    now: NaiveDate,
) -> RelevanceScore {
    RelevanceEngine::default().score(document, profile, now)
}
