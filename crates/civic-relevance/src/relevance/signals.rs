use chrono::NaiveDate;

use super::domain::{Document, DocumentType};

const UNCATEGORIZED_WEIGHT: f64 = 10.0;
const NOTICE_WEIGHT: f64 = 20.0;
const PROPOSED_RULE_WEIGHT: f64 = 30.0;
const RULE_WEIGHT: f64 = 40.0;
const SIGNIFICANT_RULE_BONUS: f64 = 20.0;
const PRESIDENTIAL_DOCUMENT_WEIGHT: f64 = 80.0;

/// Civic significance of the document's category.
///
/// Ordering: uncategorized < notice < proposed rule < rule < significant rule
/// < presidential document.
pub fn type_weight(document: &Document) -> f64 {
    match document.document_type {
        DocumentType::Uncategorized => UNCATEGORIZED_WEIGHT,
        DocumentType::Notice => NOTICE_WEIGHT,
        DocumentType::ProposedRule => PROPOSED_RULE_WEIGHT,
        DocumentType::Rule if document.is_significant() => RULE_WEIGHT + SIGNIFICANT_RULE_BONUS,
        DocumentType::Rule => RULE_WEIGHT,
        DocumentType::PresidentialDocument => PRESIDENTIAL_DOCUMENT_WEIGHT,
    }
}

/// Day bands for an open comment period, inclusive upper bounds.
const URGENCY_BANDS: [(i64, f64); 3] = [(IMMINENT_DAYS, 100.0), (14, 60.0), (30, 30.0)];
/// Deadlines this close dominate the score and get a reason line.
const IMMINENT_DAYS: i64 = 7;

/// Deadline pressure for documents open for public comment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UrgencySignal {
    pub score: f64,
    pub days_remaining: Option<i64>,
    pub reason: Option<String>,
}

pub fn urgency(document: &Document, now: NaiveDate) -> UrgencySignal {
    let Some(closes_on) = document.comments_close_on else {
        return UrgencySignal::default();
    };

    let days_remaining = (closes_on - now).num_days();
    if days_remaining < 0 {
        return UrgencySignal {
            days_remaining: Some(days_remaining),
            ..UrgencySignal::default()
        };
    }

    let score = URGENCY_BANDS
        .iter()
        .find(|(max_days, _)| days_remaining <= *max_days)
        .map(|(_, score)| *score)
        .unwrap_or(0.0);

    let reason = (days_remaining <= IMMINENT_DAYS)
        .then(|| format!("Comment period closes in {days_remaining} day(s)"));

    UrgencySignal {
        score,
        days_remaining: Some(days_remaining),
        reason,
    }
}
