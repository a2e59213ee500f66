use std::io::Write;

use serde::Serialize;

use super::FeedError;
use crate::relevance::RankedEntry;

#[derive(Serialize)]
struct FeedRow<'a> {
    rank: usize,
    document_id: &'a str,
    document_type: &'static str,
    title: &'a str,
    publication_date: String,
    total: f64,
    keyword_score: f64,
    agency_score: f64,
    type_score: f64,
    urgency_score: f64,
    matched_keywords: String,
    matched_agencies: String,
    reason: &'a str,
}

/// Writes one CSV row per entry, ranks starting at 1. List columns are `;`-joined.
pub fn write_ranked_csv<W: Write>(writer: W, entries: &[RankedEntry<'_>]) -> Result<(), FeedError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for (index, entry) in entries.iter().enumerate() {
        let score = &entry.score;
        csv_writer.serialize(FeedRow {
            rank: index + 1,
            document_id: &entry.document.id,
            document_type: entry.document.document_type.label(),
            title: &entry.document.title,
            publication_date: entry.document.publication_date.to_string(),
            total: score.total,
            keyword_score: score.keyword_score,
            agency_score: score.agency_score,
            type_score: score.type_score,
            urgency_score: score.urgency_score,
            matched_keywords: score
                .matched_keywords
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(";"),
            matched_agencies: score.matched_agencies.join(";"),
            reason: score.reason.as_deref().unwrap_or(""),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
