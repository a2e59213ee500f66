use std::collections::BTreeSet;

use super::domain::Document;

/// Share of the caller's interest strings found verbatim in the document's
/// title or abstract, in `[0, 1]`. No keyword-table expansion is applied.
///
/// The denominator is every supplied string, blanks and repeats included;
/// the numerator counts distinct (case-insensitive) non-blank matches.
/// An empty slice yields 0.
pub fn calculate_quick_relevance<S: AsRef<str>>(document: &Document, interests: &[S]) -> f64 {
    if interests.is_empty() {
        return 0.0;
    }

    let text = document.searchable_text();
    let matched: BTreeSet<String> = interests
        .iter()
        .map(|interest| interest.as_ref().trim().to_lowercase())
        .filter(|needle| !needle.is_empty() && text.contains(needle.as_str()))
        .collect();

    (matched.len() as f64 / interests.len() as f64).min(1.0)
}
