use super::domain::{Document, KeywordCount};
use super::keywords::PolicyKeywordTable;

pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Counts, for every keyword in the vocabulary, how many distinct documents
/// mention it in their title or abstract. Keywords no document mentions are
/// omitted. Ordered by count descending, then keyword ascending.
pub fn extract_top_keywords(documents: &[Document], limit: Option<usize>) -> Vec<KeywordCount> {
    let limit = limit.unwrap_or(DEFAULT_TOP_KEYWORDS);
    let texts: Vec<String> = documents.iter().map(Document::searchable_text).collect();

    let mut counts: Vec<KeywordCount> = PolicyKeywordTable::vocabulary()
        .iter()
        .map(|&keyword| KeywordCount {
            keyword,
            count: texts.iter().filter(|text| text.contains(keyword)).count(),
        })
        .filter(|entry| entry.count > 0)
        .collect();

    counts.sort_by(|left, right| {
        right
            .count
            .cmp(&left.count)
            .then_with(|| left.keyword.cmp(right.keyword))
    });
    counts.truncate(limit);
    counts
}
