use std::io::{self, Write};

use chrono::NaiveDate;
use civic_relevance::{KeywordCount, RankedEntry};

use crate::commands::QuickRelevanceRow;

pub(crate) fn render_ranked_feed<W: Write>(
    out: &mut W,
    entries: &[RankedEntry<'_>],
    scored: usize,
    today: NaiveDate,
) -> io::Result<()> {
    writeln!(out, "Personalized feed as of {today}")?;
    writeln!(out, "  {} of {} documents retained", entries.len(), scored)?;

    for (index, entry) in entries.iter().enumerate() {
        let document = entry.document;
        let score = &entry.score;
        writeln!(
            out,
            "\n{:>3}. [{}] {} ({})",
            index + 1,
            document.document_type.label(),
            document.title,
            document.id
        )?;
        writeln!(
            out,
            "     total {:.1} | keywords {:.0} | agencies {:.0} | type {:.0} | urgency {:.0}",
            score.total,
            score.keyword_score,
            score.agency_score,
            score.type_score,
            score.urgency_score
        )?;
        writeln!(out, "     published {}", document.publication_date)?;
        if !score.matched_keywords.is_empty() {
            let keywords: Vec<&str> = score.matched_keywords.iter().map(String::as_str).collect();
            writeln!(out, "     keywords: {}", keywords.join(", "))?;
        }
        if !score.matched_agencies.is_empty() {
            writeln!(out, "     agencies: {}", score.matched_agencies.join(", "))?;
        }
        if let Some(reason) = score.reason.as_deref() {
            writeln!(out, "     {reason}")?;
        }
    }

    Ok(())
}

pub(crate) fn render_keywords<W: Write>(out: &mut W, keywords: &[KeywordCount]) -> io::Result<()> {
    if keywords.is_empty() {
        return writeln!(out, "No policy keywords found");
    }

    writeln!(out, "Trending policy keywords")?;
    for (index, entry) in keywords.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {:<28} {} document(s)",
            index + 1,
            entry.keyword,
            entry.count
        )?;
    }
    Ok(())
}

pub(crate) fn render_quick<W: Write>(
    out: &mut W,
    rows: &[QuickRelevanceRow<'_>],
) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{:.2}  {}  {}", row.relevance, row.document_id, row.title)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_relevance::{Document, DocumentType, RelevanceScore};
    use std::collections::BTreeSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
    }

    #[test]
    fn ranked_feed_lists_components_and_reason() {
        let document = Document::new(
            "2025-04388",
            DocumentType::ProposedRule,
            "Medicare Program; Hospital Outpatient Payment",
            today(),
        );
        let entry = RankedEntry {
            document: &document,
            score: RelevanceScore {
                keyword_score: 40.0,
                type_score: 30.0,
                urgency_score: 100.0,
                total: 170.0,
                matched_keywords: BTreeSet::from(["hospital".to_string(), "medicare".to_string()]),
                reason: Some("Comment period closes in 4 day(s)".to_string()),
                ..RelevanceScore::default()
            },
        };

        let mut buffer = Vec::new();
        render_ranked_feed(&mut buffer, &[entry], 3, today()).expect("rendered");
        let output = String::from_utf8(buffer).expect("utf8 output");

        assert!(output.starts_with("Personalized feed as of 2025-03-10"));
        assert!(output.contains("1 of 3 documents retained"));
        assert!(output.contains("  1. [Proposed Rule] Medicare Program"));
        assert!(output.contains("total 170.0 | keywords 40 | agencies 0 | type 30 | urgency 100"));
        assert!(output.contains("keywords: hospital, medicare"));
        assert!(output.contains("Comment period closes in 4 day(s)"));
        assert!(!output.contains("agencies: "));
    }

    #[test]
    fn empty_keyword_summary_says_so() {
        let mut buffer = Vec::new();
        render_keywords(&mut buffer, &[]).expect("rendered");
        assert_eq!(String::from_utf8(buffer).expect("utf8"), "No policy keywords found\n");
    }

    #[test]
    fn quick_rows_show_two_decimals() {
        let rows = [QuickRelevanceRow {
            document_id: "2025-04410",
            title: "Climate Change Mitigation Standards",
            relevance: 2.0 / 3.0,
        }];
        let mut buffer = Vec::new();
        render_quick(&mut buffer, &rows).expect("rendered");
        assert_eq!(
            String::from_utf8(buffer).expect("utf8"),
            "0.67  2025-04410  Climate Change Mitigation Standards\n"
        );
    }
}
