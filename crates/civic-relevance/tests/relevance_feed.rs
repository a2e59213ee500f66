//! End-to-end scenarios for building personalized regulatory feeds through the
//! public crate surface: documents arrive as API JSON, profiles as caller data,
//! and ranking, trending keywords, quick relevance and agency suggestions are
//! exercised without reaching into private modules.

mod common {
    use chrono::{Duration, NaiveDate};
    use serde_json::json;

    use civic_relevance::feed::DocumentFeed;
    use civic_relevance::{Document, UserRelevanceProfile};

    pub(super) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
    }

    pub(super) fn date_in(days: i64) -> String {
        (today() + Duration::days(days)).format("%Y-%m-%d").to_string()
    }

    fn epa() -> serde_json::Value {
        json!({
            "id": 145,
            "slug": "environmental-protection-agency",
            "name": "Environmental Protection Agency"
        })
    }

    pub(super) fn api_documents() -> Vec<Document> {
        let payload = json!({
            "count": 5,
            "results": [
                {
                    "document_number": "2025-04410",
                    "type": "Rule",
                    "title": "Climate Change Mitigation Standards",
                    "abstract": "Finalizes emissions standards for power plants.",
                    "significant": true,
                    "agencies": [epa()],
                    "publication_date": date_in(-2)
                },
                {
                    "document_number": "2025-04388",
                    "type": "Proposed Rule",
                    "title": "Medicare Program; Hospital Outpatient Payment",
                    "abstract": "Proposes updates to outpatient payment rates.",
                    "agencies": [
                        {
                            "id": 221,
                            "slug": "centers-for-medicare-medicaid-services",
                            "name": "Centers for Medicare & Medicaid Services"
                        }
                    ],
                    "comments_close_on": date_in(4),
                    "publication_date": date_in(-26)
                },
                {
                    "document_number": "2025-04301",
                    "type": "Notice",
                    "title": "Agency Information Collection Activities",
                    "abstract": null,
                    "agencies": [],
                    "publication_date": date_in(-1)
                },
                {
                    "document_number": "2025-04297",
                    "type": "Presidential Document",
                    "title": "Strengthening Energy Grid Security",
                    "agencies": [
                        { "raw_name": "EXECUTIVE OFFICE OF THE PRESIDENT" }
                    ],
                    "publication_date": date_in(-5)
                },
                {
                    "document_number": "2025-04250",
                    "type": "Proposed Rule",
                    "title": "Methane Emissions Reduction Program",
                    "significant": null,
                    "agencies": [epa()],
                    "comments_close_on": "TBD",
                    "publication_date": date_in(-40)
                }
            ]
        });

        DocumentFeed::from_reader(payload.to_string().as_bytes())
            .expect("api payload parses")
            .documents
    }

    pub(super) fn climate_profile() -> UserRelevanceProfile {
        UserRelevanceProfile::new()
            .with_interests(["climate", "healthcare"])
            .following_agency_id(145)
            .in_state("CO")
    }
}

use civic_relevance::{
    calculate_quick_relevance, extract_top_keywords, score_and_rank_documents, score_document,
    suggested_agencies, Document, DocumentType, RankOptions, UserRelevanceProfile,
};
use common::*;

#[test]
fn personalized_feed_puts_followed_climate_rule_first() {
    let documents = api_documents();
    let profile = climate_profile();

    let feed = score_and_rank_documents(&documents, &profile, &RankOptions::as_of(today()));

    assert_eq!(feed.len(), documents.len());
    assert_eq!(feed[0].document.id, "2025-04410");
    assert_eq!(feed[0].score.agency_score, 100.0);
    assert!(feed[0]
        .score
        .matched_agencies
        .contains(&"Environmental Protection Agency".to_string()));
    assert!(feed
        .windows(2)
        .all(|pair| pair[0].score.total >= pair[1].score.total));

    let medicare = feed
        .iter()
        .find(|entry| entry.document.id == "2025-04388")
        .expect("medicare rule ranked");
    assert_eq!(medicare.score.urgency_score, 100.0);
    assert_eq!(
        medicare.score.reason.as_deref(),
        Some("Comment period closes in 4 day(s)")
    );
    assert!(medicare.score.matched_keywords.contains("medicare"));
}

#[test]
fn malformed_closing_date_only_costs_urgency() {
    let documents = api_documents();
    let methane = documents
        .iter()
        .find(|document| document.id == "2025-04250")
        .expect("methane rule present");

    assert_eq!(methane.comments_close_on, None);
    let score = score_document(methane, &climate_profile(), today());
    assert_eq!(score.urgency_score, 0.0);
    assert!(score.keyword_score > 0.0);
    assert_eq!(score.agency_score, 100.0);
}

#[test]
fn min_score_and_limit_shape_the_feed() {
    let documents = api_documents();
    let options = RankOptions::as_of(today())
        .with_min_score(100.0)
        .with_limit(2);

    let feed = score_and_rank_documents(&documents, &climate_profile(), &options);

    assert_eq!(feed.len(), 2);
    assert!(feed.iter().all(|entry| entry.score.total >= 100.0));
}

#[test]
fn ten_matching_documents_limited_to_five() {
    let base = api_documents().remove(0);
    let documents: Vec<Document> = (0..10)
        .map(|index| {
            let mut document = base.clone();
            document.id = format!("2025-1{index:04}");
            if index % 2 == 1 {
                document.document_type = DocumentType::Notice;
            }
            document
        })
        .collect();

    let feed = score_and_rank_documents(
        &documents,
        &climate_profile(),
        &RankOptions::as_of(today()).with_limit(5),
    );

    assert_eq!(feed.len(), 5);
    assert!(feed
        .iter()
        .all(|entry| entry.document.document_type == DocumentType::Rule));
    let ids: Vec<&str> = feed.iter().map(|entry| entry.document.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["2025-10000", "2025-10002", "2025-10004", "2025-10006", "2025-10008"]
    );
}

#[test]
fn empty_profile_ranks_by_type_and_urgency() {
    let documents = api_documents();
    let feed = score_and_rank_documents(
        &documents,
        &UserRelevanceProfile::default(),
        &RankOptions::as_of(today()),
    );

    assert_eq!(feed[0].document.id, "2025-04388");
    assert!(feed
        .iter()
        .all(|entry| entry.score.keyword_score == 0.0 && entry.score.agency_score == 0.0));
}

#[test]
fn trending_keywords_cover_the_whole_vocabulary() {
    let documents = api_documents();
    let top = extract_top_keywords(&documents, Some(3));

    assert_eq!(top.len(), 3);
    assert_eq!(top[0].keyword, "emissions");
    assert_eq!(top[0].count, 2);
    assert!(top.windows(2).all(|pair| pair[0].count >= pair[1].count));

    let default_limit = extract_top_keywords(&documents, None);
    assert!(default_limit.len() <= 10);
}

#[test]
fn quick_relevance_without_interests_is_zero() {
    for document in api_documents() {
        assert_eq!(calculate_quick_relevance::<String>(&document, &[]), 0.0);
    }

    let documents = api_documents();
    let relevance = calculate_quick_relevance(&documents[0], &["climate", "power plants", "wheat"]);
    assert!((relevance - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn agency_suggestions_union_is_duplicate_free_superset() {
    let left = ["climate", "healthcare"];
    let right = ["energy", "unknown-topic-xyz", "Housing"];
    let both: Vec<&str> = left.iter().chain(right.iter()).copied().collect();

    let combined = suggested_agencies(&both);
    for slug in suggested_agencies(&left)
        .into_iter()
        .chain(suggested_agencies(&right))
    {
        assert!(combined.contains(&slug), "{slug} missing from union");
    }

    let mut unique = combined.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), combined.len());

    assert!(suggested_agencies(&["unknown-topic-xyz"]).is_empty());
    assert!(suggested_agencies(&["healthcare"]).contains(&"food-and-drug-administration"));
}
