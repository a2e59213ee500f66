use chrono::{Duration, NaiveDate};

use crate::relevance::domain::{Agency, Document, DocumentType, UserRelevanceProfile};

pub(super) const EPA_ID: u32 = 145;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

pub(super) fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

pub(super) fn epa() -> Agency {
    Agency::new(
        EPA_ID,
        "environmental-protection-agency",
        "Environmental Protection Agency",
    )
}

pub(super) fn climate_rule(significant: bool) -> Document {
    Document::new(
        "2025-04410",
        DocumentType::Rule,
        "Climate Change Mitigation Standards",
        days_from_today(-3),
    )
    .with_summary("Establishes emissions standards for new stationary sources.")
    .with_significant(significant)
    .with_agency(epa())
}

pub(super) fn climate_profile() -> UserRelevanceProfile {
    UserRelevanceProfile::new()
        .with_interests(["climate", "healthcare"])
        .following_agency_id(EPA_ID)
}

pub(super) fn notice(id: &str, title: &str, published: NaiveDate) -> Document {
    Document::new(id, DocumentType::Notice, title, published)
}
