use super::domain::{Document, UserRelevanceProfile};

const FOLLOWED_AGENCY_SCORE: f64 = 100.0;

/// Agency affinity for one document: all or nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgencyMatch {
    pub score: f64,
    pub matched: Vec<String>,
}

pub fn match_agencies(document: &Document, profile: &UserRelevanceProfile) -> AgencyMatch {
    let mut matched: Vec<String> = Vec::new();
    let mut any_followed = false;

    for agency in &document.agencies {
        let by_id = agency
            .id
            .map(|id| profile.followed_agency_ids.contains(&id))
            .unwrap_or(false);
        let by_slug = agency
            .slug
            .as_deref()
            .map(|slug| profile.follows_slug(slug))
            .unwrap_or(false);

        if !(by_id || by_slug) {
            continue;
        }

        any_followed = true;
        if let Some(name) = agency.display_name() {
            if !matched.iter().any(|existing| existing == name) {
                matched.push(name.to_string());
            }
        }
    }

    AgencyMatch {
        score: if any_followed { FOLLOWED_AGENCY_SCORE } else { 0.0 },
        matched,
    }
}

const ENVIRONMENT_AGENCIES: &[&str] = &[
    "environmental-protection-agency",
    "interior-department",
    "national-oceanic-and-atmospheric-administration",
    "fish-and-wildlife-service",
];

const ENERGY_AGENCIES: &[&str] = &[
    "energy-department",
    "federal-energy-regulatory-commission",
    "nuclear-regulatory-commission",
];

const HEALTH_AGENCIES: &[&str] = &[
    "health-and-human-services-department",
    "food-and-drug-administration",
    "centers-for-medicare-medicaid-services",
    "centers-for-disease-control-and-prevention",
];

const ECONOMY_AGENCIES: &[&str] = &[
    "treasury-department",
    "commerce-department",
    "securities-and-exchange-commission",
    "federal-reserve-system",
    "consumer-financial-protection-bureau",
    "small-business-administration",
];

const IMMIGRATION_AGENCIES: &[&str] = &[
    "homeland-security-department",
    "u-s-citizenship-and-immigration-services",
    "u-s-customs-and-border-protection",
    "executive-office-for-immigration-review",
];

const EDUCATION_AGENCIES: &[&str] = &["education-department"];

const TECHNOLOGY_AGENCIES: &[&str] = &[
    "federal-communications-commission",
    "federal-trade-commission",
    "national-institute-of-standards-and-technology",
    "national-telecommunications-and-information-administration",
];

const DEFENSE_AGENCIES: &[&str] = &[
    "defense-department",
    "veterans-affairs-department",
    "state-department",
];

const HOUSING_AGENCIES: &[&str] = &[
    "housing-and-urban-development-department",
    "federal-housing-finance-agency",
];

const LABOR_AGENCIES: &[&str] = &[
    "labor-department",
    "occupational-safety-and-health-administration",
    "national-labor-relations-board",
    "equal-employment-opportunity-commission",
];

const CIVIL_RIGHTS_AGENCIES: &[&str] = &[
    "justice-department",
    "equal-employment-opportunity-commission",
    "federal-election-commission",
];

const AGRICULTURE_AGENCIES: &[&str] = &[
    "agriculture-department",
    "food-safety-and-inspection-service",
];

const CULTURE_AGENCIES: &[&str] = &[
    "national-endowment-for-the-arts",
    "national-endowment-for-the-humanities",
];

const INDIGENOUS_AGENCIES: &[&str] = &["indian-affairs-bureau", "indian-health-service"];

/// Interest names (and their synonyms) to agency slugs worth querying upstream.
pub static AGENCY_SUGGESTIONS: &[(&str, &[&[&str]])] = &[
    ("climate", &[ENVIRONMENT_AGENCIES, ENERGY_AGENCIES]),
    ("environment", &[ENVIRONMENT_AGENCIES]),
    ("environmental", &[ENVIRONMENT_AGENCIES]),
    ("energy", &[ENERGY_AGENCIES]),
    ("environment-energy", &[ENVIRONMENT_AGENCIES, ENERGY_AGENCIES]),
    ("healthcare", &[HEALTH_AGENCIES]),
    ("health", &[HEALTH_AGENCIES]),
    ("health-welfare", &[HEALTH_AGENCIES]),
    ("economy", &[ECONOMY_AGENCIES]),
    ("finance", &[ECONOMY_AGENCIES]),
    ("economy-finance", &[ECONOMY_AGENCIES]),
    ("immigration", &[IMMIGRATION_AGENCIES]),
    ("immigration-indigenous", &[IMMIGRATION_AGENCIES, INDIGENOUS_AGENCIES]),
    ("education", &[EDUCATION_AGENCIES]),
    ("technology", &[TECHNOLOGY_AGENCIES]),
    ("tech", &[TECHNOLOGY_AGENCIES]),
    ("defense", &[DEFENSE_AGENCIES]),
    ("military", &[DEFENSE_AGENCIES]),
    ("foreign-policy-defense", &[DEFENSE_AGENCIES]),
    ("housing", &[HOUSING_AGENCIES]),
    ("housing-urban", &[HOUSING_AGENCIES]),
    ("labor", &[LABOR_AGENCIES]),
    ("jobs", &[LABOR_AGENCIES]),
    ("commerce-labor", &[LABOR_AGENCIES, ECONOMY_AGENCIES]),
    ("civil-rights-law", &[CIVIL_RIGHTS_AGENCIES]),
    ("agriculture-food", &[AGRICULTURE_AGENCIES]),
    ("sports-arts-culture", &[CULTURE_AGENCIES]),
];

/// Union of the agencies suggested for each interest, first-seen order, no repeats.
/// Unrecognized interests contribute nothing.
pub fn suggested_agencies<S: AsRef<str>>(interests: &[S]) -> Vec<&'static str> {
    let mut suggestions: Vec<&'static str> = Vec::new();

    for interest in interests {
        let interest = interest.as_ref().trim();
        let Some((_, groups)) = AGENCY_SUGGESTIONS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(interest))
        else {
            continue;
        };

        for &slug in groups.iter().flat_map(|group| group.iter()) {
            if !suggestions.contains(&slug) {
                suggestions.push(slug);
            }
        }
    }

    suggestions
}
