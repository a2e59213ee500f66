use std::collections::BTreeSet;
use std::sync::OnceLock;

use super::domain::Document;

const POINTS_PER_KEYWORD: f64 = 20.0;
const MAX_KEYWORD_SCORE: f64 = 100.0;

/// Interest name to lowercase keyword phrases. Every entry carries at least two phrases.
static POLICY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "climate",
        &[
            "climate",
            "emissions",
            "greenhouse gas",
            "carbon",
            "clean air",
            "renewable",
            "methane",
            "global warming",
        ],
    ),
    (
        "healthcare",
        &[
            "health",
            "medicare",
            "medicaid",
            "hospital",
            "prescription",
            "drug pricing",
            "public health",
            "affordable care",
        ],
    ),
    (
        "economy",
        &[
            "economic",
            "tax",
            "inflation",
            "trade",
            "tariff",
            "small business",
            "financial",
            "banking",
        ],
    ),
    (
        "immigration",
        &[
            "immigration",
            "visa",
            "asylum",
            "border",
            "refugee",
            "citizenship",
            "deportation",
        ],
    ),
    (
        "education",
        &[
            "education",
            "school",
            "student",
            "college",
            "student loan",
            "teacher",
            "title ix",
        ],
    ),
    (
        "technology",
        &[
            "technology",
            "cybersecurity",
            "artificial intelligence",
            "broadband",
            "privacy",
            "data",
            "telecommunications",
            "spectrum",
        ],
    ),
    (
        "defense",
        &[
            "defense",
            "military",
            "armed forces",
            "national security",
            "veterans",
            "weapons",
        ],
    ),
    (
        "housing",
        &[
            "housing",
            "mortgage",
            "rent",
            "homeless",
            "fair housing",
            "affordable housing",
        ],
    ),
    (
        "labor",
        &[
            "labor",
            "worker",
            "wage",
            "employment",
            "overtime",
            "union",
            "workplace safety",
        ],
    ),
    (
        "energy",
        &[
            "energy",
            "oil",
            "natural gas",
            "pipeline",
            "electricity",
            "nuclear",
            "solar",
            "wind",
        ],
    ),
    (
        "environment-energy",
        &[
            "environment",
            "climate",
            "emissions",
            "pollution",
            "clean water",
            "endangered species",
            "energy",
            "renewable",
        ],
    ),
    (
        "health-welfare",
        &[
            "health",
            "medicare",
            "medicaid",
            "social security",
            "disability",
            "nutrition assistance",
            "welfare",
        ],
    ),
    (
        "economy-finance",
        &[
            "economic",
            "financial",
            "securities",
            "banking",
            "tax",
            "budget",
            "credit",
            "consumer protection",
        ],
    ),
    (
        "civil-rights-law",
        &[
            "civil rights",
            "discrimination",
            "voting rights",
            "equal opportunity",
            "law enforcement",
            "criminal justice",
            "accessibility",
        ],
    ),
    (
        "commerce-labor",
        &[
            "commerce",
            "trade",
            "labor",
            "employment",
            "wage",
            "manufacturing",
            "export",
        ],
    ),
    (
        "government-politics",
        &[
            "election",
            "federal agency",
            "government",
            "ethics",
            "transparency",
            "procurement",
            "regulatory reform",
        ],
    ),
    (
        "foreign-policy-defense",
        &[
            "foreign",
            "sanctions",
            "defense",
            "military",
            "export control",
            "international",
            "treaty",
        ],
    ),
    (
        "housing-urban",
        &[
            "housing",
            "urban",
            "community development",
            "mortgage",
            "transit",
            "infrastructure",
        ],
    ),
    (
        "agriculture-food",
        &[
            "agriculture",
            "farm",
            "food safety",
            "crop",
            "livestock",
            "nutrition",
            "rural",
        ],
    ),
    (
        "sports-arts-culture",
        &[
            "arts",
            "humanities",
            "museum",
            "cultural",
            "historic preservation",
            "sports",
            "library",
        ],
    ),
    (
        "immigration-indigenous",
        &[
            "immigration",
            "visa",
            "asylum",
            "tribal",
            "indian affairs",
            "native american",
            "indigenous",
        ],
    ),
];

/// Read-only lookup over the process-wide interest vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyKeywordTable;

impl PolicyKeywordTable {
    /// Keywords for an interest; unknown interests map to an empty slice.
    pub fn keywords_for(interest: &str) -> &'static [&'static str] {
        let interest = interest.trim();
        POLICY_KEYWORDS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(interest))
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    pub fn interests() -> impl Iterator<Item = &'static str> {
        POLICY_KEYWORDS.iter().map(|(name, _)| *name)
    }

    pub fn entries() -> &'static [(&'static str, &'static [&'static str])] {
        POLICY_KEYWORDS
    }

    /// Every keyword across all interests, deduplicated and sorted.
    pub fn vocabulary() -> &'static [&'static str] {
        static VOCABULARY: OnceLock<Vec<&'static str>> = OnceLock::new();
        VOCABULARY.get_or_init(|| {
            POLICY_KEYWORDS
                .iter()
                .flat_map(|(_, keywords)| keywords.iter().copied())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        })
    }
}

/// Keyword contribution for one document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeywordMatch {
    pub score: f64,
    pub matched: BTreeSet<String>,
}

pub fn match_keywords(document: &Document, interests: &[String]) -> KeywordMatch {
    match_text(&document.searchable_text(), interests)
}

/// `text` must already be lowercased.
pub(crate) fn match_text(text: &str, interests: &[String]) -> KeywordMatch {
    let matched: BTreeSet<String> = interests
        .iter()
        .flat_map(|interest| PolicyKeywordTable::keywords_for(interest).iter())
        .filter(|keyword| text.contains(**keyword))
        .map(|keyword| keyword.to_string())
        .collect();

    let score = (POINTS_PER_KEYWORD * matched.len() as f64).min(MAX_KEYWORD_SCORE);

    KeywordMatch { score, matched }
}
