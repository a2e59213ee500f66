use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::dates;

/// Publication category of an entry in the federal rule-making journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
pub enum DocumentType {
    Rule,
    ProposedRule,
    Notice,
    PresidentialDocument,
    /// Anything the journal publishes outside the four categories above.
    Uncategorized,
}

impl DocumentType {
    /// Accepts canonical names, the API's display names, and its short codes.
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|ch| match ch {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        match normalized.as_str() {
            "RULE" => Self::Rule,
            "PROPOSED_RULE" | "PRORULE" => Self::ProposedRule,
            "NOTICE" => Self::Notice,
            "PRESIDENTIAL_DOCUMENT" | "PRESDOCU" => Self::PresidentialDocument,
            _ => Self::Uncategorized,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Rule => "Rule",
            Self::ProposedRule => "Proposed Rule",
            Self::Notice => "Notice",
            Self::PresidentialDocument => "Presidential Document",
            Self::Uncategorized => "Uncategorized Document",
        }
    }
}

impl From<String> for DocumentType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Agency attribution attached to a document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agency {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_name: Option<String>,
}

impl Agency {
    pub fn new(id: u32, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            slug: Some(slug.into()),
            name: Some(name.into()),
            raw_name: None,
        }
    }

    /// Human readable name, falling back to the raw attribution and then the slug.
    pub fn display_name(&self) -> Option<&str> {
        [&self.name, &self.raw_name, &self.slug]
            .into_iter()
            .filter_map(|value| value.as_deref())
            .map(str::trim)
            .find(|value| !value.is_empty())
    }
}

/// Regulatory document as supplied by the document-retrieval collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(alias = "document_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub title: String,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub significant: Option<bool>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub agencies: Vec<Agency>,
    #[serde(
        default,
        deserialize_with = "dates::lenient_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub comments_close_on: Option<NaiveDate>,
    pub publication_date: NaiveDate,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        document_type: DocumentType,
        title: impl Into<String>,
        publication_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            document_type,
            title: title.into(),
            summary: None,
            significant: None,
            agencies: Vec::new(),
            comments_close_on: None,
            publication_date,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_significant(mut self, significant: bool) -> Self {
        self.significant = Some(significant);
        self
    }

    pub fn with_agency(mut self, agency: Agency) -> Self {
        self.agencies.push(agency);
        self
    }

    pub fn with_comments_close_on(mut self, date: NaiveDate) -> Self {
        self.comments_close_on = Some(date);
        self
    }

    pub fn is_significant(&self) -> bool {
        self.significant.unwrap_or(false)
    }

    /// Lowercased title and abstract joined by a single space, the text every
    /// substring matcher searches.
    pub fn searchable_text(&self) -> String {
        let mut text = self.title.to_lowercase();
        if let Some(summary) = self.summary.as_deref() {
            text.push(' ');
            text.push_str(&summary.to_lowercase());
        }
        text
    }
}

/// Declared interests and follow-lists used to personalize scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRelevanceProfile {
    #[serde(default)]
    pub policy_interests: Vec<String>,
    #[serde(default)]
    pub followed_agency_ids: BTreeSet<u32>,
    #[serde(default)]
    pub followed_agency_slugs: BTreeSet<String>,
    /// Reserved for location weighting; no current rule reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl UserRelevanceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for interest in interests {
            let interest = interest.into();
            if !self
                .policy_interests
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&interest))
            {
                self.policy_interests.push(interest);
            }
        }
        self
    }

    pub fn following_agency_id(mut self, id: u32) -> Self {
        self.followed_agency_ids.insert(id);
        self
    }

    pub fn following_agency_slug(mut self, slug: impl Into<String>) -> Self {
        self.followed_agency_slugs.insert(slug.into());
        self
    }

    pub fn in_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn follows_slug(&self, slug: &str) -> bool {
        self.followed_agency_slugs
            .iter()
            .any(|followed| followed.trim().eq_ignore_ascii_case(slug.trim()))
    }
}

/// Component breakdown of a document's relevance to one profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RelevanceScore {
    pub keyword_score: f64,
    pub agency_score: f64,
    pub type_score: f64,
    pub urgency_score: f64,
    /// Ranking key only; not a percentage.
    pub total: f64,
    pub matched_keywords: BTreeSet<String>,
    pub matched_agencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A scored document within a ranked feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<'a> {
    pub document: &'a Document,
    pub score: RelevanceScore,
}

/// Number of distinct documents mentioning a vocabulary keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: &'static str,
    pub count: usize,
}

/// Booleans pass through, `"true"`/`"false"` strings are accepted, and any
/// other value counts as absent.
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(flag)) => Some(flag),
        Some(Value::String(raw)) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
