//! File boundary for the command-line consumer: loading document batches and
//! profiles from JSON, and exporting ranked feeds as CSV.

mod export;

pub use export::write_ranked_csv;

use crate::relevance::{Document, UserRelevanceProfile};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Errors raised while reading or writing feed files.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("failed to read feed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid feed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write CSV feed: {0}")]
    Csv(#[from] csv::Error),
}

/// A batch of documents, either a bare JSON array or the document API's
/// paginated `{ "count": .., "results": [..] }` envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentFeed {
    pub documents: Vec<Document>,
    /// Total reported by the API envelope, when present.
    pub reported_count: Option<usize>,
}

#[derive(Deserialize)]
struct FeedEnvelope {
    #[serde(default)]
    count: Option<usize>,
    #[serde(default)]
    results: Vec<Document>,
}

impl DocumentFeed {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FeedError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Dispatches on the first non-whitespace byte so a bad document reports
    /// its own line and column instead of a failed shape guess.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, FeedError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;

        let feed = match raw.trim_start().as_bytes().first() {
            Some(b'{') => {
                let envelope: FeedEnvelope = serde_json::from_str(&raw)?;
                Self {
                    documents: envelope.results,
                    reported_count: envelope.count,
                }
            }
            _ => Self {
                documents: serde_json::from_str(&raw)?,
                reported_count: None,
            },
        };

        debug!(
            documents = feed.documents.len(),
            reported = ?feed.reported_count,
            "loaded document feed"
        );
        Ok(feed)
    }
}

pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserRelevanceProfile, FeedError> {
    let file = File::open(path)?;
    profile_from_reader(BufReader::new(file))
}

pub fn profile_from_reader<R: Read>(reader: R) -> Result<UserRelevanceProfile, FeedError> {
    Ok(serde_json::from_reader(reader)?)
}
