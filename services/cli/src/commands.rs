use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use civic_relevance::config::AppConfig;
use civic_relevance::error::AppError;
use civic_relevance::feed::{load_profile, write_ranked_csv, DocumentFeed, FeedError};
use civic_relevance::{
    calculate_quick_relevance, extract_top_keywords, suggested_agencies, RelevanceEngine,
    UserRelevanceProfile,
};
use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::info;

use crate::render::{render_keywords, render_quick, render_ranked_feed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum SummaryFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// JSON document batch (array or API envelope)
    #[arg(long)]
    pub(crate) documents: PathBuf,
    /// JSON user relevance profile; interest and follow flags extend it
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// Policy interest to add to the profile (repeatable)
    #[arg(long = "interest")]
    pub(crate) interests: Vec<String>,
    /// Agency identifier to follow (repeatable)
    #[arg(long = "follow-agency-id")]
    pub(crate) follow_agency_ids: Vec<u32>,
    /// Agency slug to follow (repeatable)
    #[arg(long = "follow-agency")]
    pub(crate) follow_agency_slugs: Vec<String>,
    /// Drop documents scoring below this total (overrides RELEVANCE_MIN_SCORE)
    #[arg(long)]
    pub(crate) min_score: Option<f64>,
    /// Maximum documents in the feed (overrides RELEVANCE_FEED_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Evaluation date for comment deadlines (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct KeywordsArgs {
    /// JSON document batch (array or API envelope)
    #[arg(long)]
    pub(crate) documents: PathBuf,
    /// Number of keywords to report (overrides RELEVANCE_TOP_KEYWORDS)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub(crate) format: SummaryFormat,
}

#[derive(Args, Debug)]
pub(crate) struct QuickArgs {
    /// JSON document batch (array or API envelope)
    #[arg(long)]
    pub(crate) documents: PathBuf,
    /// Interest string searched verbatim (repeatable)
    #[arg(long = "interest", required = true)]
    pub(crate) interests: Vec<String>,
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub(crate) format: SummaryFormat,
}

#[derive(Args, Debug)]
pub(crate) struct SuggestArgs {
    /// Interest name to map to agencies (repeatable)
    #[arg(long = "interest", required = true)]
    pub(crate) interests: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuickRelevanceRow<'a> {
    pub(crate) document_id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) relevance: f64,
}

pub(crate) fn run_rank(args: RankArgs, config: &AppConfig) -> Result<(), AppError> {
    let RankArgs {
        documents,
        profile,
        interests,
        follow_agency_ids,
        follow_agency_slugs,
        min_score,
        limit,
        today,
        format,
    } = args;

    let feed = DocumentFeed::from_path(&documents)?;
    let profile = build_profile(profile, interests, follow_agency_ids, follow_agency_slugs)?;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let mut options = config.feed.rank_options(today);
    if let Some(min_score) = min_score {
        options = options.with_min_score(min_score);
    }
    if let Some(limit) = limit {
        options = options.with_limit(limit);
    }

    info!(
        documents = feed.documents.len(),
        interests = profile.policy_interests.len(),
        %today,
        "ranking document feed"
    );

    let engine = RelevanceEngine::new(config.weights);
    let ranked = engine.rank(&feed.documents, &profile, &options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => render_ranked_feed(&mut out, &ranked, feed.documents.len(), today)?,
        OutputFormat::Json => write_json(&mut out, &ranked)?,
        OutputFormat::Csv => write_ranked_csv(&mut out, &ranked)?,
    }

    info!(returned = ranked.len(), "feed rendered");
    Ok(())
}

pub(crate) fn run_keywords(args: KeywordsArgs, config: &AppConfig) -> Result<(), AppError> {
    let feed = DocumentFeed::from_path(&args.documents)?;
    let limit = args.limit.unwrap_or(config.feed.top_keywords);
    let keywords = extract_top_keywords(&feed.documents, Some(limit));

    info!(
        documents = feed.documents.len(),
        keywords = keywords.len(),
        "extracted trending keywords"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        SummaryFormat::Text => render_keywords(&mut out, &keywords)?,
        SummaryFormat::Json => write_json(&mut out, &keywords)?,
    }
    Ok(())
}

pub(crate) fn run_quick(args: QuickArgs) -> Result<(), AppError> {
    let feed = DocumentFeed::from_path(&args.documents)?;
    let rows: Vec<QuickRelevanceRow<'_>> = feed
        .documents
        .iter()
        .map(|document| QuickRelevanceRow {
            document_id: &document.id,
            title: &document.title,
            relevance: calculate_quick_relevance(document, &args.interests),
        })
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        SummaryFormat::Text => render_quick(&mut out, &rows)?,
        SummaryFormat::Json => write_json(&mut out, &rows)?,
    }
    Ok(())
}

pub(crate) fn run_suggest_agencies(args: SuggestArgs) -> Result<(), AppError> {
    let suggestions = suggested_agencies(&args.interests);
    info!(
        interests = args.interests.len(),
        agencies = suggestions.len(),
        "suggested agencies"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for slug in suggestions {
        writeln!(out, "{slug}")?;
    }
    Ok(())
}

fn build_profile(
    path: Option<PathBuf>,
    interests: Vec<String>,
    follow_agency_ids: Vec<u32>,
    follow_agency_slugs: Vec<String>,
) -> Result<UserRelevanceProfile, FeedError> {
    let mut profile = match path {
        Some(path) => load_profile(path)?,
        None => UserRelevanceProfile::new(),
    };

    profile = profile.with_interests(interests);
    for id in follow_agency_ids {
        profile = profile.following_agency_id(id);
    }
    for slug in follow_agency_slugs {
        profile = profile.following_agency_slug(slug);
    }
    Ok(profile)
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(FeedError::from)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_extend_an_empty_profile() {
        let profile = build_profile(
            None,
            vec!["climate".to_string(), "Climate".to_string()],
            vec![145],
            vec!["energy-department".to_string()],
        )
        .expect("profile builds");

        assert_eq!(profile.policy_interests, vec!["climate".to_string()]);
        assert!(profile.followed_agency_ids.contains(&145));
        assert!(profile.follows_slug("energy-department"));
    }

    #[test]
    fn missing_profile_file_is_an_io_error() {
        let err = build_profile(
            Some(PathBuf::from("/nonexistent/civic-relevance/profile.json")),
            Vec::new(),
            Vec::new(),
            Vec::new(),
        )
        .expect_err("missing file");
        assert!(matches!(err, FeedError::Io(_)));
    }
}
