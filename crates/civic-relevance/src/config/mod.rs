use crate::relevance::{RankOptions, ScoringWeights};
use chrono::NaiveDate;
use std::env;
use std::fmt;

const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the relevance tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub feed: FeedConfig,
    pub weights: ScoringWeights,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("RELEVANCE_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("RELEVANCE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let min_score = match non_empty_var("RELEVANCE_MIN_SCORE") {
            Some(raw) => raw
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or(ConfigError::InvalidMinScore { value: raw })?,
            None => 0.0,
        };

        let limit = match non_empty_var("RELEVANCE_FEED_LIMIT") {
            Some(raw) => Some(
                raw.parse::<usize>()
                    .map_err(|_| ConfigError::InvalidLimit {
                        name: "RELEVANCE_FEED_LIMIT",
                        value: raw,
                    })?,
            ),
            None => None,
        };

        let top_keywords = match non_empty_var("RELEVANCE_TOP_KEYWORDS") {
            Some(raw) => raw.parse::<usize>().map_err(|_| ConfigError::InvalidLimit {
                name: "RELEVANCE_TOP_KEYWORDS",
                value: raw,
            })?,
            None => DEFAULT_TOP_KEYWORDS,
        };

        let weights = ScoringWeights::new(
            weight_var("RELEVANCE_WEIGHT_KEYWORD")?,
            weight_var("RELEVANCE_WEIGHT_AGENCY")?,
            weight_var("RELEVANCE_WEIGHT_TYPE")?,
            weight_var("RELEVANCE_WEIGHT_URGENCY")?,
        );

        Ok(Self {
            environment,
            telemetry: TelemetryConfig::new(log_level),
            feed: FeedConfig {
                min_score,
                limit,
                top_keywords,
            },
            weights,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    /// Set when a command-line verbosity flag replaced the configured level.
    pub verbosity_overridden: bool,
}

impl TelemetryConfig {
    pub fn new(log_level: impl Into<String>) -> Self {
        Self {
            log_level: log_level.into(),
            verbosity_overridden: false,
        }
    }

    /// `-v` raises logging to `debug`, `-vv` and beyond to `trace`; zero keeps
    /// the configured level.
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        let level = match verbose {
            0 => return self,
            1 => "debug",
            _ => "trace",
        };
        self.log_level = level.to_string();
        self.verbosity_overridden = true;
        self
    }
}

/// Defaults applied when building a personalized feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedConfig {
    pub min_score: f64,
    pub limit: Option<usize>,
    pub top_keywords: usize,
}

impl FeedConfig {
    pub fn rank_options(&self, now: NaiveDate) -> RankOptions {
        let options = RankOptions::as_of(now).with_min_score(self.min_score);
        match self.limit {
            Some(limit) => options.with_limit(limit),
            None => options,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn weight_var(name: &'static str) -> Result<f64, ConfigError> {
    match non_empty_var(name) {
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or(ConfigError::InvalidWeight { name, value: raw }),
        None => Ok(1.0),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMinScore { value: String },
    InvalidLimit { name: &'static str, value: String },
    InvalidWeight { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinScore { value } => {
                write!(f, "RELEVANCE_MIN_SCORE must be a finite number (got '{value}')")
            }
            ConfigError::InvalidLimit { name, value } => {
                write!(f, "{name} must be a non-negative integer (got '{value}')")
            }
            ConfigError::InvalidWeight { name, value } => {
                write!(f, "{name} must be a non-negative number (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
