use civic_relevance::config::AppConfig;
use civic_relevance::error::AppError;
use civic_relevance::telemetry;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{
    run_keywords, run_quick, run_rank, run_suggest_agencies, KeywordsArgs, QuickArgs, RankArgs,
    SuggestArgs,
};

#[derive(Parser, Debug)]
#[command(
    name = "civic-relevance",
    about = "Score, rank, and summarize regulatory documents against civic interest profiles",
    version
)]
struct Cli {
    /// Log more detail to stderr (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a personalized, ranked feed from a document batch
    Rank(RankArgs),
    /// Summarize the most mentioned policy keywords across a document batch
    Keywords(KeywordsArgs),
    /// Quick 0..1 relevance of each document to plain interest strings
    Quick(QuickArgs),
    /// List agency slugs worth querying for the given interests
    SuggestAgencies(SuggestArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry.clone().with_verbosity(cli.verbose))?;

    match cli.command {
        Command::Rank(args) => run_rank(args, &config),
        Command::Keywords(args) => run_keywords(args, &config),
        Command::Quick(args) => run_quick(args),
        Command::SuggestAgencies(args) => run_suggest_agencies(args),
    }
}
