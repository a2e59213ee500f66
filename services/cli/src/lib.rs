mod cli;
mod commands;
mod infra;
mod render;

use civic_relevance::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
