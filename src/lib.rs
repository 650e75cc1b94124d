pub mod app;
pub mod cli;
pub mod clock;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod manager;
pub mod output;
pub mod profile;
pub mod storage;

use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    logging::init(logging::Verbosity::from_count(cli.verbose));
    app::run(cli)
}
