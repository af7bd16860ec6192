pub mod app;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod identity;
pub mod logging;
pub mod output;

use cli::Cli;
use error::AppResult;

pub fn run(cli: Cli) -> AppResult<()> {
    app::run(cli)
}
