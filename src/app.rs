use std::io;

use crate::cli::Cli;
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::identity::GitIdentity;
use crate::logging;

pub fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        git_profile_name,
        git_email,
        json,
        verbose,
    } = cli;

    logging::init(verbose);

    let ctx = AppContext::bootstrap(json, verbose);
    let identity = GitIdentity::new(git_profile_name, git_email);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::echo::run(&ctx, &identity, &mut out)
}
