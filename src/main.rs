use std::process::ExitCode;

use clap::Parser;
use miracle::error::AppError;

fn main() -> ExitCode {
    let cli = match miracle::cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return fail(AppError::from(err)),
    };

    match miracle::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => fail(err),
    }
}

fn fail(err: AppError) -> ExitCode {
    err.report();
    ExitCode::from(err.exit_code())
}
