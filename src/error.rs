use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// sysexits.h codes used by the binary.
pub const EX_USAGE: u8 = 64;
pub const EX_SOFTWARE: u8 = 70;
pub const EX_IOERR: u8 = 74;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(#[from] clap::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            // --help and --version surface as clap errors that print to stdout
            AppError::Usage(err) if !err.use_stderr() => 0,
            AppError::Usage(_) => EX_USAGE,
            AppError::Io(_) => EX_IOERR,
            AppError::Json(_) => EX_SOFTWARE,
        }
    }

    /// Writes the error the way the user should see it. Usage errors go
    /// through clap so the usage line and styling are preserved.
    pub fn report(&self) {
        match self {
            AppError::Usage(err) => {
                if err.print().is_err() {
                    eprintln!("{err}");
                }
            }
            other => eprintln!("error: {other}"),
        }
    }
}
