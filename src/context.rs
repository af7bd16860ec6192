use tracing::debug;

use crate::output::Output;

#[derive(Debug, Clone, Copy)]
pub struct AppContext {
    pub verbose: u8,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(json: bool, verbose: u8) -> Self {
        let output = Output::new(json);
        debug!(mode = ?output.mode(), verbose, "context ready");

        Self { verbose, output }
    }
}
