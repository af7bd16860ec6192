pub mod json;
pub mod text;

use std::io::Write;

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn emit<W, T>(&self, out: &mut W, text_lines: &[String], json_value: &T) -> AppResult<()>
    where
        W: Write,
        T: Serialize,
    {
        match self.mode {
            OutputMode::Text => text::write_lines(out, text_lines),
            OutputMode::Json => json::write(out, json_value),
        }
    }
}
