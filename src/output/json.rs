use std::io::Write;

use serde::Serialize;

use crate::error::AppResult;

pub fn render<T: Serialize>(value: &T) -> AppResult<String> {
    let payload = serde_json::to_string_pretty(value)?;
    Ok(format!("{payload}\n"))
}

pub fn write<W: Write, T: Serialize>(out: &mut W, value: &T) -> AppResult<()> {
    out.write_all(render(value)?.as_bytes())?;
    out.flush()?;
    Ok(())
}
