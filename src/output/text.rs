use std::io::Write;

use crate::error::AppResult;

pub fn render(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> AppResult<()> {
    out.write_all(render(lines).as_bytes())?;
    out.flush()?;
    Ok(())
}
