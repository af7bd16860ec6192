use std::io::Write;

use tracing::{debug, info};

use crate::context::AppContext;
use crate::error::AppResult;
use crate::identity::GitIdentity;

pub fn run<W: Write>(ctx: &AppContext, identity: &GitIdentity, out: &mut W) -> AppResult<()> {
    info!(
        profile = %identity.profile_name,
        email = %identity.email,
        "echoing git identity"
    );

    let lines = format_lines(identity);
    ctx.output.emit(out, &lines, identity)?;

    debug!(lines = lines.len(), "output written");
    Ok(())
}

fn format_lines(identity: &GitIdentity) -> Vec<String> {
    vec![
        format!("arg1 = {}", identity.profile_name),
        format!("arg2 = {}", identity.email),
    ]
}
