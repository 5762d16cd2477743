//! View command handler.

use anyhow::Result;
use iconsmith_core::GeneratedIcon;

use crate::bootstrap::CliContext;

/// Open `url` in the browsing context.
///
/// Failures to open are logged, never returned.
pub fn execute(ctx: &CliContext, url: &str) -> Result<()> {
    ctx.studio().view_asset(&GeneratedIcon::new("", url));
    Ok(())
}
