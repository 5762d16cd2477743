//! Export command handler.

use anyhow::Result;
use iconsmith_core::GeneratedIcon;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::presentation::render_export;

/// Save one icon by URL into the context's output directory.
///
/// When the bytes cannot be retrieved the URL is opened instead; that
/// still counts as a handled export.
pub async fn execute(ctx: &CliContext, url: &str, name: &str) -> Result<()> {
    let icon = GeneratedIcon::new(name, url);
    info!(%url, dir = %ctx.surface().dir().display(), "Exporting icon");

    let outcome = ctx.studio().export_asset(&icon).await;
    println!("{}", render_export(1, &icon, &outcome));
    Ok(())
}
