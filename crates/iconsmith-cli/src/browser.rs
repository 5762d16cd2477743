//! Browsing contexts: where "view" sends a URL.

use iconsmith_core::{BrowsingContextPort, ViewError};
use tracing::debug;

/// Opens URLs with the desktop's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowsingContextPort for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), ViewError> {
        debug!(%url, "Opening in system browser");
        open::that_detached(url).map_err(|err| ViewError {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

/// Prints URLs to stdout for headless sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintBrowser;

impl BrowsingContextPort for PrintBrowser {
    fn open(&self, url: &str) -> Result<(), ViewError> {
        println!("Open: {url}");
        Ok(())
    }
}
