//! CLI bootstrap - the composition root.
//!
//! The only place concrete adapters are instantiated:
//! - generation client and asset fetcher (via iconsmith-http)
//! - save surface on the local filesystem
//! - system browser, or a printing stand-in for headless use
//!
//! Handlers receive the composed [`CliContext`] and work through the studio.

use std::path::PathBuf;
use std::sync::Arc;

use iconsmith_core::{AssetExporter, BrowsingContextPort, IconStudio, StudioConfig};
use iconsmith_http::{ApiConfig, GenerationClient, ReqwestAssetFetcher};
use tracing::debug;

use crate::browser::{PrintBrowser, SystemBrowser};
use crate::error::CliError;
use crate::surface::DirectorySurface;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub api: ApiConfig,
    /// Directory exports are saved into.
    pub output_dir: PathBuf,
    /// Print URLs instead of launching a browser.
    pub print_urls: bool,
    pub studio: StudioConfig,
}

impl CliConfig {
    /// Defaults with the API location taken from the environment.
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            output_dir: PathBuf::from("."),
            print_urls: false,
            studio: StudioConfig::default(),
        }
    }

    /// Override the API base URL when one was given explicitly.
    #[must_use]
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api = self.api.with_base_url(url);
        }
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub const fn with_print_urls(mut self, print_urls: bool) -> Self {
        self.print_urls = print_urls;
        self
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    pub studio: Arc<IconStudio>,
    pub surface: Arc<DirectorySurface>,
}

impl CliContext {
    pub fn studio(&self) -> &Arc<IconStudio> {
        &self.studio
    }

    pub fn surface(&self) -> &DirectorySurface {
        &self.surface
    }
}

/// Wire the adapters together.
///
/// # Errors
///
/// Returns [`CliError::Config`] when the API base URL is unusable.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let generator = Arc::new(GenerationClient::new(&config.api)?);
    debug!(endpoint = %generator.endpoint(), "Generation endpoint");

    let surface = Arc::new(DirectorySurface::new(config.output_dir));
    let browser: Arc<dyn BrowsingContextPort> = if config.print_urls {
        Arc::new(PrintBrowser)
    } else {
        Arc::new(SystemBrowser)
    };
    let exporter = AssetExporter::new(
        Arc::new(ReqwestAssetFetcher::new()),
        Arc::clone(&surface) as _,
        browser,
    );

    let studio = Arc::new(IconStudio::new(generator, exporter, config.studio));
    Ok(CliContext { studio, surface })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_with_defaults() {
        let config = CliConfig::from_env()
            .with_api_url(Some("http://localhost:3000/api".into()))
            .with_output_dir("icons");
        let ctx = bootstrap(config).unwrap();

        assert_eq!(ctx.surface().dir(), std::path::Path::new("icons"));
        assert_eq!(ctx.surface().attached_count(), 0);
        assert!(!ctx.studio().is_loading());
    }

    #[test]
    fn test_bootstrap_rejects_bad_api_url() {
        let config = CliConfig::from_env().with_api_url(Some("ftp://icons.internal".into()));
        let Err(err) = bootstrap(config) else {
            panic!("expected a configuration error");
        };
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_missing_api_url_keeps_environment_value() {
        let config = CliConfig::from_env();
        let base = config.api.base_url().to_string();
        assert_eq!(config.with_api_url(None).api.base_url(), base);
    }
}
