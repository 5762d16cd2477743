//! Asset export.
//!
//! Exporting an icon is a two-step operation: retrieve the bytes, then hand
//! them to a [`SaveSurface`] through a single-use [`SaveTrigger`]. When
//! either step fails the exporter opens the icon URL in a new browsing
//! context instead. Nothing is ever returned as an error.

use std::path::PathBuf;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, error, info, warn};

use super::filename::download_filename;
use crate::domain::GeneratedIcon;
use crate::ports::{
    AssetFetchPort, BrowsingContextPort, RetrievedAsset, SaveError, SaveSurface, SaveTrigger,
};

/// How an export finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Bytes were saved locally.
    Saved { location: PathBuf },
    /// The URL was opened for viewing instead.
    Viewed { reason: String },
}

impl ExportOutcome {
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Saves generated icons locally.
#[derive(Clone)]
pub struct AssetExporter {
    fetcher: Arc<dyn AssetFetchPort>,
    surface: Arc<dyn SaveSurface>,
    browser: Arc<dyn BrowsingContextPort>,
}

impl AssetExporter {
    pub fn new(
        fetcher: Arc<dyn AssetFetchPort>,
        surface: Arc<dyn SaveSurface>,
        browser: Arc<dyn BrowsingContextPort>,
    ) -> Self {
        Self {
            fetcher,
            surface,
            browser,
        }
    }

    /// Retrieve `asset` and save it, or view it if that is not possible.
    pub async fn export(&self, asset: &GeneratedIcon) -> ExportOutcome {
        let saved = self
            .fetcher
            .fetch(&asset.url)
            .await
            .map_err(|err| {
                error!(url = %asset.url, error = %err, "Failed to download icon");
                err.to_string()
            })
            .and_then(|object| {
                self.save(asset, object).map_err(|err| {
                    warn!(item = %asset.item, error = %err, "Failed to save icon");
                    err.to_string()
                })
            });

        match saved {
            Ok(location) => {
                info!(item = %asset.item, location = %location.display(), "Saved icon");
                ExportOutcome::Saved { location }
            }
            Err(reason) => {
                self.open(&asset.url);
                ExportOutcome::Viewed { reason }
            }
        }
    }

    /// Export several icons concurrently. Outcomes are in input order.
    pub async fn export_all(&self, assets: &[GeneratedIcon]) -> Vec<ExportOutcome> {
        join_all(assets.iter().map(|asset| self.export(asset))).await
    }

    /// Open `asset` in a new browsing context. No retrieval.
    pub fn view(&self, asset: &GeneratedIcon) {
        self.open(&asset.url);
    }

    fn open(&self, url: &str) {
        debug!(%url, "Opening icon in new browsing context");
        if let Err(err) = self.browser.open(url) {
            warn!(error = %err, "Could not open icon");
        }
    }

    fn save(&self, asset: &GeneratedIcon, object: RetrievedAsset) -> Result<PathBuf, SaveError> {
        let filename = download_filename(&asset.item, object.content_type.as_deref());
        let trigger = SaveTrigger::new(object, filename);

        let result = {
            let attached = Attached::attach(self.surface.as_ref(), &trigger)?;
            attached.activate()
        };
        trigger.release();
        result
    }
}

/// A trigger attached to a surface. Detaches on drop.
struct Attached<'a> {
    surface: &'a dyn SaveSurface,
    trigger: &'a SaveTrigger,
}

impl<'a> Attached<'a> {
    fn attach(surface: &'a dyn SaveSurface, trigger: &'a SaveTrigger) -> Result<Self, SaveError> {
        surface.attach(trigger)?;
        Ok(Self { surface, trigger })
    }

    fn activate(&self) -> Result<PathBuf, SaveError> {
        self.surface.activate(self.trigger)
    }
}

impl Drop for Attached<'_> {
    fn drop(&mut self) {
        self.surface.detach(self.trigger);
    }
}
