//! Core domain for iconsmith.
//!
//! This crate owns the generation-request lifecycle and the asset-export
//! protocol. Infrastructure (HTTP, filesystem, system browser) is reached
//! only through the traits in [`ports`]; adapters live in other crates.
//!
//! - [`services::RequestOrchestrator`] - submit a generation request and
//!   publish the resulting [`GenerationSnapshot`]
//! - [`services::AssetExporter`] - save a generated icon locally, falling back
//!   to viewing it when retrieval fails
//! - [`services::NotificationTimer`] - single auto-expiring error notification
//! - [`services::IconStudio`] - the facade a presentation layer talks to
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    GeneratedIcon, GenerationPayload, GenerationRequest, GenerationSnapshot, RequestState, Style,
    StyleCatalog, StyleId, StudioForm, parse_color_list,
};
pub use ports::{
    AssetFetchPort, AssetRetrievalError, BrowsingContextPort, GenerationFailure,
    IconGenerationPort, RetrievedAsset, SaveError, SaveSurface, SaveTrigger, ViewError,
};
pub use services::{
    AssetExporter, DEFAULT_NOTIFICATION_TTL, ExportOutcome, IconStudio, NotificationTimer,
    PendingGeneration, RequestOrchestrator, StudioConfig, SubmitOutcome, SubmitRejection,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
