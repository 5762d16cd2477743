//! HTTP adapters for iconsmith.
//!
//! - [`GenerationClient`] implements
//!   [`IconGenerationPort`](iconsmith_core::IconGenerationPort) against
//!   `POST {base}/generate-icons`
//! - [`ReqwestAssetFetcher`] implements
//!   [`AssetFetchPort`](iconsmith_core::AssetFetchPort) with a plain GET
//!
//! Both classify their own failures into the core port error types; no
//! `reqwest` type crosses the boundary.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod assets;
mod config;
mod error;
mod generation;
mod wire;

// ============================================================================
// Public API
// ============================================================================

// Clients
pub use assets::ReqwestAssetFetcher;
pub use generation::GenerationClient;

// Configuration
pub use config::{API_URL_ENV, ApiConfig, DEFAULT_BASE_URL, LEGACY_API_URL_ENV};
pub use error::ConfigError;

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
