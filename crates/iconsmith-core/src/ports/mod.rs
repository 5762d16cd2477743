//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest` types in any signature
//! - No filesystem or process details; a save surface only sees triggers
//! - Adapters classify their own failures into the port error types

pub mod assets;
pub mod browsing;
pub mod generation;
pub mod save_surface;

pub use assets::{AssetFetchPort, AssetRetrievalError, RetrievedAsset};
pub use browsing::{BrowsingContextPort, ViewError};
pub use generation::{GenerationFailure, IconGenerationPort};
pub use save_surface::{SaveError, SaveSurface, SaveTrigger};
