//! Core services.
//!
//! Services depend only on ports and domain types. Adapters construct the
//! port implementations and hand them in.

mod exporter;
mod filename;
mod notification;
mod orchestrator;
mod studio;

pub use exporter::{AssetExporter, ExportOutcome};
pub use filename::download_filename;
pub use notification::{DEFAULT_NOTIFICATION_TTL, NotificationTimer};
pub use orchestrator::{PendingGeneration, RequestOrchestrator, SubmitOutcome, SubmitRejection};
pub use studio::{IconStudio, StudioConfig};
