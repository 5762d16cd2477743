//! Shared CLI presentation utilities.
//!
//! Format-only: every function turns domain values into terminal text and
//! returns it, so handlers decide where it goes.

pub mod grid;
pub mod session;

pub use grid::{
    EMPTY_STATE, PLACEHOLDER_TILES, render_export, render_loading, render_notification,
    render_snapshot, render_styles,
};
pub use session::describe_change;
