//! Incremental output for the interactive session.

use iconsmith_core::{GenerationSnapshot, RequestState};

use super::grid::{render_loading, render_notification, render_snapshot};

/// Lines to print when the published snapshot moves from `previous` to
/// `current`. Intermediate snapshots may have been coalesced away, so this
/// compares states rather than assuming a Loading step in between.
pub fn describe_change(previous: &GenerationSnapshot, current: &GenerationSnapshot) -> Vec<String> {
    let mut lines = Vec::new();

    if current.is_loading() {
        if !previous.is_loading() {
            lines.push(render_loading());
        }
    } else if current.state != previous.state && current.state != RequestState::Idle {
        lines.push(render_snapshot(current));
    }

    if current.error != previous.error {
        match &current.error {
            Some(message) => lines.push(render_notification(message)),
            None if previous.error.is_some() && !current.is_loading() => {
                lines.push("(notification dismissed)".to_string());
            }
            None => {}
        }
    }

    lines
}
