//! Observable generation state.

use serde::Serialize;

use super::icon::GeneratedIcon;

/// Lifecycle of the current (or last) generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Succeeded(Vec<GeneratedIcon>),
    Failed(String),
}

impl RequestState {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Short name for logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

/// Everything a renderer needs to draw the generation area.
///
/// `icons` is the collection currently on display. It is replaced wholesale
/// on success and left alone on failure, so it can differ from the payload
/// of `state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationSnapshot {
    pub state: RequestState,
    pub icons: Vec<GeneratedIcon>,
    /// Message for the error notification, if one should be visible.
    pub error: Option<String>,
}

impl GenerationSnapshot {
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_snapshot_is_idle_and_empty() {
        let snapshot = GenerationSnapshot::default();
        assert_eq!(snapshot.state, RequestState::Idle);
        assert!(snapshot.icons.is_empty());
        assert!(snapshot.error.is_none());
        assert!(!snapshot.is_loading());
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_value(RequestState::Failed("boom".into())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "failed", "detail": "boom"}));

        let json = serde_json::to_value(RequestState::Loading).unwrap();
        assert_eq!(json, serde_json::json!({"status": "loading"}));
    }
}
