//! Prompt form state.
//!
//! Mirrors what a user has typed so far. The form does not know about the
//! network; it only decides whether the submit control is enabled and turns
//! its fields into a [`GenerationRequest`].

use super::request::{GenerationRequest, parse_color_list};
use super::style::{StyleCatalog, StyleId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudioForm {
    pub topic: String,
    /// Raw color text as typed, e.g. `"#FF5733, #33FF57"`.
    pub colors: String,
    pub style: StyleId,
}

impl Default for StudioForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            colors: String::new(),
            style: StyleCatalog::default_style().id,
        }
    }
}

impl StudioForm {
    /// Whether the submit control should be enabled.
    pub fn can_submit(&self, loading: bool) -> bool {
        !loading && !self.topic.trim().is_empty()
    }

    pub fn to_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.topic.clone(), parse_color_list(&self.colors), self.style)
    }
}
