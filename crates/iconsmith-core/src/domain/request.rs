//! Generation requests and their wire payload.

use serde::Serialize;

use super::style::StyleId;

/// Separator used when joining color tokens for the wire payload.
const COLOR_SEPARATOR: &str = ", ";

/// A user's request for a batch of icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Free-text topic. Submittable only when non-blank.
    pub topic: String,
    /// Ordered color tokens, possibly empty.
    pub colors: Vec<String>,
    /// Selected style preset.
    pub style: StyleId,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, colors: Vec<String>, style: StyleId) -> Self {
        Self {
            topic: topic.into(),
            colors,
            style,
        }
    }

    /// Topic with surrounding whitespace removed.
    pub fn trimmed_topic(&self) -> &str {
        self.topic.trim()
    }

    /// Whether the topic is non-blank.
    pub fn has_topic(&self) -> bool {
        !self.trimmed_topic().is_empty()
    }

    /// Build the JSON body sent to the generation endpoint.
    pub fn to_payload(&self) -> GenerationPayload {
        GenerationPayload {
            topic: self.trimmed_topic().to_string(),
            colors: self.colors.join(COLOR_SEPARATOR),
            style: self.style.get(),
        }
    }
}

/// Body of `POST /generate-icons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPayload {
    pub topic: String,
    pub colors: String,
    pub style: u32,
}

/// Split free-form color input (`"#FF5733, #33FF57"`) into tokens.
///
/// Empty tokens are dropped; order is preserved.
pub fn parse_color_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToString::to_string)
        .collect()
}
