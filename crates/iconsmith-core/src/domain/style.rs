//! Visual style presets.
//!
//! The catalog is a fixed, ordered list. The generation service only ever
//! sees the numeric id.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a style preset, as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleId(pub u32);

impl StyleId {
    /// Raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StyleId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A selectable style preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    pub id: StyleId,
    pub name: &'static str,
    pub description: &'static str,
}

const STYLES: &[Style] = &[
    Style {
        id: StyleId(1),
        name: "Flat Minimal",
        description: "Solid shapes, no gradients, generous whitespace",
    },
    Style {
        id: StyleId(2),
        name: "Soft 3D",
        description: "Rounded clay-like volumes with gentle lighting",
    },
    Style {
        id: StyleId(3),
        name: "Line Art",
        description: "Single-weight outlines on a transparent background",
    },
    Style {
        id: StyleId(4),
        name: "Pixel",
        description: "Low-resolution pixel grid with a limited palette",
    },
    Style {
        id: StyleId(5),
        name: "Hand Drawn",
        description: "Sketchy strokes and uneven fills",
    },
];

/// Static catalog of style presets.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleCatalog;

impl StyleCatalog {
    /// All presets in display order.
    pub const fn all() -> &'static [Style] {
        STYLES
    }

    /// Look up a preset by id.
    pub fn find(id: StyleId) -> Option<&'static Style> {
        STYLES.iter().find(|style| style.id == id)
    }

    /// Whether `id` names a preset in the catalog.
    pub fn contains(id: StyleId) -> bool {
        Self::find(id).is_some()
    }

    /// The preset selected before the user picks one.
    pub const fn default_style() -> &'static Style {
        &STYLES[0]
    }
}
