//! Icon grid, loading placeholders and notifications.

use iconsmith_core::{
    ExportOutcome, GeneratedIcon, GenerationSnapshot, StyleCatalog, StyleId,
};

/// Number of placeholder tiles shown while a request is in flight.
pub const PLACEHOLDER_TILES: usize = 4;

/// Shown when there is nothing to display and nothing loading.
pub const EMPTY_STATE: &str = "Enter a topic and select a style to generate icons.";

const PLACEHOLDER: &str = "[ ...... ]";

pub fn render_loading() -> String {
    let tiles = vec![PLACEHOLDER; PLACEHOLDER_TILES].join(" ");
    format!("Generating...\n  {tiles}")
}

/// The main view: placeholders, the empty state, or a numbered icon list.
pub fn render_snapshot(snapshot: &GenerationSnapshot) -> String {
    if snapshot.is_loading() {
        return render_loading();
    }
    if snapshot.icons.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let width = snapshot
        .icons
        .iter()
        .map(|icon| icon.item.chars().count())
        .max()
        .unwrap_or(0);
    snapshot
        .icons
        .iter()
        .enumerate()
        .map(|(index, icon)| format!("{:>3}. {:<width$}  {}", index + 1, icon.item, icon.url))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_notification(message: &str) -> String {
    format!("! {message}")
}

/// One catalog entry per line; `selected` is marked with `*`.
pub fn render_styles(selected: Option<StyleId>) -> String {
    StyleCatalog::all()
        .iter()
        .map(|style| {
            let marker = if Some(style.id) == selected { '*' } else { ' ' };
            format!("{marker} {}  {:<12} {}", style.id, style.name, style.description)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result line for one export, numbered from 1.
pub fn render_export(number: usize, icon: &GeneratedIcon, outcome: &ExportOutcome) -> String {
    match outcome {
        ExportOutcome::Saved { location } => {
            format!("{number}. {}: saved to {}", icon.item, location.display())
        }
        ExportOutcome::Viewed { reason } => format!(
            "{number}. {}: could not save ({reason}); opened {} instead",
            icon.item, icon.url
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use iconsmith_core::RequestState;

    use super::*;

    fn icons() -> Vec<GeneratedIcon> {
        vec![
            GeneratedIcon::new("apple", "http://example.com/apple.png"),
            GeneratedIcon::new("banana", "http://example.com/banana.png"),
        ]
    }

    #[test]
    fn test_loading_shows_four_placeholders() {
        let snapshot = GenerationSnapshot {
            state: RequestState::Loading,
            icons: icons(),
            error: None,
        };
        let text = render_snapshot(&snapshot);
        assert!(text.starts_with("Generating..."));
        assert_eq!(text.matches(PLACEHOLDER).count(), PLACEHOLDER_TILES);
        assert!(!text.contains("apple"));
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(render_snapshot(&GenerationSnapshot::default()), EMPTY_STATE);

        let succeeded_empty = GenerationSnapshot {
            state: RequestState::Succeeded(Vec::new()),
            icons: Vec::new(),
            error: None,
        };
        assert_eq!(render_snapshot(&succeeded_empty), EMPTY_STATE);
    }

    #[test]
    fn test_grid_is_numbered_and_aligned() {
        let snapshot = GenerationSnapshot {
            state: RequestState::Succeeded(icons()),
            icons: icons(),
            error: None,
        };
        assert_eq!(
            render_snapshot(&snapshot),
            "  1. apple   http://example.com/apple.png\n  2. banana  http://example.com/banana.png"
        );
    }

    #[test]
    fn test_failed_keeps_previous_icons() {
        let snapshot = GenerationSnapshot {
            state: RequestState::Failed("Too Many Requests".into()),
            icons: icons(),
            error: Some("Too Many Requests".into()),
        };
        assert!(render_snapshot(&snapshot).contains("banana"));
    }

    #[test]
    fn test_notification() {
        assert_eq!(render_notification("Too Many Requests"), "! Too Many Requests");
    }

    #[test]
    fn test_styles_marks_selection() {
        let text = render_styles(Some(StyleId(2)));
        assert_eq!(text.lines().count(), StyleCatalog::all().len());
        let marked: Vec<_> = text.lines().filter(|line| line.starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].starts_with("* 2"));
    }

    #[test]
    fn test_export_lines() {
        let icon = GeneratedIcon::new("apple", "http://example.com/apple.png");
        let saved = ExportOutcome::Saved {
            location: PathBuf::from("out/apple.png"),
        };
        assert_eq!(render_export(1, &icon, &saved), "1. apple: saved to out/apple.png");

        let viewed = ExportOutcome::Viewed {
            reason: "HTTP 404".into(),
        };
        assert_eq!(
            render_export(2, &icon, &viewed),
            "2. apple: could not save (HTTP 404); opened http://example.com/apple.png instead"
        );
    }
}
