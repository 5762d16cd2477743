//! Download filename policy.
//!
//! The icon label is the filename. It is made safe for a filesystem and,
//! when it has no extension of its own, gets one derived from the
//! retrieved content type.

const FALLBACK_NAME: &str = "icon";

/// Filename to save an icon labelled `label` under.
pub fn download_filename(label: &str, content_type: Option<&str>) -> String {
    let sanitized: String = label
        .trim()
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
            {
                '_'
            } else {
                c
            }
        })
        .collect();

    let mut name = sanitized.trim_matches('.').trim().to_string();
    if name.is_empty() {
        name = FALLBACK_NAME.to_string();
    }

    if !has_extension(&name) {
        if let Some(ext) = content_type.and_then(extension_for) {
            name.push('.');
            name.push_str(ext);
        }
    }
    name
}

fn has_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(stem, ext)| {
        !stem.is_empty() && (1..=5).contains(&ext.len()) && ext.chars().all(|c| c.is_ascii_alphanumeric())
    })
}

/// File extension for an image MIME type.
fn extension_for(content_type: &str) -> Option<&'static str> {
    let mime = content_type.split(';').next()?.trim().to_ascii_lowercase();
    match mime.as_str() {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/svg+xml" => Some("svg"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        "image/avif" => Some("avif"),
        "image/x-icon" | "image/vnd.microsoft.icon" => Some("ico"),
        _ => None,
    }
}
