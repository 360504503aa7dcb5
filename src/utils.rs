use std::cmp::Ordering;

use crate::types::ShortLink;

/// Prepends `https://` when the destination lacks a recognized scheme.
///
/// Only `http://` and `https://` (ASCII case-insensitive) count as
/// recognized; anything else is treated as a bare host/path.
pub fn ensure_scheme(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Composes the shareable short URL for an identifier from the public
/// front-end base URL.
pub fn compose_short_url(frontend_url: &str, identifier: &str) -> String {
    format!("{}/{}", frontend_url.trim_end_matches('/'), identifier)
}

/// Validates a user-supplied short-link identifier for clap arguments.
///
/// Identifiers are single path segments: non-empty after trimming, no
/// whitespace, no `/`.
pub fn parse_identifier(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("identifier cannot be empty".to_string());
    }
    if trimmed.contains('/') {
        return Err(format!("invalid identifier '{}': must not contain '/'", trimmed));
    }
    if trimmed.chars().any(|c| c.is_whitespace()) {
        return Err(format!(
            "invalid identifier '{}': must not contain whitespace",
            trimmed
        ));
    }
    Ok(trimmed.to_string())
}

/// Sorts links newest-first; ties fall back to the display identifier.
pub fn sort_links(links: &mut Vec<ShortLink>) {
    links.sort_by(|a, b| match b.created_at.cmp(&a.created_at) {
        Ordering::Equal => a.display_ident().cmp(b.display_ident()),
        other => other,
    });
}

/// Case-insensitive substring filter over identifier and destination URL.
pub fn filter_links(links: &mut Vec<ShortLink>, term: &str) {
    let term = term.to_lowercase();
    links.retain(|link| {
        link.display_ident().to_lowercase().contains(&term)
            || link.original_url.to_lowercase().contains(&term)
    });
}
