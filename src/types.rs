use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A short link record as stored by the backend.
///
/// The client never mutates these fields directly; every rendered value is
/// derived from the latest fetch. `code` is unique per record, and
/// `custom_name`, when set, is unique too and preferred for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortLink {
    pub id: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    pub original_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_count: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// The identifier this link is addressed by: the custom name when present
    /// and non-empty, otherwise the generated code. Used consistently for
    /// display, lookup, deletion and visit accounting.
    pub fn display_ident(&self) -> &str {
        self.custom_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

#[derive(Tabled)]
pub struct LinkTableRow {
    pub short: String,
    pub original: String,
    pub visits: String,
    pub created: String,
}
