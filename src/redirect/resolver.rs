use crate::{shortener, types::ShortLink};

/// Outcome of a short-link lookup.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// The backend returned a record for the identifier.
    Resolved(ShortLink),
    /// The backend answered with a non-success status, or the request failed.
    /// A miss is terminal; it is never retried.
    NotFound,
}

/// Resolves a short-link identifier against the backend.
///
/// Performs a single `GET /links/{identifier}` lookup. Any failure — a 404,
/// another non-success status, or a network error — collapses into
/// [`Resolution::NotFound`]: for navigation purposes there is no difference
/// between a missing link and an unreachable backend.
///
/// Callers must only invoke this with a non-empty identifier; the emptiness
/// guard lives in the orchestrator, which skips the network entirely for a
/// blank path segment.
pub async fn resolve(identifier: &str) -> Resolution {
    match shortener::links::get_link(identifier).await {
        Ok(link) => Resolution::Resolved(link),
        Err(_) => Resolution::NotFound,
    }
}
