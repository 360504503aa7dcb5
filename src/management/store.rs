use std::collections::HashMap;

use crate::{
    shortener,
    types::{CreateLinkRequest, ShortLink},
};

/// In-memory query cache over the backend's link collection.
///
/// `LinkStore` is the explicit context object shared by the CLI commands:
/// reads go through the cache, and every successful mutation marks the cached
/// collection stale so the next read refetches. There is no persistence; the
/// backend holds all authoritative state. Access is single-threaded, so
/// consistency is purely a matter of invalidation ordering: the mutation
/// completes, then the cache is cleared, then the store returns.
pub struct LinkStore {
    collection: Option<Vec<ShortLink>>,
    records: HashMap<String, ShortLink>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self {
            collection: None,
            records: HashMap::new(),
        }
    }

    /// Returns the link collection, fetching it from the backend when no
    /// fresh copy is cached.
    pub async fn links(&mut self) -> Result<Vec<ShortLink>, reqwest::Error> {
        if let Some(links) = &self.collection {
            return Ok(links.clone());
        }

        let links = shortener::links::list_links().await?;
        self.collection = Some(links.clone());
        for link in &links {
            self.records
                .insert(link.display_ident().to_string(), link.clone());
        }
        Ok(links)
    }

    /// Returns a single record by identifier, fetching on cache miss.
    pub async fn link(&mut self, identifier: &str) -> Result<ShortLink, reqwest::Error> {
        if let Some(link) = self.records.get(identifier) {
            return Ok(link.clone());
        }

        let link = shortener::links::get_link(identifier).await?;
        self.records
            .insert(link.display_ident().to_string(), link.clone());
        Ok(link)
    }

    /// Creates a link and invalidates the cached collection on success.
    ///
    /// On failure nothing is invalidated: the listing the user saw is still
    /// what the backend holds, and the user may retry manually.
    pub async fn create(&mut self, request: &CreateLinkRequest) -> Result<ShortLink, reqwest::Error> {
        let link = shortener::links::create_link(request).await?;
        self.invalidate();
        Ok(link)
    }

    /// Deletes a link and invalidates the cached collection on success.
    pub async fn delete(&mut self, identifier: &str) -> Result<(), reqwest::Error> {
        shortener::links::delete_link(identifier).await?;
        self.invalidate();
        Ok(())
    }

    /// Marks every cached query stale.
    pub fn invalidate(&mut self) {
        self.collection = None;
        self.records.clear();
    }
}

impl Default for LinkStore {
    fn default() -> Self {
        Self::new()
    }
}
