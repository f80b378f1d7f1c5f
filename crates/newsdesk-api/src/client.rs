//! The `ContentApi` capability trait.
//!
//! Every remote call the chat pipelines make goes through this trait, so
//! tests can substitute a fake and the HTTP transport stays swappable.

use async_trait::async_trait;

use newsdesk_core::types::{CompanyInfo, Story, ThemeWindow, Topic};

use crate::error::ApiError;

/// Remote content/search API consumed by the chat pipelines.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Search stories by a canonical topic key (tag-based search).
    async fn search_by_tag(&self, key: &str) -> Result<Vec<Story>, ApiError>;

    /// Search stories by free text.
    async fn search_by_text(&self, query: &str) -> Result<Vec<Story>, ApiError>;

    /// Resolve a ticker symbol to company details. Fails when the ticker
    /// is unknown.
    async fn resolve_symbol(&self, ticker: &str) -> Result<CompanyInfo, ApiError>;

    /// Shorten a URL. Idempotent; may fail per URL.
    async fn shorten_url(&self, url: &str) -> Result<String, ApiError>;

    /// Topics related to a canonical topic key. `None` means the remote has
    /// no answer for this key at all, as opposed to an empty related set.
    async fn related_themes(&self, key: &str) -> Result<Option<Vec<Topic>>, ApiError>;

    /// Topic suggestions for a free-text term.
    async fn topic_suggestions(&self, term: &str) -> Result<Vec<Topic>, ApiError>;

    /// Most frequent themes over a retrieval window, optionally narrowed to
    /// a flavour (people, organisations, regions, topics).
    async fn themes_by_window(
        &self,
        window: ThemeWindow,
        flavour: Option<&str>,
    ) -> Result<Vec<Topic>, ApiError>;
}
