//! Entity types shared across the Newsdesk crates.
//!
//! These mirror the records returned by the remote content API. Field
//! renames follow the wire names so responses deserialize directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A news story returned by the search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Stable unique identifier.
    #[serde(rename = "uuid")]
    pub id: String,
    /// Display title.
    pub title: String,
    /// Canonical URL.
    pub url: String,
    /// Shortened URL, present once enrichment has run (or when the remote
    /// already supplies one).
    #[serde(rename = "shorturl", default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    /// Publish timestamp.
    #[serde(rename = "lastPublishDateTime")]
    pub published: DateTime<Utc>,
    /// Optional excerpt shown in the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Topic tags associated with the story.
    #[serde(default)]
    pub tags: Vec<Topic>,
}

/// A thematic tag (organisation, person, region, or subject).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Canonical key, e.g. `topics:bear-market`.
    #[serde(alias = "id")]
    pub key: String,
    /// Human-readable name.
    pub name: String,
}

impl Topic {
    /// Convenience constructor used throughout the chat pipelines.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
        }
    }
}

/// Company details resolved from a ticker symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// The exchange-qualified ticker, e.g. `LSE:BARC`.
    pub symbol: String,
    /// Display name, e.g. `Barclays PLC`.
    pub name: String,
}

/// Retrieval window for zeitgeist theme aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeWindow {
    /// The last few days.
    Recent,
    /// The last 100 days.
    HundredDays,
}

impl ThemeWindow {
    /// Human-readable label used in zeitgeist replies.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeWindow::Recent => "over the last few days",
            ThemeWindow::HundredDays => "over the last 100 days",
        }
    }
}
