//! Test doubles shared by the pipeline tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use newsdesk_api::{ApiError, ContentApi};
use newsdesk_core::types::{CompanyInfo, Story, ThemeWindow, Topic};

use crate::error::ChatError;
use crate::reply::{MessageContext, Replier};

pub(crate) fn story(id: &str, title: &str) -> Story {
    Story {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://example.com/content/{}", id),
        short_url: None,
        published: Utc::now() - Duration::hours(2),
        excerpt: None,
        tags: vec![],
    }
}

pub(crate) fn topic(key: &str, name: &str) -> Topic {
    Topic::new(key, name)
}

/// Behaviour of the related-themes endpoint.
pub(crate) enum Related {
    Absent,
    Themes(Vec<Topic>),
    Fails,
}

/// Configurable in-memory `ContentApi`, recording every call it receives.
pub(crate) struct MockApi {
    pub tag_stories: Vec<Story>,
    pub text_stories: Vec<Story>,
    pub primary_fails: bool,
    pub company: Option<CompanyInfo>,
    pub failing_short_urls: Vec<String>,
    pub related: Related,
    pub suggestions: Vec<Topic>,
    pub suggestions_fail: bool,
    pub themes: Vec<Topic>,
    pub themes_fail: bool,
    pub calls: Mutex<Vec<String>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            tag_stories: vec![],
            text_stories: vec![],
            primary_fails: false,
            company: None,
            failing_short_urls: vec![],
            related: Related::Absent,
            suggestions: vec![],
            suggestions_fail: false,
            themes: vec![],
            themes_fail: false,
            calls: Mutex::new(vec![]),
        }
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn remote_down() -> ApiError {
        ApiError::Api {
            status: 500,
            message: "remote down".to_string(),
        }
    }
}

#[async_trait]
impl ContentApi for MockApi {
    async fn search_by_tag(&self, key: &str) -> Result<Vec<Story>, ApiError> {
        self.record(format!("tag:{}", key));
        if self.primary_fails {
            return Err(Self::remote_down());
        }
        Ok(self.tag_stories.clone())
    }

    async fn search_by_text(&self, query: &str) -> Result<Vec<Story>, ApiError> {
        self.record(format!("text:{}", query));
        if self.primary_fails {
            return Err(Self::remote_down());
        }
        Ok(self.text_stories.clone())
    }

    async fn resolve_symbol(&self, ticker: &str) -> Result<CompanyInfo, ApiError> {
        self.record(format!("symbol:{}", ticker));
        self.company
            .clone()
            .ok_or_else(|| ApiError::NotFound(ticker.to_string()))
    }

    async fn shorten_url(&self, url: &str) -> Result<String, ApiError> {
        self.record(format!("shorten:{}", url));
        if self.failing_short_urls.iter().any(|u| u == url) {
            return Err(ApiError::Network("shortener unreachable".to_string()));
        }
        let slug = url.rsplit('/').next().unwrap_or("x");
        Ok(format!("https://s.nd/{}", slug))
    }

    async fn related_themes(&self, key: &str) -> Result<Option<Vec<Topic>>, ApiError> {
        self.record(format!("related:{}", key));
        match &self.related {
            Related::Absent => Ok(None),
            Related::Themes(themes) => Ok(Some(themes.clone())),
            Related::Fails => Err(Self::remote_down()),
        }
    }

    async fn topic_suggestions(&self, term: &str) -> Result<Vec<Topic>, ApiError> {
        self.record(format!("suggest:{}", term));
        if self.suggestions_fail {
            return Err(Self::remote_down());
        }
        Ok(self.suggestions.clone())
    }

    async fn themes_by_window(
        &self,
        window: ThemeWindow,
        flavour: Option<&str>,
    ) -> Result<Vec<Topic>, ApiError> {
        self.record(format!(
            "themes:{}:{}",
            match window {
                ThemeWindow::Recent => "recent",
                ThemeWindow::HundredDays => "100d",
            },
            flavour.unwrap_or("-")
        ));
        if self.themes_fail {
            return Err(Self::remote_down());
        }
        Ok(self.themes.clone())
    }
}

/// Replier that records everything sent to it.
#[derive(Default)]
pub(crate) struct RecordingReplier {
    pub sent: Mutex<Vec<String>>,
}

impl RecordingReplier {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Replier for RecordingReplier {
    async fn send(&self, _ctx: &MessageContext, text: &str) -> Result<(), ChatError> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
