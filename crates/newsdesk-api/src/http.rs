//! HTTP implementation of [`ContentApi`].
//!
//! A thin reqwest client over the remote search, pricing, shortening, and
//! theme endpoints. Timeouts are a property of this transport, not of the
//! chat orchestration layer.

use async_trait::async_trait;
use serde::Deserialize;

use newsdesk_core::config::ApiConfig;
use newsdesk_core::types::{CompanyInfo, Story, ThemeWindow, Topic};

use crate::client::ContentApi;
use crate::error::ApiError;

/// HTTP client for the remote content API.
#[derive(Clone)]
pub struct HttpContentApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentApi {
    /// Build a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

// Wire-format wrappers around the entity types.

#[derive(Deserialize)]
struct StoriesResponse {
    results: Vec<Story>,
}

#[derive(Deserialize)]
struct ThemesResponse {
    themes: Vec<Topic>,
}

#[derive(Deserialize)]
struct ShortUrlResponse {
    shorturl: String,
}

#[derive(Deserialize)]
struct SecurityResponse {
    basic: SecurityBasic,
}

#[derive(Deserialize)]
struct SecurityBasic {
    symbol: String,
    name: String,
}

fn window_param(window: ThemeWindow) -> &'static str {
    match window {
        ThemeWindow::Recent => "recent",
        ThemeWindow::HundredDays => "100d",
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn search_by_tag(&self, key: &str) -> Result<Vec<Story>, ApiError> {
        let resp: StoriesResponse = self.get_json("/search/tag", &[("key", key)]).await?;
        Ok(resp.results)
    }

    async fn search_by_text(&self, query: &str) -> Result<Vec<Story>, ApiError> {
        let resp: StoriesResponse = self.get_json("/search/text", &[("q", query)]).await?;
        Ok(resp.results)
    }

    async fn resolve_symbol(&self, ticker: &str) -> Result<CompanyInfo, ApiError> {
        let resp: SecurityResponse = self
            .get_json("/pricing/security", &[("symbol", ticker)])
            .await
            .map_err(|e| match e {
                ApiError::Api { status: 404, .. } => ApiError::NotFound(ticker.to_string()),
                other => other,
            })?;
        Ok(CompanyInfo {
            symbol: resp.basic.symbol,
            name: resp.basic.name,
        })
    }

    async fn shorten_url(&self, url: &str) -> Result<String, ApiError> {
        let resp: ShortUrlResponse = self.get_json("/shorten", &[("url", url)]).await?;
        Ok(resp.shorturl)
    }

    async fn related_themes(&self, key: &str) -> Result<Option<Vec<Topic>>, ApiError> {
        match self
            .get_json::<ThemesResponse>("/themes/related", &[("key", key)])
            .await
        {
            Ok(resp) => Ok(Some(resp.themes)),
            // The remote answers 404 for keys it has never aggregated; that
            // is "absent", not an error.
            Err(ApiError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn topic_suggestions(&self, term: &str) -> Result<Vec<Topic>, ApiError> {
        let resp: ThemesResponse = self.get_json("/themes/suggest", &[("q", term)]).await?;
        Ok(resp.themes)
    }

    async fn themes_by_window(
        &self,
        window: ThemeWindow,
        flavour: Option<&str>,
    ) -> Result<Vec<Topic>, ApiError> {
        let window = window_param(window);
        let resp: ThemesResponse = match flavour {
            Some(flavour) => {
                self.get_json(
                    "/themes/frequent",
                    &[("window", window), ("flavour", flavour)],
                )
                .await?
            }
            None => self.get_json("/themes/frequent", &[("window", window)]).await?,
        };
        Ok(resp.themes)
    }
}
