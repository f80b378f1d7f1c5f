//! Command routing: matches incoming message text against the command
//! vocabulary and dispatches to the right pipeline.
//!
//! Routes are tried in a fixed order; the first match wins. Terse
//! reference forms (`A3`, `T3`, a bare numeral) are part of the
//! vocabulary, so ordering between the article, topic and zeitgeist
//! patterns is load-bearing.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;

use newsdesk_core::types::ThemeWindow;

use crate::error::ChatError;
use crate::log::QueryLog;
use crate::orchestrator::SearchOrchestrator;
use crate::reply::{MessageContext, Replier};
use crate::zeitgeist::ZeitgeistOrchestrator;

static SUGGEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(?:topics|suggest)\s+(\S.*)$").expect("invalid regex"));

static SEARCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(?:latest|search)\s+(\S.*)$").expect("invalid regex"));

static SEARCH_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(latest|search)\s*$").expect("invalid regex"));

static ARTICLE_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(?:article\s+a?|a)\s*(\d+)\s*$").expect("invalid regex"));

static ARTICLE_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(?:article|a)\s*$").expect("invalid regex"));

static TOPIC_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(?:topic\s+t?|t)?\s*(\d+)\s*$").expect("invalid regex"));

static TOPIC_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(?:topic|t)\s*$").expect("invalid regex"));

static Z100_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(?:z100|zeitgeist100)(?:\s+(\S.*))?$").expect("invalid regex")
});

static Z_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(?:z|zeitgeist)(?:\s+(\S.*))?$").expect("invalid regex"));

const ARTICLE_USAGE_HINT: &str = "You need to specify an article, e.g. article A3, or A3";
const TOPIC_USAGE_HINT: &str = "You need to specify a topic, e.g. topic T3, or T3";

/// Routes messages to the search and zeitgeist pipelines.
pub struct CommandRouter {
    search: Arc<SearchOrchestrator>,
    zeitgeist: Arc<ZeitgeistOrchestrator>,
    query_log: Arc<dyn QueryLog>,
}

impl CommandRouter {
    pub fn new(
        search: Arc<SearchOrchestrator>,
        zeitgeist: Arc<ZeitgeistOrchestrator>,
        query_log: Arc<dyn QueryLog>,
    ) -> Self {
        Self {
            search,
            zeitgeist,
            query_log,
        }
    }

    /// Dispatch a message. Returns `Ok(true)` when a route matched,
    /// `Ok(false)` when the message is not addressed to us.
    pub async fn dispatch(
        &self,
        replier: &dyn Replier,
        ctx: &MessageContext,
    ) -> Result<bool, ChatError> {
        let text = ctx.text.trim();

        if let Some(caps) = SUGGEST_RE.captures(text) {
            let term = caps[1].trim().to_lowercase();
            // Reserved words from an older vocabulary; swallow rather than
            // search for them.
            if term == "all" || term == "clear" {
                return Ok(true);
            }
            self.search.suggest_topics(replier, ctx, &term).await?;
            return Ok(true);
        }

        if let Some(caps) = SEARCH_RE.captures(text) {
            self.search.search(replier, ctx, &caps[1]).await?;
            return Ok(true);
        }

        if let Some(caps) = SEARCH_BARE_RE.captures(text) {
            self.query_log.log_query(ctx);
            let mode = caps[1].to_lowercase();
            let hint = format!(
                "You need to specify a search term or a topic, e.g. {} collapse, or {} T2",
                mode, mode
            );
            replier.send(ctx, &hint).await?;
            return Ok(true);
        }

        if let Some(caps) = ARTICLE_REF_RE.captures(text) {
            self.search.show_article(replier, ctx, &caps[1]).await?;
            return Ok(true);
        }

        if ARTICLE_BARE_RE.is_match(text) {
            self.query_log.log_query(ctx);
            replier.send(ctx, ARTICLE_USAGE_HINT).await?;
            return Ok(true);
        }

        if let Some(caps) = TOPIC_REF_RE.captures(text) {
            self.search.search(replier, ctx, &caps[1]).await?;
            return Ok(true);
        }

        if TOPIC_BARE_RE.is_match(text) {
            self.query_log.log_query(ctx);
            replier.send(ctx, TOPIC_USAGE_HINT).await?;
            return Ok(true);
        }

        if let Some(caps) = Z100_RE.captures(text) {
            let flavour = caps.get(1).map(|m| m.as_str().trim().to_lowercase());
            self.zeitgeist
                .zeitgeist(replier, ctx, ThemeWindow::HundredDays, flavour.as_deref())
                .await?;
            return Ok(true);
        }

        if let Some(caps) = Z_RE.captures(text) {
            let flavour = caps.get(1).map(|m| m.as_str().trim().to_lowercase());
            self.zeitgeist
                .zeitgeist(replier, ctx, ThemeWindow::Recent, flavour.as_deref())
                .await?;
            return Ok(true);
        }

        Ok(false)
    }
}
