//! Search orchestrator: coordinates classification, symbol resolution, the
//! primary search, URL enrichment, scope storage, and the best-effort
//! secondary suggestion fetch.
//!
//! Remote failures never reach the user as technical detail: symbol
//! resolution and URL shortening fall back silently, a primary search
//! failure produces one fixed message, and a secondary failure degrades to
//! a "none" message after the primary reply has already gone out.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{error, warn};

use newsdesk_api::ContentApi;
use newsdesk_core::config::ChatConfig;
use newsdesk_core::types::{Story, Topic};

use crate::classifier::{classify, Classification};
use crate::error::ChatError;
use crate::log::QueryLog;
use crate::render::{numbered_list, numbered_list_with, story_detail, story_line};
use crate::reply::{MessageContext, Replier, ScopeKey};
use crate::scope::ReferenceStore;

pub(crate) const SEARCH_USAGE_HINT: &str = "You need to specify a word or phrase to search for, \
     or a topic id, e.g. search bear market, or search T2";

const UNKNOWN_TOPIC_HINT: &str = "Unknown topic. Say `topics` to find out what topics I already \
     found for you, or `topics something` to find one.";

const FOLLOW_UP_HINT: &str = "To search a topic, say for example `search T3`";

/// Outcome of the symbol-to-company-name lookup. Failure is an expected,
/// absorbed branch, not an error.
enum SymbolResolution {
    Resolved(String),
    Unresolved,
}

/// Coordinates the multi-stage search pipeline and the reference-lookup
/// commands that read from it.
pub struct SearchOrchestrator {
    api: Arc<dyn ContentApi>,
    stories: Arc<dyn ReferenceStore<Story>>,
    topics: Arc<dyn ReferenceStore<Topic>>,
    query_log: Arc<dyn QueryLog>,
    short_list_len: usize,
}

impl SearchOrchestrator {
    pub fn new(
        api: Arc<dyn ContentApi>,
        stories: Arc<dyn ReferenceStore<Story>>,
        topics: Arc<dyn ReferenceStore<Topic>>,
        query_log: Arc<dyn QueryLog>,
        config: &ChatConfig,
    ) -> Self {
        Self {
            api,
            stories,
            topics,
            query_log,
            short_list_len: config.short_list_len,
        }
    }

    /// Run the full search pipeline for a raw term.
    ///
    /// Stages are strictly ordered; the primary reply is delivered before
    /// the secondary suggestion fetch starts.
    pub async fn search(
        &self,
        replier: &dyn Replier,
        ctx: &MessageContext,
        raw_term: &str,
    ) -> Result<(), ChatError> {
        self.query_log.log_query(ctx);

        let term = raw_term.trim();
        if term.is_empty() {
            return replier.send(ctx, SEARCH_USAGE_HINT).await;
        }

        let scope = ctx.scope_key();

        // (display term, search query, tag-based?) for the dispatch below.
        let (term, query, tag_search) = match classify(term, self.topics.as_ref(), &scope) {
            Classification::Invalid => return replier.send(ctx, SEARCH_USAGE_HINT).await,
            Classification::UnknownTopic => return replier.send(ctx, UNKNOWN_TOPIC_HINT).await,
            Classification::BackReference { key } => (key.clone(), key, true),
            Classification::ExplicitTopic => (term.to_string(), term.to_string(), true),
            Classification::FreeText => (term.to_string(), term.to_string(), false),
            Classification::Symbol => match self.resolve_symbol(term).await {
                // The resolved company name becomes both the reply text
                // and the text-search query.
                SymbolResolution::Resolved(name) => (name.clone(), name, false),
                SymbolResolution::Unresolved => (term.to_string(), term.to_string(), false),
            },
        };

        let result = if tag_search {
            self.api.search_by_tag(&query).await
        } else {
            self.api.search_by_text(&query).await
        };
        let stories = match result {
            Ok(stories) => stories,
            Err(e) => {
                error!(term = %term, error = %e, "primary search failed");
                let reply = format!("Unable to load results for *{}*", term);
                return replier.send(ctx, &reply).await;
            }
        };

        let stories = self.shorten_all(stories).await;
        let entries = self.stories.add(&scope, stories);
        if entries.is_empty() {
            let reply = format!(
                "No articles found for *{}*. Try a topic, or the name of a company, industry or person.",
                term
            );
            replier.send(ctx, &reply).await?;
        } else {
            let reply = format!(
                "Latest articles for *{}*:\n{}",
                term,
                numbered_list_with(&entries, story_line)
            );
            replier.send(ctx, &reply).await?;
        }

        // Best-effort secondary, only after the primary reply is out.
        if tag_search {
            self.send_related_topics(replier, ctx, &scope, &term, &query)
                .await
        } else {
            self.send_topic_suggestions(replier, ctx, &scope, &term).await
        }
    }

    /// Handle `topics <term>` / `suggest <term>`: fetch topic suggestions
    /// and make them referenceable.
    pub async fn suggest_topics(
        &self,
        replier: &dyn Replier,
        ctx: &MessageContext,
        term: &str,
    ) -> Result<(), ChatError> {
        self.query_log.log_query(ctx);

        let term = term.trim();
        let scope = ctx.scope_key();
        let mut suggestions = match self.api.topic_suggestions(term).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                error!(term = %term, error = %e, "topic suggestion fetch failed");
                let reply = format!("Unable to load results for *{}*", term);
                return replier.send(ctx, &reply).await;
            }
        };

        if suggestions.is_empty() {
            let reply = format!(
                "Nothing found for *{}*. Try a topic, or the name of a company, industry or person.",
                term
            );
            return replier.send(ctx, &reply).await;
        }

        suggestions.truncate(self.short_list_len);
        let entries = self.topics.add(&scope, suggestions);
        let reply = format!(
            "Topics matching *{}*:\n{}\n{}",
            term,
            numbered_list(&entries),
            FOLLOW_UP_HINT
        );
        replier.send(ctx, &reply).await
    }

    /// Handle `article <n>` / `A<n>`: show the referenced story in full and
    /// make its tags referenceable as topics.
    pub async fn show_article(
        &self,
        replier: &dyn Replier,
        ctx: &MessageContext,
        token: &str,
    ) -> Result<(), ChatError> {
        self.query_log.log_query(ctx);

        let scope = ctx.scope_key();
        let Some(story) = self.stories.get(&scope, token) else {
            let reply = format!("Could not identify an article from *{}*", token);
            return replier.send(ctx, &reply).await;
        };

        let mut reply = story_detail(&story);
        if !story.tags.is_empty() {
            let entries = self.topics.add(&scope, story.tags.clone());
            reply.push_str(&format!("\n\nRelated topics:\n{}", numbered_list(&entries)));
        }
        replier.send(ctx, &reply).await
    }

    // -- Pipeline stages --

    async fn resolve_symbol(&self, ticker: &str) -> SymbolResolution {
        match self.api.resolve_symbol(ticker).await {
            Ok(company) => SymbolResolution::Resolved(company.name),
            Err(e) => {
                warn!(ticker = %ticker, error = %e, "symbol resolution failed; using the raw term");
                SymbolResolution::Unresolved
            }
        }
    }

    /// Attach short URLs to stories that lack one, as a bounded concurrent
    /// fan-out. A failed shortening keeps the story with its original URL;
    /// result order is preserved either way.
    async fn shorten_all(&self, stories: Vec<Story>) -> Vec<Story> {
        let shortened = stories.into_iter().map(|mut story| async move {
            if story.short_url.is_none() {
                match self.api.shorten_url(&story.url).await {
                    Ok(short) => story.short_url = Some(short),
                    Err(e) => {
                        warn!(url = %story.url, error = %e, "URL shortening failed; keeping the original");
                    }
                }
            }
            story
        });
        join_all(shortened).await
    }

    async fn send_related_topics(
        &self,
        replier: &dyn Replier,
        ctx: &MessageContext,
        scope: &ScopeKey,
        term: &str,
        key: &str,
    ) -> Result<(), ChatError> {
        let mut themes = match self.api.related_themes(key).await {
            Ok(Some(themes)) => themes,
            // The remote has no answer for this key; stay quiet.
            Ok(None) => return Ok(()),
            Err(e) => {
                error!(key = %key, error = %e, "related-themes fetch failed");
                let reply = format!("No related topics for *{}*", term);
                return replier.send(ctx, &reply).await;
            }
        };

        if themes.is_empty() {
            let reply = format!("No related topics for *{}*", term);
            return replier.send(ctx, &reply).await;
        }

        themes.truncate(self.short_list_len);
        let entries = self.topics.add(scope, themes);
        let reply = format!(
            "Related topics for *{}*:\n{}\n{}",
            term,
            numbered_list(&entries),
            FOLLOW_UP_HINT
        );
        replier.send(ctx, &reply).await
    }

    async fn send_topic_suggestions(
        &self,
        replier: &dyn Replier,
        ctx: &MessageContext,
        scope: &ScopeKey,
        term: &str,
    ) -> Result<(), ChatError> {
        let mut suggestions = match self.api.topic_suggestions(term).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                error!(term = %term, error = %e, "topic suggestion fetch failed");
                let reply = format!("No topic suggestions for *{}*", term);
                return replier.send(ctx, &reply).await;
            }
        };

        if suggestions.is_empty() {
            let reply = format!("No topic suggestions for *{}*", term);
            return replier.send(ctx, &reply).await;
        }

        suggestions.truncate(self.short_list_len);
        let entries = self.topics.add(scope, suggestions);
        let reply = format!(
            "Topic suggestions for *{}*:\n{}\n{}",
            term,
            numbered_list(&entries),
            FOLLOW_UP_HINT
        );
        replier.send(ctx, &reply).await
    }
}

// =============================================================================
// Tests
// =============================================================================
