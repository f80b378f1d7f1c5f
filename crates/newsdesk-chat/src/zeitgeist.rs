//! Zeitgeist pipeline: trending themes for a time window, optionally
//! narrowed to one theme flavour.
//!
//! The returned themes replace the conversation's topic references, so a
//! zeitgeist can be followed by `search T2` just like a suggestion list.

use std::sync::Arc;

use tracing::error;

use newsdesk_api::ContentApi;
use newsdesk_core::types::{ThemeWindow, Topic};

use crate::error::ChatError;
use crate::log::QueryLog;
use crate::render::numbered_list;
use crate::reply::{MessageContext, Replier};
use crate::scope::ReferenceStore;

const FLAVOUR_HINT: &str = "If you specify a type, it needs to be one of people, organisations, \
     regions, topics, or left blank";

const EMPTY_ZEITGEIST: &str = "No zeitgeist to be had today, alas. Probably a bug.";

pub struct ZeitgeistOrchestrator {
    api: Arc<dyn ContentApi>,
    topics: Arc<dyn ReferenceStore<Topic>>,
    query_log: Arc<dyn QueryLog>,
}

impl ZeitgeistOrchestrator {
    pub fn new(
        api: Arc<dyn ContentApi>,
        topics: Arc<dyn ReferenceStore<Topic>>,
        query_log: Arc<dyn QueryLog>,
    ) -> Self {
        Self {
            api,
            topics,
            query_log,
        }
    }

    /// Fetch and render trending themes for a window.
    ///
    /// The flavour is passed through as-is; an empty result for a flavoured
    /// request reads as a bad flavour, since the remote returns something
    /// for every valid one.
    pub async fn zeitgeist(
        &self,
        replier: &dyn Replier,
        ctx: &MessageContext,
        window: ThemeWindow,
        flavour: Option<&str>,
    ) -> Result<(), ChatError> {
        self.query_log.log_query(ctx);

        let display_flavour = flavour
            .map(|f| format!(" *{}*", f))
            .unwrap_or_default();

        let themes = match self.api.themes_by_window(window, flavour).await {
            Ok(themes) => themes,
            Err(e) => {
                error!(window = window.label(), error = %e, "zeitgeist fetch failed");
                let reply = format!("zeitgeist{}: none", display_flavour);
                return replier.send(ctx, &reply).await;
            }
        };

        if themes.is_empty() {
            let reply = if flavour.is_some() {
                FLAVOUR_HINT
            } else {
                EMPTY_ZEITGEIST
            };
            return replier.send(ctx, reply).await;
        }

        let entries = self.topics.add(&ctx.scope_key(), themes);
        let reply = format!(
            "zeitgeist{}: {}\n{}",
            display_flavour,
            window.label(),
            numbered_list(&entries)
        );
        replier.send(ctx, &reply).await
    }
}
