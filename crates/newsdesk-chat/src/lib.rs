//! Conversational search core for Newsdesk.
//!
//! Provides per-conversation reference indexing (so users can say
//! "article A2" or "topic T3" about earlier results), query classification,
//! and the asynchronous search and zeitgeist pipelines that turn a chat
//! message into formatted replies.

pub mod classifier;
pub mod error;
pub mod log;
pub mod orchestrator;
pub mod render;
pub mod reply;
pub mod router;
pub mod scope;
pub mod zeitgeist;

#[cfg(test)]
pub(crate) mod testutil;

pub use classifier::{classify, Classification};
pub use error::ChatError;
pub use log::{QueryLog, TracingQueryLog};
pub use orchestrator::SearchOrchestrator;
pub use render::{numbered_list, numbered_list_with, story_detail, story_line, Titled};
pub use reply::{MessageContext, Replier, ScopeKey};
pub use router::CommandRouter;
pub use scope::{IndexedEntry, ReferenceStore, ScopeStore};
pub use zeitgeist::ZeitgeistOrchestrator;
