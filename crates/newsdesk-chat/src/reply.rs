//! The conversational surface: incoming message context, the scope key
//! reference indices are tracked under, and the reply delivery seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// An incoming chat message with its conversational coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageContext {
    /// Channel or room the message arrived in.
    pub room: String,
    /// User who sent the message.
    pub user: String,
    /// Raw message text.
    pub text: String,
}

impl MessageContext {
    pub fn new(room: impl Into<String>, user: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            room: room.into(),
            user: user.into(),
            text: text.into(),
        }
    }

    /// The scope this conversation's reference indices live under.
    pub fn scope_key(&self) -> ScopeKey {
        ScopeKey {
            room: self.room.clone(),
            user: Some(self.user.clone()),
        }
    }
}

/// A conversational context key. Reference indices are tracked per scope;
/// different scopes never interfere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScopeKey {
    pub room: String,
    /// Present when indices are tracked per user within a room.
    pub user: Option<String>,
}

/// Delivery seam to the chat host.
///
/// The pipelines await `send` before starting any best-effort secondary
/// fetch, so primary-before-secondary ordering is structural rather than a
/// scheduling accident.
#[async_trait]
pub trait Replier: Send + Sync {
    async fn send(&self, ctx: &MessageContext, text: &str) -> Result<(), ChatError>;
}
