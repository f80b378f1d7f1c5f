//! Query logging collaborator.
//!
//! Every pipeline logs the incoming query before doing anything remote.
//! The collaborator is a pass-through: it must never alter or delay
//! message delivery.

use tracing::info;

use crate::reply::MessageContext;

/// Records each incoming query.
pub trait QueryLog: Send + Sync {
    fn log_query(&self, ctx: &MessageContext);
}

/// Default implementation that emits a structured tracing event.
pub struct TracingQueryLog;

impl QueryLog for TracingQueryLog {
    fn log_query(&self, ctx: &MessageContext) {
        info!(room = %ctx.room, user = %ctx.user, text = %ctx.text, "query");
    }
}
