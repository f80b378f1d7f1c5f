//! Error types for the conversational core.
//!
//! Remote failures are absorbed inside the pipelines and surface to users
//! only as fixed friendly messages, so the one error that can escape an
//! orchestrator is a failure to deliver a reply to the chat host.

use newsdesk_core::error::NewsdeskError;

/// Errors from the chat core.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("reply delivery failed: {0}")]
    Delivery(String),
}

impl From<ChatError> for NewsdeskError {
    fn from(err: ChatError) -> Self {
        NewsdeskError::Chat(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChatError::Delivery("socket closed".to_string());
        assert_eq!(err.to_string(), "reply delivery failed: socket closed");
    }

    #[test]
    fn test_conversion_to_newsdesk_error() {
        let err: NewsdeskError = ChatError::Delivery("gone".to_string()).into();
        assert!(matches!(err, NewsdeskError::Chat(_)));
        assert!(err.to_string().contains("gone"));
    }
}
