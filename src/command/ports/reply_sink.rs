//! Reply delivery port.
//!
//! The chat collaborator owns the connection and message delivery; this
//! crate only hands it finished replies.

use async_trait::async_trait;

use crate::command::domain::DeliveryError;
use crate::render::RenderedReply;

/// Result type for reply delivery.
pub type ReplySinkResult<T> = Result<T, DeliveryError>;

/// Channel a reply is sent back through.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Delivers a reply.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::PayloadTooLarge`] when the transport rejects
    /// the reply size, or [`DeliveryError::Transport`] for other failures.
    async fn send(&self, reply: &RenderedReply) -> ReplySinkResult<()>;
}
