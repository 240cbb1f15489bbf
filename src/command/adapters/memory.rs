//! In-memory reply sink for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::command::ports::{ReplySink, ReplySinkResult};
use crate::render::{RenderedReply, ReplyLimits};

/// Records delivered replies.
///
/// With limits configured, oversized replies are rejected the way a real
/// chat transport would and are not recorded.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReplySink {
    limits: Option<ReplyLimits>,
    delivered: Arc<Mutex<Vec<RenderedReply>>>,
}

impl InMemoryReplySink {
    /// Creates a sink that accepts replies of any size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink enforcing `limits`.
    #[must_use]
    pub fn with_limits(limits: ReplyLimits) -> Self {
        Self {
            limits: Some(limits),
            delivered: Arc::default(),
        }
    }

    /// Returns delivered replies in delivery order.
    #[must_use]
    pub fn delivered(&self) -> Vec<RenderedReply> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ReplySink for InMemoryReplySink {
    async fn send(&self, reply: &RenderedReply) -> ReplySinkResult<()> {
        if let Some(violation) = self
            .limits
            .as_ref()
            .and_then(|limits| limits.first_violation(reply))
        {
            return Err(violation.into());
        }

        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(reply.clone());
        Ok(())
    }
}
