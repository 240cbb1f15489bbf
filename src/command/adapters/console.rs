//! Plain-text reply sink for terminal front ends.

use async_trait::async_trait;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::command::{
    domain::DeliveryError,
    ports::{ReplySink, ReplySinkResult},
};
use crate::render::{RenderedReply, ReplyColor, ReplyLimits};

/// Writes replies as text blocks to any writer, enforcing size limits.
#[derive(Debug)]
pub struct ConsoleReplySink<W> {
    writer: Mutex<W>,
    limits: ReplyLimits,
}

impl<W> ConsoleReplySink<W>
where
    W: Write + Send,
{
    /// Creates a sink writing to `writer`.
    #[must_use]
    pub const fn new(writer: W, limits: ReplyLimits) -> Self {
        Self {
            writer: Mutex::new(writer),
            limits,
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl<W> ReplySink for ConsoleReplySink<W>
where
    W: Write + Send,
{
    async fn send(&self, reply: &RenderedReply) -> ReplySinkResult<()> {
        if let Some(violation) = self.limits.first_violation(reply) {
            return Err(violation.into());
        }

        let text = format_reply(reply);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|err| DeliveryError::Transport(err.to_string()))
    }
}

fn format_reply(reply: &RenderedReply) -> String {
    let mut text = format!("[{}]\n", color_label(reply.color));
    for line in [&reply.author, &reply.title, &reply.body]
        .into_iter()
        .flatten()
    {
        text.push_str(line);
        text.push('\n');
    }
    for field in &reply.fields {
        text.push_str("## ");
        text.push_str(&field.name);
        text.push('\n');
        text.push_str(&field.value);
        if !field.value.ends_with('\n') {
            text.push('\n');
        }
    }
    if let Some(footer) = &reply.footer {
        text.push_str("-- ");
        text.push_str(footer);
        text.push('\n');
    }
    text.push('\n');
    text
}

const fn color_label(color: ReplyColor) -> &'static str {
    match color {
        ReplyColor::Normal => "info",
        ReplyColor::Success => "ok",
        ReplyColor::Error => "error",
    }
}
