//! Size limits imposed by the chat transport.

use serde::Deserialize;

use super::RenderedReply;

/// Maximum sizes of a rendered reply, counted in characters.
///
/// Defaults match the embed limits of common chat platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReplyLimits {
    /// Maximum title length.
    pub title: usize,
    /// Maximum body length.
    pub body: usize,
    /// Maximum field name length.
    pub field_name: usize,
    /// Maximum field value length.
    pub field_value: usize,
    /// Maximum number of fields.
    pub fields: usize,
}

impl Default for ReplyLimits {
    fn default() -> Self {
        Self {
            title: 256,
            body: 4096,
            field_name: 256,
            field_value: 1024,
            fields: 25,
        }
    }
}

/// A single limit a reply exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitViolation {
    /// Name of the offending part, e.g. `reply.body`.
    pub part: String,
    /// Configured maximum.
    pub limit: usize,
    /// Actual size.
    pub actual: usize,
}

impl ReplyLimits {
    /// Returns the first limit `reply` exceeds, if any.
    #[must_use]
    pub fn first_violation(&self, reply: &RenderedReply) -> Option<LimitViolation> {
        let violation = |part: String, limit: usize, actual: usize| {
            (actual > limit).then_some(LimitViolation {
                part,
                limit,
                actual,
            })
        };

        if let Some(found) = reply
            .title
            .as_deref()
            .and_then(|title| violation("reply.title".to_owned(), self.title, char_len(title)))
        {
            return Some(found);
        }
        if let Some(found) = reply
            .body
            .as_deref()
            .and_then(|body| violation("reply.body".to_owned(), self.body, char_len(body)))
        {
            return Some(found);
        }
        if let Some(found) = violation("reply.fields".to_owned(), self.fields, reply.fields.len()) {
            return Some(found);
        }

        reply.fields.iter().enumerate().find_map(|(index, field)| {
            violation(
                format!("reply.fields[{index}].name"),
                self.field_name,
                char_len(&field.name),
            )
            .or_else(|| {
                violation(
                    format!("reply.fields[{index}].value"),
                    self.field_value,
                    char_len(&field.value),
                )
            })
        })
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
