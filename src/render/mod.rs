//! Output formatting for chat replies.
//!
//! Everything here is a pure transform from command results to
//! display-ready text:
//!
//! - [`bytes`]: byte-count humanisation
//! - [`filter`]: `pm2` output filtering and log-tail shaping
//! - [`reply`]: the [`RenderedReply`] shape and the single renderer turning
//!   any command outcome into one
//! - [`limits`]: chat transport size limits checked at delivery time

pub mod bytes;
pub mod filter;
pub mod limits;
pub mod reply;

pub use bytes::{ByteUnits, humanize_bytes, humanize_bytes_with_precision};
pub use filter::{PM2_TAG, filter_tagged_lines, shape_log_tail};
pub use limits::{LimitViolation, ReplyLimits};
pub use reply::{
    RenderedReply, ReplyColor, ReplyField, project_processes, render_error, render_outcome,
    render_reply,
};

#[cfg(test)]
mod tests;
