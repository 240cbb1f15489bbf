//! Filtering of raw `pm2` output.

use crate::process::domain::{CommandOutput, LogType};

/// Prefix `pm2` puts on its own status lines.
pub const PM2_TAG: &str = "[PM2]";

/// Lines of banner printed by `pm2 logs --raw --nostream` before the log
/// content on standard output (`[TAILING] Tailing last N lines ...` and the
/// file path line).
///
/// Pinned to the `pm2` 5.x output shape. A banner change makes the tail
/// lose or keep the wrong lines rather than fail.
pub const LOG_BANNER_LINES: usize = 2;

/// Keeps only the lines starting with [`PM2_TAG`], in their original order.
#[must_use]
pub fn filter_tagged_lines(output: &str) -> String {
    output
        .split('\n')
        .filter(|line| line.starts_with(PM2_TAG))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts the displayable log tail from a `pm2 logs` run.
///
/// `out` logs drop the banner and trailing whitespace from standard output;
/// error logs return standard error verbatim.
#[must_use]
pub fn shape_log_tail(log_type: LogType, output: &CommandOutput) -> String {
    if !log_type.is_stdout() {
        return output.stderr().to_owned();
    }

    output
        .stdout()
        .split('\n')
        .skip(LOG_BANNER_LINES)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_owned()
}
