//! git log format definitions for stable output parsing
//!
//! These formats ensure consistent, parseable output from git commands
//! regardless of user configuration.

/// Line that opens every commit entry in log output.
///
/// An ASCII record separator, which cannot appear in a subject line.
pub const RECORD_SENTINEL: &str = "\u{1e}";

/// Formats for git commands
pub struct Templates;

impl Templates {
    /// `--pretty` argument for the unpushed-commit log
    ///
    /// Lines per entry:
    /// 1. record sentinel
    /// 2. full commit hash
    /// 3. subject
    /// 4. shortstat summary (added by `--shortstat`, absent for empty commits)
    pub fn unpushed_log() -> &'static str {
        "--pretty=format:%x1e%n%H%n%s"
    }
}
