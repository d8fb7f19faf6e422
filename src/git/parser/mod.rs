//! git output parser
//!
//! Parses the output from git commands into structured data.

mod log;
mod shortstat;

pub use shortstat::parse_shortstat;


use regex::Regex;
use std::sync::LazyLock;

/// Regex for the insertions clause of a shortstat line
/// Example: `10 insertions(+)` or `1 insertion(+)`
///
/// Groups:
/// 1. number of inserted lines
static INSERTIONS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+insertions?\(\+\)").expect("Invalid insertions regex")
});

/// Regex for the deletions clause of a shortstat line
/// Example: `2 deletions(-)` or `1 deletion(-)`
///
/// Groups:
/// 1. number of deleted lines
static DELETIONS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+deletions?\(-\)").expect("Invalid deletions regex")
});

/// Parser for git command output
pub struct Parser;
