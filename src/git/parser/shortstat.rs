//! Shortstat summary parser
//!
//! Condenses `git log --shortstat` lines into a compact "+X -Y" form.

use super::{DELETIONS_REGEX, INSERTIONS_REGEX};

/// Convert a shortstat line to `"<files clause>, +X -Y"`
///
/// Examples:
/// - `3 files changed, 10 insertions(+), 2 deletions(-)` → `3 files changed, +10 -2`
/// - `1 file changed, 1 insertion(+)` → `1 file changed, +1`
/// - `1 file changed, 4 deletions(-)` → `1 file changed -4`
///
/// Clauses that do not match contribute nothing, so unrecognised input
/// degrades to its trimmed first clause.
pub fn parse_shortstat(line: &str) -> String {
    if line.is_empty() {
        return String::new();
    }

    let mut result = line.split(',').next().unwrap_or_default().trim().to_string();

    if let Some(caps) = INSERTIONS_REGEX.captures(line) {
        result.push_str(", +");
        result.push_str(&caps[1]);
    }

    if let Some(caps) = DELETIONS_REGEX.captures(line) {
        result.push_str(" -");
        result.push_str(&caps[1]);
    }

    result
}
