//! Unpushed log parser

use super::Parser;
use super::shortstat::parse_shortstat;
use crate::git::template::RECORD_SENTINEL;
use crate::model::CommitRecord;

impl Parser {
    /// Parse sentinel-delimited `git log --shortstat` output
    ///
    /// Format per entry (see `Templates::unpushed_log`):
    /// ```text
    /// <RS>
    /// <full hash>
    /// <subject>
    ///  3 files changed, 10 insertions(+), 2 deletions(-)
    /// ```
    ///
    /// The shortstat line is absent for commits that touch no files.
    /// Entries with fewer than two lines are skipped. Order is preserved.
    pub fn parse_log(output: &str) -> Vec<CommitRecord> {
        let mut commits = Vec::new();
        let mut block: Vec<&str> = Vec::new();

        for line in output.lines() {
            if line == RECORD_SENTINEL {
                commits.extend(Self::parse_log_block(&block));
                block.clear();
            } else {
                block.push(line);
            }
        }
        commits.extend(Self::parse_log_block(&block));

        commits
    }

    /// Parse the lines of a single entry (sentinel excluded)
    pub(super) fn parse_log_block(lines: &[&str]) -> Option<CommitRecord> {
        let [hash, summary, rest @ ..] = lines else {
            return None;
        };

        let changes = rest
            .first()
            .map(|stat| parse_shortstat(stat.trim()))
            .unwrap_or_default();

        Some(CommitRecord::new(hash.trim(), summary.trim(), changes))
    }
}
