//! Unpushed commit history
//!
//! Validates the branch pair, queries the ahead-only log and turns it into
//! records ordered the way the train is assembled.

use log::debug;

use super::GitError;
use super::executor::GitExecutor;
use super::parser::Parser;
use crate::model::CommitRecord;

impl GitExecutor {
    /// Commits on `branch` that `remote/branch` does not have, oldest first
    ///
    /// Fails with [`GitError::BranchNotFound`] or
    /// [`GitError::RemoteBranchNotFound`] before querying the log, and with
    /// [`GitError::NoUnpushedCommits`] when the branch is not ahead.
    pub fn unpushed_commits(
        &self,
        branch: &str,
        remote: &str,
    ) -> Result<Vec<CommitRecord>, GitError> {
        if !self.local_branch_exists(branch)? {
            return Err(GitError::BranchNotFound {
                branch: branch.to_string(),
            });
        }

        if !self.remote_branch_exists(remote, branch)? {
            return Err(GitError::RemoteBranchNotFound {
                remote: remote.to_string(),
                branch: branch.to_string(),
            });
        }

        let raw = self.unpushed_log_raw(branch, remote)?;
        let commits = commits_oldest_first(&raw, branch)?;
        debug!("{} unpushed commit(s) on {branch}", commits.len());
        Ok(commits)
    }
}

/// Parse newest-first log output and reverse it
///
/// Later commits build on earlier ones, so the earliest commit is coupled
/// directly behind the locomotive.
pub fn commits_oldest_first(raw: &str, branch: &str) -> Result<Vec<CommitRecord>, GitError> {
    let mut commits = Parser::parse_log(raw);
    if commits.is_empty() {
        return Err(GitError::NoUnpushedCommits {
            branch: branch.to_string(),
        });
    }

    commits.reverse();
    Ok(commits)
}
