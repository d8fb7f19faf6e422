//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::PathBuf;
use std::process::Command;

use log::{debug, info};

use super::GitError;
use super::constants::{self, commands, errors, flags, refs};
use super::template::Templates;

/// Executor for git commands
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository (None = current directory)
    repo_path: Option<PathBuf>,
}

impl Default for GitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GitExecutor {
    /// Create a new executor for the current directory
    pub fn new() -> Self {
        Self { repo_path: None }
    }

    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: Some(path),
        }
    }

    /// Build a `git` command rooted at the repository path, if any
    fn command(&self) -> Command {
        let mut cmd = Command::new(constants::GIT_COMMAND);
        if let Some(ref path) = self.repo_path {
            cmd.arg(flags::REPO_PATH).arg(path);
        }
        cmd
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = self.command();
        cmd.args(args);
        debug!("running git {}", args.join(" "));

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Name of the currently checked out branch
    ///
    /// `rev-parse --abbrev-ref` prints `HEAD` when detached, which is reported
    /// as [`GitError::DetachedHead`].
    pub fn current_branch(&self) -> Result<String, GitError> {
        let output = self.run(&[commands::REV_PARSE, flags::ABBREV_REF, refs::HEAD])?;
        match output.trim() {
            refs::HEAD => Err(GitError::DetachedHead),
            branch => Ok(branch.to_string()),
        }
    }

    /// Check whether a fully-qualified ref exists
    ///
    /// A missing ref is `Ok(false)`; anything else git complains about is an error.
    pub fn ref_exists(&self, full_ref: &str) -> Result<bool, GitError> {
        match self.run(&[commands::SHOW_REF, flags::VERIFY, flags::QUIET, full_ref]) {
            Ok(_) => Ok(true),
            Err(GitError::CommandFailed { exit_code, .. })
                if exit_code == errors::REF_MISSING_EXIT_CODE =>
            {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Check for `refs/heads/<branch>`
    pub fn local_branch_exists(&self, branch: &str) -> Result<bool, GitError> {
        self.ref_exists(&format!("{}/{}", refs::LOCAL_BRANCHES, branch))
    }

    /// Check for `refs/remotes/<remote>/<branch>`
    pub fn remote_branch_exists(&self, remote: &str, branch: &str) -> Result<bool, GitError> {
        self.ref_exists(&format!("{}/{}/{}", refs::REMOTE_BRANCHES, remote, branch))
    }

    /// Run `git log <remote>/<branch>..<branch> --shortstat` with the
    /// record-sentinel format, newest commit first
    pub fn unpushed_log_raw(&self, branch: &str, remote: &str) -> Result<String, GitError> {
        let range = format!("{remote}/{branch}..{branch}");
        self.run(&[
            commands::LOG,
            flags::NO_COLOR,
            &range,
            flags::SHORTSTAT,
            Templates::unpushed_log(),
        ])
    }

    /// Run `git push <remote> <branch> [--force]`
    ///
    /// Returns git's combined output on success. Failures become
    /// [`GitError::PushFailed`] carrying whatever git printed.
    pub fn push(&self, branch: &str, remote: &str, force: bool) -> Result<String, GitError> {
        let mut args = vec![commands::PUSH, remote, branch];
        if force {
            args.push(flags::FORCE);
        }
        info!("pushing {branch} to {remote} (force: {force})");

        match self.run(&args) {
            Ok(output) => Ok(output),
            Err(GitError::CommandFailed { stderr, .. }) => Err(GitError::PushFailed {
                remote: remote.to_string(),
                branch: branch.to_string(),
                output: stderr.trim_end().to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}
