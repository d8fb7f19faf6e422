//! git command execution layer
//!
//! This module handles executing git commands and parsing their output.

pub mod constants;
mod executor;
mod history;
/// Parser module (public for integration testing)
pub mod parser;
mod template;

pub use executor::GitExecutor;
pub use history::commits_oldest_first;
pub use parser::{Parser, parse_shortstat};

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("HEAD is detached, check out a branch or pass --branch")]
    DetachedHead,

    #[error("local branch '{branch}' does not exist")]
    BranchNotFound { branch: String },

    #[error("remote branch '{remote}/{branch}' does not exist")]
    RemoteBranchNotFound { remote: String, branch: String },

    #[error("no unpushed commits found on branch '{branch}'")]
    NoUnpushedCommits { branch: String },

    /// A query against the repository exited non-zero
    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("push to {remote}/{branch} failed:\n{output}")]
    PushFailed {
        remote: String,
        branch: String,
        output: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

impl GitError {
    /// Expected conditions the user can act on directly.
    ///
    /// These get a one-line message instead of a full error report.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            GitError::NotARepository
                | GitError::DetachedHead
                | GitError::BranchNotFound { .. }
                | GitError::RemoteBranchNotFound { .. }
                | GitError::NoUnpushedCommits { .. }
                | GitError::PushFailed { .. }
                | GitError::GitNotFound
        )
    }
}
