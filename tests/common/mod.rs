//! Shared fixtures for the git integration tests.
//!
//! Every test builds its own throwaway repositories under a temp dir: a
//! working clone on `main` ([`TestRepo`]) and, where pushing matters, a bare
//! `origin` ([`RemoteRepo`]).
//!
//! Each integration test file compiles as a separate crate, so not every
//! helper is used everywhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod remote_repo;
pub mod test_repo;

pub use remote_repo::RemoteRepo;
pub use test_repo::TestRepo;

use std::path::Path;
use std::process::{Command, Output};

/// Whether a usable `git` binary is on PATH
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Run git in `dir` and hand back the raw output, whatever the exit status
pub fn run_git(dir: &Path, args: &[&str]) -> Output {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("could not spawn git {args:?}: {e}"))
}

/// Return early from a test when git is not installed
#[macro_export]
macro_rules! skip_if_no_git {
    () => {
        if !$crate::common::git_available() {
            eprintln!("skipping: git not found in PATH");
            return;
        }
    };
}
