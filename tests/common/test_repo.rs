//! Working repository fixture.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::run_git;

/// Throwaway working repository on `main`, removed on drop
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Empty repository with a committer identity and signing disabled
    pub fn new() -> Self {
        let repo = Self {
            dir: TempDir::new().expect("temp dir"),
        };

        repo.git(&["init", "--quiet"]);
        // Independent of the host's init.defaultBranch
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        for (key, value) in [
            ("user.name", "Station Master"),
            ("user.email", "station@example.com"),
            ("commit.gpgsign", "false"),
        ] {
            repo.git(&["config", key, value]);
        }

        repo
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Run git here, panicking with stderr on a non-zero exit
    pub fn git(&self, args: &[&str]) -> String {
        let output = run_git(self.dir.path(), args);
        assert!(
            output.status.success(),
            "git {args:?} exited with {:?}:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write file");
    }

    /// Write, stage and commit one file; returns the new HEAD hash
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> String {
        self.write_file(name, content);
        self.git(&["add", name]);
        self.git(&["commit", "--quiet", "-m", message]);
        self.head()
    }

    /// Commit that touches no files, so git reports no shortstat for it
    pub fn commit_empty(&self, message: &str) -> String {
        self.git(&["commit", "--quiet", "--allow-empty", "-m", message]);
        self.head()
    }

    pub fn head(&self) -> String {
        self.rev("HEAD")
    }

    /// Full hash of any revision
    pub fn rev(&self, rev: &str) -> String {
        self.git(&["rev-parse", rev]).trim().to_string()
    }

    pub fn add_remote(&self, name: &str, url: &str) {
        self.git(&["remote", "add", name, url]);
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
