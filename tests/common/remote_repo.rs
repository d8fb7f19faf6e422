//! Bare `origin` fixture.

use tempfile::TempDir;

use super::{TestRepo, run_git};

/// Bare repository standing in for the server side of a push
pub struct RemoteRepo {
    dir: TempDir,
}

impl RemoteRepo {
    pub fn new_bare() -> Self {
        let remote = Self {
            dir: TempDir::new().expect("temp dir"),
        };
        let output = run_git(remote.dir.path(), &["init", "--bare", "--quiet"]);
        assert!(output.status.success(), "git init --bare failed");
        remote
    }

    /// Location to register with `git remote add`
    pub fn url(&self) -> String {
        self.dir.path().to_string_lossy().into_owned()
    }

    /// Hash `branch` points at on the server, `None` if it was never pushed
    pub fn branch_head(&self, branch: &str) -> Option<String> {
        let full_ref = format!("refs/heads/{branch}");
        let output = run_git(self.dir.path(), &["rev-parse", "--verify", "--quiet", &full_ref]);
        output
            .status
            .success()
            .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl TestRepo {
    /// Fresh repository whose `origin` is `remote`, with nothing fetched
    pub fn with_origin(remote: &RemoteRepo) -> Self {
        let repo = Self::new();
        repo.add_remote("origin", &remote.url());
        repo
    }

    /// One commit on `main`, already pushed, so everything after it is unpushed
    pub fn with_published_base(remote: &RemoteRepo) -> Self {
        let repo = Self::with_origin(remote);
        repo.commit_file("README.md", "# station\n", "Initial commit");
        repo.git(&["push", "--quiet", "origin", "main"]);
        repo
    }
}
