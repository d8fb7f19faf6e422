//! Commit record data model

/// One unpushed git commit, as carried by a train carriage
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitRecord {
    /// Full commit hash
    hash: String,

    /// Subject line
    summary: String,

    /// Normalized shortstat, e.g. `"3 files changed, +10 -2"` (empty for
    /// commits that touch no files)
    changes: String,
}

impl CommitRecord {
    pub fn new(
        hash: impl Into<String>,
        summary: impl Into<String>,
        changes: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            summary: summary.into(),
            changes: changes.into(),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn changes(&self) -> &str {
        &self.changes
    }

    /// First seven characters of the hash
    pub fn short_hash(&self) -> &str {
        match self.hash.char_indices().nth(7) {
            Some((idx, _)) => &self.hash[..idx],
            None => &self.hash,
        }
    }
}
