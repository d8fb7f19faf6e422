//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and special values.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Remote used when none is given
pub const DEFAULT_REMOTE: &str = "origin";

/// git subcommands
pub mod commands {
    pub const LOG: &str = "log";
    pub const PUSH: &str = "push";
    pub const REV_PARSE: &str = "rev-parse";
    pub const SHOW_REF: &str = "show-ref";
}

/// git command flags
pub mod flags {
    /// Run as if git was started in the given directory
    pub const REPO_PATH: &str = "-C";
    /// Disable color output for parsing
    pub const NO_COLOR: &str = "--no-color";
    /// Append the files/insertions/deletions summary to each log entry
    pub const SHORTSTAT: &str = "--shortstat";
    /// Print the short name of a ref (`rev-parse --abbrev-ref HEAD`)
    pub const ABBREV_REF: &str = "--abbrev-ref";
    /// Require an exact ref match (`show-ref`)
    pub const VERIFY: &str = "--verify";
    /// Report only through the exit code
    pub const QUIET: &str = "--quiet";
    pub const FORCE: &str = "--force";
}

/// Ref namespaces and symbolic names
pub mod refs {
    pub const HEAD: &str = "HEAD";
    pub const LOCAL_BRANCHES: &str = "refs/heads";
    pub const REMOTE_BRANCHES: &str = "refs/remotes";
}

/// Error detection patterns in git output
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
    /// `show-ref --verify --quiet` exit code for a missing ref
    pub const REF_MISSING_EXIT_CODE: i32 = 1;
}
