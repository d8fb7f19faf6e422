//! Command-line configuration

use std::time::Duration;

use clap::{ArgAction, Parser};

use crate::git::constants::DEFAULT_REMOTE;

/// Send your unpushed commits off as an ASCII train, then push them
#[derive(Parser, Debug)]
#[command(name = "commit-train", version, about, long_about = None)]
pub struct Cli {
    /// Local branch to push (defaults to the current branch)
    #[arg(long)]
    pub branch: Option<String>,

    /// Remote to compare against and push to
    #[arg(long, env = "COMMIT_TRAIN_REMOTE", default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Push once the train has left the station
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub push: bool,

    /// Force push the branch. Use with caution
    #[arg(long)]
    pub force: bool,

    /// Milliseconds per animation tick, lower is faster (clamped to 1..=120)
    #[arg(
        long,
        env = "COMMIT_TRAIN_SPEED",
        default_value_t = 40,
        allow_negative_numbers = true
    )]
    pub speed: i64,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            branch: self.branch,
            remote: self.remote,
            push: self.push,
            force: self.force,
            speed: TickSpeed::clamped(self.speed),
        }
    }
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` means the current branch
    pub branch: Option<String>,
    pub remote: String,
    pub push: bool,
    pub force: bool,
    pub speed: TickSpeed,
}

/// Tick period in milliseconds, always within `1..=120`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSpeed(u64);

impl TickSpeed {
    pub const MIN: u64 = 1;
    /// Slower than this and a long train takes hours to leave
    pub const MAX: u64 = 120;

    pub fn clamped(millis: i64) -> Self {
        Self(millis.clamp(Self::MIN as i64, Self::MAX as i64) as u64)
    }

    pub fn millis(self) -> u64 {
        self.0
    }

    pub fn period(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickSpeed {
    fn default() -> Self {
        Self(40)
    }
}
