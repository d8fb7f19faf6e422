//! Application flow for commit-train
//!
//! Collect unpushed commits, run the train across the screen, then push.

use std::io;

use log::{debug, info};
use thiserror::Error;

use crate::animation::{AnimationEngine, Ticker, Train, display};
use crate::config::Config;
use crate::git::{GitError, GitExecutor};
use crate::ui::carriage::render_carriage;

/// Errors that end a run
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

impl AppError {
    /// Whether a one-line message is enough to explain this error
    pub fn is_user_facing(&self) -> bool {
        match self {
            AppError::Git(e) => e.is_user_facing(),
            AppError::Terminal(_) => false,
        }
    }
}

/// Run commit-train against the repository in the current directory
pub fn run(config: &Config) -> Result<(), AppError> {
    run_in(&GitExecutor::new(), config)
}

/// Run commit-train with the given executor
pub fn run_in(git: &GitExecutor, config: &Config) -> Result<(), AppError> {
    run_with(git, config, |train| {
        let mut engine = AnimationEngine::new(train, Ticker::new(config.speed.period()));
        display::with_display(|terminal| engine.run(terminal))
    })
}

/// Run commit-train, handing the assembled train to `animate`
///
/// `animate` owns the terminal for its whole call and returns the tick count.
/// git is queried before it runs and the push happens only after it returns
/// successfully.
pub fn run_with<F>(git: &GitExecutor, config: &Config, animate: F) -> Result<(), AppError>
where
    F: FnOnce(Train) -> io::Result<u64>,
{
    let branch = match &config.branch {
        Some(branch) => branch.clone(),
        None => git.current_branch()?,
    };
    let remote = config.remote.as_str();

    info!("collecting commits on {branch} not yet on {remote}");
    let commits = git.unpushed_commits(&branch, remote)?;
    for commit in &commits {
        debug!("carriage {} {}", commit.short_hash(), commit.summary());
    }

    let train = Train::new(commits.iter().map(render_carriage).collect());
    let ticks = animate(train)?;
    debug!("train departed after {ticks} ticks");

    if config.push {
        println!("Pushing to {remote}/{branch}...");
        git.push(&branch, remote, config.force)?;
        println!("Push complete. Your code has left the station!");
    }

    Ok(())
}
