//! commit-train - watch unpushed commits leave the station
//!
//! Renders every commit that a branch has and its remote-tracking branch
//! lacks as a carriage behind an ASCII steam locomotive, scrolls the train
//! across the terminal, then pushes.
//!
//! This library provides:
//! - [`app`]: Application flow
//! - [`animation`]: Render loop, frame clock and compositing
//! - [`config`]: Command-line configuration
//! - [`git`]: git command execution and parsing
//! - [`model`]: Domain models
//! - [`ui`]: Artwork, text formatting and carriage rendering

pub mod animation;
pub mod app;
pub mod config;
pub mod git;
pub mod model;
pub mod ui;
