//! Data models for commit-train
//!
//! This module contains UI-independent data structures shared between the
//! git layer and the renderer.

mod commit;
mod sprite;

pub use commit::CommitRecord;
pub use sprite::Sprite;
