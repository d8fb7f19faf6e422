//! UI layer
//!
//! Contains the train artwork, text formatting, carriage rendering and theme.

pub mod carriage;
pub mod format;
pub mod sprites;
pub mod theme;
