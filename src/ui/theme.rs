//! Color theme definitions
//!
//! Centralized color constants for consistent train appearance.

use ratatui::style::Color;

/// Colors for each part of the train
pub mod train {
    use super::*;

    /// Locomotive body
    pub const BODY: Color = Color::Reset;
    /// Wheels and coupling rods
    pub const WHEELS: Color = Color::Gray;
    /// Coal tender
    pub const COAL: Color = Color::DarkGray;
    /// Carriages and their commit text
    pub const CARRIAGE: Color = Color::Yellow;
}
