//! Animation state
//!
//! Position of the train for the current tick and the phase derived from it.

use ratatui::layout::Size;

use super::layout::{BODY_HEIGHT, WheelFrame};

/// Where the train is relative to the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Origin still at or beyond the right edge, nothing drawn on screen yet
    Approaching,
    /// Some part of the train may be on screen
    Crossing,
    /// The whole train, margin included, is past the left edge
    Departed,
}

/// Scroll position of the train, advanced once per tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    /// Column of the train origin; starts at the right edge and decreases
    offset: i32,
    /// Row of the top of the locomotive, fixed for the run
    anchor_row: i32,
    ticks: u64,
    screen_width: i32,
    total_width: i32,
}

impl AnimationState {
    /// Start just off the right edge, vertically centred on the locomotive body
    pub fn new(screen: Size, total_width: i32) -> Self {
        let screen_width = i32::from(screen.width);
        Self {
            offset: screen_width,
            anchor_row: i32::from(screen.height) / 2 - BODY_HEIGHT / 2,
            ticks: 0,
            screen_width,
            total_width,
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn anchor_row(&self) -> i32 {
        self.anchor_row
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn phase(&self) -> Phase {
        if self.offset.saturating_add(self.total_width) < 0 {
            Phase::Departed
        } else if self.offset >= self.screen_width {
            Phase::Approaching
        } else {
            Phase::Crossing
        }
    }

    /// Wheel sprite for the current position
    pub fn wheel_frame(&self) -> WheelFrame {
        WheelFrame::from_distance(self.offset.saturating_add(self.total_width))
    }

    /// Move the train one column left
    pub fn advance(&mut self) {
        self.offset -= 1;
        self.ticks += 1;
    }
}
