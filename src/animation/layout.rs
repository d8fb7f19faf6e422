//! Train geometry
//!
//! Horizontal offsets of each part relative to the train origin, and the
//! wheel frame cycle tied to distance travelled.

use crate::ui::carriage::CARRIAGE_WIDTH;
use crate::ui::sprites::{self, wheels};

/// Locomotive body width
pub const BODY_WIDTH: i32 = 54;
/// Rows of the body above the wheels
pub const BODY_HEIGHT: i32 = sprites::BODY.len() as i32;
/// Coal tender offset from the origin (overlaps the cab by one column)
pub const COAL_OFFSET: i32 = 53;
pub const COAL_WIDTH: i32 = 30;
/// Offset of the first carriage from the origin
pub const CARRIAGE_AREA_START: i32 = 81;
pub const CARRIAGE_STRIDE: i32 = CARRIAGE_WIDTH as i32;
/// Extra columns kept after the last carriage before the train counts as gone
pub const TAIL_MARGIN: i32 = 10;
/// Columns travelled per wheel frame
pub const WHEEL_FRAME_STEP: i32 = 3;

/// Width the train occupies, used to decide when it has left the screen
pub fn total_assembly_width(carriage_count: usize) -> i32 {
    let count = i32::try_from(carriage_count).unwrap_or(i32::MAX);
    BODY_WIDTH
        .saturating_add(COAL_WIDTH)
        .saturating_add(CARRIAGE_STRIDE.saturating_mul(count))
        .saturating_add(TAIL_MARGIN)
}

/// Horizontal offset of carriage `index` from the origin
pub fn carriage_offset(index: usize) -> i32 {
    let index = i32::try_from(index).unwrap_or(i32::MAX);
    CARRIAGE_AREA_START.saturating_add(CARRIAGE_STRIDE.saturating_mul(index))
}

/// One of the six wheel-rotation sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelFrame {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl WheelFrame {
    pub const ALL: [WheelFrame; 6] = [
        WheelFrame::First,
        WheelFrame::Second,
        WheelFrame::Third,
        WheelFrame::Fourth,
        WheelFrame::Fifth,
        WheelFrame::Sixth,
    ];

    /// Frame for a given distance, `(distance / 3) mod 6`
    ///
    /// Rotation follows columns travelled rather than wall-clock time, so the
    /// wheels keep pace with the scroll at any tick speed. Negative distances
    /// wrap around instead of underflowing.
    pub fn from_distance(distance: i32) -> Self {
        let step = distance.div_euclid(WHEEL_FRAME_STEP);
        let index = step.rem_euclid(Self::ALL.len() as i32) as usize;
        Self::ALL[index]
    }

    pub fn lines(self) -> &'static [&'static str] {
        match self {
            WheelFrame::First => wheels::FRAME_1,
            WheelFrame::Second => wheels::FRAME_2,
            WheelFrame::Third => wheels::FRAME_3,
            WheelFrame::Fourth => wheels::FRAME_4,
            WheelFrame::Fifth => wheels::FRAME_5,
            WheelFrame::Sixth => wheels::FRAME_6,
        }
    }
}
