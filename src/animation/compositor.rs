//! Train compositing
//!
//! Writes every part of the train into a frame buffer at absolute cell
//! positions, clipping whatever falls outside the drawable area.

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use super::layout::{self, BODY_HEIGHT, COAL_OFFSET, WheelFrame};
use crate::model::Sprite;
use crate::ui::{sprites, theme};

/// Locomotive, coal tender and one carriage per commit
#[derive(Debug, Clone, Default)]
pub struct Train {
    carriages: Vec<Sprite>,
}

impl Train {
    /// Build a train; carriages are coupled in the given order
    pub fn new(carriages: Vec<Sprite>) -> Self {
        Self { carriages }
    }

    pub fn carriages(&self) -> &[Sprite] {
        &self.carriages
    }

    /// See [`layout::total_assembly_width`]
    pub fn total_width(&self) -> i32 {
        layout::total_assembly_width(self.carriages.len())
    }

    /// Draw the whole train with its origin at (`x`, `y`) relative to `area`
    pub fn draw(&self, buf: &mut Buffer, area: Rect, x: i32, y: i32, wheels: WheelFrame) {
        draw_lines(buf, area, x, y, sprites::BODY, theme::train::BODY);
        let wheel_row = y.saturating_add(BODY_HEIGHT);
        draw_lines(buf, area, x, wheel_row, wheels.lines(), theme::train::WHEELS);
        let coal_x = x.saturating_add(COAL_OFFSET);
        draw_lines(buf, area, coal_x, y, sprites::COAL, theme::train::COAL);

        for (index, carriage) in self.carriages.iter().enumerate() {
            let cx = x.saturating_add(layout::carriage_offset(index));
            draw_lines(buf, area, cx, y, carriage.lines(), theme::train::CARRIAGE);
        }
    }
}

/// Draw consecutive lines starting at row `y`
fn draw_lines<S: AsRef<str>>(
    buf: &mut Buffer,
    area: Rect,
    x: i32,
    y: i32,
    lines: &[S],
    fg: Color,
) {
    for (row, line) in lines.iter().enumerate() {
        let row = i32::try_from(row).unwrap_or(i32::MAX);
        draw_text(buf, area, x, y.saturating_add(row), line.as_ref(), fg);
    }
}

/// Write one line of text, skipping cells outside `area`
fn draw_text(buf: &mut Buffer, area: Rect, x: i32, y: i32, text: &str, fg: Color) {
    if y < 0 || y >= i32::from(area.height) {
        return;
    }
    let cell_y = area.y + y as u16;

    for (i, ch) in text.chars().enumerate() {
        let Some(col) = i32::try_from(i).ok().and_then(|i| x.checked_add(i)) else {
            return;
        };
        if col >= i32::from(area.width) {
            return;
        }
        if col < 0 {
            continue;
        }
        if let Some(cell) = buf.cell_mut((area.x + col as u16, cell_y)) {
            cell.set_char(ch).set_fg(fg);
        }
    }
}
