//! Train animation
//!
//! Scrolls the train from the right edge of the terminal until it has
//! completely left on the left, one column per tick.
//!
//! - [`layout`]: part offsets, assembly width and the wheel frame cycle
//! - [`state`]: scroll position and phase
//! - [`clock`]: fixed-period tick source
//! - [`compositor`]: draws the train into a frame buffer
//! - [`display`]: scoped terminal acquisition

pub mod clock;
pub mod compositor;
pub mod display;
pub mod layout;
pub mod state;

pub use clock::{FrameClock, Ticker};
pub use compositor::Train;
pub use layout::{WheelFrame, total_assembly_width};
pub use state::{AnimationState, Phase};

use std::io;

use ratatui::{Terminal, backend::Backend};

/// Drives the render loop for one train
#[derive(Debug)]
pub struct AnimationEngine<C> {
    train: Train,
    clock: C,
}

impl<C: FrameClock> AnimationEngine<C> {
    pub fn new(train: Train, clock: C) -> Self {
        Self { train, clock }
    }

    pub fn train(&self) -> &Train {
        &self.train
    }

    /// Run until the train has departed, returning the number of ticks
    ///
    /// Each tick draws one full frame (ratatui starts every frame from an
    /// empty buffer and flushes only changed cells), waits for the clock,
    /// then moves the train one column left. A run over a screen `w` columns
    /// wide takes exactly `w + total_width + 1` ticks.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<u64> {
        let size = terminal.size()?;
        let mut state = AnimationState::new(size, self.train.total_width());

        while state.phase() != Phase::Departed {
            let train = &self.train;
            terminal.draw(|frame| {
                let area = frame.area();
                train.draw(
                    frame.buffer_mut(),
                    area,
                    state.offset(),
                    state.anchor_row(),
                    state.wheel_frame(),
                );
            })?;

            self.clock.wait_for_tick();
            state.advance();
        }

        terminal.clear()?;
        Ok(state.ticks())
    }
}
