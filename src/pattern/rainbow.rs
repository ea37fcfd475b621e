//! Colour cycling rainbow streamed straight to the strip.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::strip::Strip;
use crate::tables::SINE;

// Starting phases a third of the visible wave apart, so the three channels
// chase each other down the strip.
const INITIAL_RED_PHASE: u8 = 60;
const INITIAL_GREEN_PHASE: u8 = 0;
const INITIAL_BLUE_PHASE: u8 = 120;

#[allow(clippy::cast_possible_truncation)]
const PHASE_STEPS: u8 = SINE.len() as u8;

/// Rainbow generator state: one phase counter per channel.
///
/// Each pixel takes three sine look-ups at phases one step apart from its
/// neighbour; after a frame the base phases advance by one step, so the
/// whole pattern drifts down the strip. No pixel buffer involved.
#[derive(Debug, Clone)]
pub struct Rainbow {
    red: u8,
    green: u8,
    blue: u8,
}

impl Default for Rainbow {
    fn default() -> Self {
        Self {
            red: INITIAL_RED_PHASE,
            green: INITIAL_GREEN_PHASE,
            blue: INITIAL_BLUE_PHASE,
        }
    }
}

impl Rainbow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current channel phases, each in `[0, 180)`.
    pub const fn phases(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// Render one frame of `count` pixels and advance the base phases.
    pub fn render<P: OutputPin, D: DelayNs>(
        &mut self,
        strip: &mut Strip<P, D>,
        count: usize,
    ) -> Result<(), P::Error> {
        let (mut r, mut g, mut b) = self.phases();
        for _ in 0..count {
            strip.write_pixel(SINE[r as usize], SINE[g as usize], SINE[b as usize], 0)?;
            r = step(r);
            g = step(g);
            b = step(b);
        }
        self.red = step(self.red);
        self.green = step(self.green);
        self.blue = step(self.blue);
        Ok(())
    }
}

/// Advance a phase counter by one, wrapping at the table length.
const fn step(phase: u8) -> u8 {
    if phase + 1 == PHASE_STEPS { 0 } else { phase + 1 }
}
