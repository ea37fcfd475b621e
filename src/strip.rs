//! Whole-strip fill strategies over the bit transmitter.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::buffer::PixelBuffer;
use crate::color::FillColor;
use crate::gamma;
use crate::transmit::{BitSender, PixelFormat};

/// Minimum low period for the strip to latch a transmitted frame.
pub const LATCH_GAP: Duration = Duration::from_micros(200);

/// Brightness of the single indicator pixel left lit by
/// [`Strip::blank_with_indicator`].
const INDICATOR_GREEN: u8 = 32;

/// Drives a full strip frame by frame.
///
/// Owns the byte transmitter and the busy-wait delay provider; everything
/// above this layer thinks in pixels and frames rather than pulses.
pub struct Strip<P, D> {
    tx: BitSender<P>,
    delay: D,
}

impl<P: OutputPin, D: DelayNs> Strip<P, D> {
    pub const fn new(tx: BitSender<P>, delay: D) -> Self {
        Self { tx, delay }
    }

    /// Strip layout of the underlying transmitter.
    pub const fn format(&self) -> PixelFormat {
        self.tx.format()
    }

    /// Send one pixel's channel values in wire order.
    pub fn write_pixel(&mut self, r: u8, g: u8, b: u8, white: u8) -> Result<(), P::Error> {
        self.tx.write_channels(r, g, b, white)
    }

    /// Fill `count` consecutive pixels with the same raw color values.
    pub fn fill(&mut self, color: FillColor, count: usize) -> Result<(), P::Error> {
        for _ in 0..count {
            self.tx
                .write_channels(color.rgb.r, color.rgb.g, color.rgb.b, color.white)?;
        }
        Ok(())
    }

    /// Fill `count` consecutive pixels, passing every channel through the
    /// gamma table first.
    pub fn gamma_fill(&mut self, color: FillColor, count: usize) -> Result<(), P::Error> {
        for _ in 0..count {
            self.tx.write_channels(
                gamma::correct(color.rgb.r),
                gamma::correct(color.rgb.g),
                gamma::correct(color.rgb.b),
                gamma::correct(color.white),
            )?;
        }
        Ok(())
    }

    /// Send `count` pixels sourced from the buffer at consecutive cursor
    /// positions, wrapping modulo its logical length, then move the cursor
    /// by `offset` for the next pass. White is a per-frame constant.
    pub fn write_scrolled<const N: usize>(
        &mut self,
        buffer: &mut PixelBuffer<N>,
        count: usize,
        offset: i16,
        white: u8,
    ) -> Result<(), P::Error> {
        let start = buffer.take_start();
        for step in 0..count {
            let px = buffer.get(start + step);
            self.tx.write_channels(px.r, px.g, px.b, white)?;
        }
        buffer.retreat_from(start, offset);
        Ok(())
    }

    /// Send the first `count` buffer slots in order, cursor untouched.
    pub fn write_sequence<const N: usize>(
        &mut self,
        buffer: &PixelBuffer<N>,
        count: usize,
        white: u8,
    ) -> Result<(), P::Error> {
        for index in 0..count {
            let px = buffer.get(index);
            self.tx.write_channels(px.r, px.g, px.b, white)?;
        }
        Ok(())
    }

    /// Blank every pixel, then leave a single dim green indicator lit on the
    /// first pixel as the idle/power-on marker.
    pub fn blank_with_indicator(&mut self, count: usize) -> Result<(), P::Error> {
        self.fill(FillColor::default(), count)?;
        self.latch();
        self.tx.write_channels(0, INDICATOR_GREEN, 0, 0)?;
        self.latch();
        Ok(())
    }

    /// Hold the line low long enough for the strip to apply the frame.
    pub fn latch(&mut self) {
        self.wait(LATCH_GAP);
    }

    /// Busy-wait between frames.
    #[allow(clippy::cast_possible_truncation)]
    pub fn wait(&mut self, duration: Duration) {
        self.delay.delay_us(duration.as_micros() as u32);
    }
}
