//! Low-level single-wire byte transmitter.
//!
//! Strip pixels latch a byte as eight pulses, most-significant bit first.
//! Both bit values start with the line high and end with it low; the bit is
//! encoded in the *width* of the high window. A zero drops the line low
//! again immediately after the rising edge, a one holds it high through the
//! shift before dropping. The resulting T0H/T1H/T0L/T1L windows come from
//! compiled instruction timing at the target clock, so this module performs
//! no waiting calls of its own and must run without preemption. Meeting the
//! datasheet windows is a clock-configuration concern, not a runtime check.

use embedded_hal::digital::OutputPin;

/// Channel layout of the attached strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// Green, red, blue. 24 bits per pixel.
    #[default]
    Grb,
    /// Green, red, blue, white. 32 bits per pixel.
    Grbw,
}

impl PixelFormat {
    /// Number of channel bytes sent per pixel.
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Grb => 3,
            Self::Grbw => 4,
        }
    }
}

/// Shifts color bytes out of a single data pin.
pub struct BitSender<P> {
    pin: P,
    format: PixelFormat,
}

impl<P: OutputPin> BitSender<P> {
    /// Create a sender for the given data pin and strip layout.
    ///
    /// The pin is driven low so the strip sees a defined idle level.
    pub fn new(mut pin: P, format: PixelFormat) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(Self { pin, format })
    }

    /// Strip layout this sender was configured for.
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Shift 8 bits of color data to the strip, most-significant bit first.
    pub fn write_byte(&mut self, mut value: u8) -> Result<(), P::Error> {
        for _ in 0..8 {
            self.pin.set_high()?;
            if value & 0x80 == 0 {
                // Close the high window early: a short pulse encodes zero.
                self.pin.set_low()?;
            }
            value <<= 1;
            self.pin.set_low()?;
        }
        Ok(())
    }

    /// Send one pixel in wire order: green, red, blue, then white on
    /// four-channel strips.
    pub fn write_channels(&mut self, r: u8, g: u8, b: u8, white: u8) -> Result<(), P::Error> {
        self.write_byte(g)?;
        self.write_byte(r)?;
        self.write_byte(b)?;
        if self.format == PixelFormat::Grbw {
            self.write_byte(white)?;
        }
        Ok(())
    }
}
