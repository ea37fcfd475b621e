use smart_leds::RGB8;

/// Pixel color value as stored in the pixel buffer.
pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Fill color for whole-strip writes: RGB plus the white channel.
///
/// The pixel buffer stores [`Rgb`] only; white rides along as a per-frame
/// constant and is emitted after blue on four-channel strips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillColor {
    pub rgb: Rgb,
    pub white: u8,
}

impl FillColor {
    /// Create a fill color with the white channel off.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: Rgb { r, g, b },
            white: 0,
        }
    }

    /// Set the white channel.
    #[must_use]
    pub const fn with_white(mut self, white: u8) -> Self {
        self.white = white;
        self
    }
}
