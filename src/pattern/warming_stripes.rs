//! Climate warming stripes: a static gradient built from a palette-index
//! table, after Ed Hawkins' Show your Stripes visualization.

use crate::buffer::{BufferError, PixelBuffer};
use crate::color::Rgb;
use crate::gamma;
use crate::tables::{Palette, STRIPES};

/// Build the stripes gradient in the buffer at full strip length.
///
/// Every stripe level goes through the palette, then through gamma, so the
/// replayed frames need no per-tick correction. On strips longer than the
/// stripes table the remaining pixels stay dark.
pub fn load<const N: usize>(
    buffer: &mut PixelBuffer<N>,
    palette: &Palette,
) -> Result<(), BufferError> {
    buffer.resize(buffer.capacity())?;
    buffer.reset_cursor();
    for (slot, &level) in buffer.pixels_mut().iter_mut().zip(STRIPES.iter()) {
        let color = palette[level as usize];
        *slot = Rgb {
            r: gamma::correct(color.r),
            g: gamma::correct(color.g),
            b: gamma::correct(color.b),
        };
    }
    Ok(())
}
