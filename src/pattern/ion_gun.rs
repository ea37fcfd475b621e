//! Shooting purple ion blobs.

use crate::buffer::{BufferError, PixelBuffer};
use crate::color::Rgb;

/// Blob shape, tail first so the head fires away from the data-in end of
/// the strip.
const BLOB: [Rgb; 7] = [
    Rgb { r: 1, g: 0, b: 1 },
    Rgb { r: 2, g: 0, b: 3 },
    Rgb { r: 8, g: 0, b: 12 },
    Rgb { r: 24, g: 0, b: 32 },
    Rgb { r: 90, g: 0, b: 120 },
    Rgb { r: 230, g: 0, b: 255 },
    Rgb { r: 90, g: 0, b: 120 },
];

/// Buffer slots taken by one blob plus the dark gap trailing it. The
/// logical length shrinks to this span so the blob repeats down the strip.
pub const SPAN: usize = 24;

/// Load the blob into the front of the buffer and shrink it to one span.
pub fn load<const N: usize>(buffer: &mut PixelBuffer<N>) -> Result<(), BufferError> {
    buffer.resize(SPAN)?;
    for (index, slot) in buffer.pixels_mut().iter_mut().enumerate() {
        *slot = if index < BLOB.len() {
            BLOB[index]
        } else {
            Rgb::default()
        };
    }
    Ok(())
}
