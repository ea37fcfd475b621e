//! Random colour targets with a stepped crossfade between them.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use rand_core::RngCore;

use crate::color::{FillColor, Rgb};
use crate::strip::Strip;

/// Number of discrete steps per crossfade.
pub const CROSSFADE_STEPS: u8 = 16;

/// One crossfade step for a single channel: shed one sixteenth of the
/// starting value, gain one sixteenth of the target value.
///
/// Sixteen steps remove the start contribution entirely (up to the `>> 4`
/// remainder) while building up the target's, so the distance to the target
/// never grows; the caller snaps to the exact target after the last step.
#[inline]
pub const fn crossfade_step(current: u8, start: u8, target: u8) -> u8 {
    current.wrapping_sub(start >> 4).wrapping_add(target >> 4)
}

fn crossfade_color(current: FillColor, start: FillColor, target: FillColor) -> FillColor {
    FillColor {
        rgb: Rgb {
            r: crossfade_step(current.rgb.r, start.rgb.r, target.rgb.r),
            g: crossfade_step(current.rgb.g, start.rgb.g, target.rgb.g),
            b: crossfade_step(current.rgb.b, start.rgb.b, target.rgb.b),
        },
        white: crossfade_step(current.white, start.white, target.white),
    }
}

/// Draw a new target color, uniform over the full byte range per channel.
/// The white channel is left where it is.
pub fn pick_target<R: RngCore>(rng: &mut R, white: u8) -> FillColor {
    let mut bytes = [0u8; 3];
    rng.fill_bytes(&mut bytes);
    FillColor {
        rgb: Rgb {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        },
        white,
    }
}

/// Crossfade the whole strip from the current color to `target`, one flat
/// fill and one frame delay per step, finishing exactly on the target.
pub fn run<P: OutputPin, D: DelayNs>(
    strip: &mut Strip<P, D>,
    color: &mut FillColor,
    target: FillColor,
    count: usize,
    frame_delay: Duration,
) -> Result<(), P::Error> {
    let start = *color;
    for _ in 0..CROSSFADE_STEPS {
        *color = crossfade_color(*color, start, target);
        strip.fill(*color, count)?;
        strip.wait(frame_delay);
    }
    *color = target;
    strip.fill(*color, count)?;
    strip.wait(frame_delay);
    Ok(())
}
