//! Manual colour selection with the channel bump buttons.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::color::FillColor;
use crate::input::Button;
use crate::strip::Strip;

/// Show the picked colour: gamma-corrected flat fill of the whole strip.
pub fn render<P: OutputPin, D: DelayNs>(
    strip: &mut Strip<P, D>,
    color: FillColor,
    count: usize,
) -> Result<(), P::Error> {
    strip.gamma_fill(color, count)
}

/// Bump the channel belonging to `button` by one, wrapping at 255.
pub fn bump_channel(color: &mut FillColor, button: Button) {
    match button {
        Button::Red => color.rgb.r = color.rgb.r.wrapping_add(1),
        Button::Green => color.rgb.g = color.rgb.g.wrapping_add(1),
        Button::Blue => color.rgb.b = color.rgb.b.wrapping_add(1),
        Button::Reset | Button::ModeAdvance => {}
    }
}
