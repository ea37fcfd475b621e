//! Button input seam and repeat-rate policy.

/// Physical control buttons.
///
/// The three channel buttons act only while colour picking; elsewhere they
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Unconditional system restart.
    Reset,
    /// Advance to the next operating mode.
    ModeAdvance,
    /// Bump the red channel.
    Red,
    /// Bump the green channel.
    Green,
    /// Bump the blue channel.
    Blue,
}

/// Board-level button sampling.
///
/// Implementations read the active-low switch lines and report at most one
/// pressed button per poll, highest priority first in [`Button`] order.
pub trait ButtonInput {
    fn poll(&mut self) -> Option<Button>;
}

/// Ticks to skip button sampling after an ordinary mode change.
pub const MODE_CHANGE_REPEAT_TICKS: u8 = 25;

/// Ticks to skip after entering random mode. Its ticks run seconds long, so
/// a long repeat delay would make leaving the mode feel stuck.
pub const RANDOM_MODE_REPEAT_TICKS: u8 = 1;
