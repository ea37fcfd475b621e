#![no_std]

pub mod buffer;
pub mod color;
pub mod controller;
pub mod gamma;
pub mod input;
pub mod mode;
pub mod pattern;
pub mod strip;
pub mod tables;
pub mod transmit;

pub use buffer::{BufferError, PixelBuffer};
pub use color::{FillColor, Rgb, rgb_from_u32};
pub use controller::{Controller, ControllerError, FRAME_DELAY, TickOutcome};
pub use input::{Button, ButtonInput};
pub use mode::Mode;
pub use strip::Strip;
pub use transmit::{BitSender, PixelFormat};

pub use embassy_time::Duration;
