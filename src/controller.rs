//! The tick loop: owns all device state and dispatches one handler per
//! operating mode.

use embassy_time::Duration;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use rand_core::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::buffer::{BufferError, PixelBuffer};
use crate::color::FillColor;
use crate::input::{Button, ButtonInput, MODE_CHANGE_REPEAT_TICKS, RANDOM_MODE_REPEAT_TICKS};
use crate::mode::Mode;
use crate::pattern::{Rainbow, colour_pick, ion_gun, random_fade, warming_stripes};
use crate::strip::Strip;
use crate::tables::{COOLER, Palette};

/// Delay between strip updates.
pub const FRAME_DELAY: Duration = Duration::from_millis(16);

/// Pause on each random colour before the next transition begins.
const RANDOM_HOLD: Duration = Duration::from_secs(1);

/// Colour shown when colour picking starts.
const INITIAL_COLOR: FillColor = FillColor::new(64, 32, 128);

/// Errors surfaced by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError<E> {
    /// Pattern load or sizing failure. Sizing is validated when the
    /// controller is built, never per tick.
    Buffer(BufferError),
    /// Propagated data-pin error.
    Pin(E),
}

impl<E> From<BufferError> for ControllerError<E> {
    fn from(err: BufferError) -> Self {
        Self::Buffer(err)
    }
}

/// What the board loop should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking.
    Continue,
    /// The reset button was pressed; restart the system. No state teardown
    /// happens here, reinitialization is the restart.
    Restart,
}

/// Device state and mode dispatch for a strip of `LEDS` pixels.
pub struct Controller<P, D, R, const LEDS: usize> {
    strip: Strip<P, D>,
    rng: R,
    buffer: PixelBuffer<LEDS>,
    mode: Mode,
    color: FillColor,
    target: FillColor,
    rainbow: Rainbow,
    palette: &'static Palette,
    button_delay: u8,
}

impl<P, D, R, const LEDS: usize> Controller<P, D, R, LEDS>
where
    P: OutputPin,
    D: DelayNs,
    R: RngCore,
{
    /// Build the controller and bring the strip to its idle state: blanked,
    /// with the power indicator pixel lit.
    ///
    /// Strips too short for the preloaded patterns are rejected here, so the
    /// tick loop never revisits sizing.
    pub fn new(strip: Strip<P, D>, rng: R) -> Result<Self, ControllerError<P::Error>> {
        if LEDS < ion_gun::SPAN {
            return Err(ControllerError::Buffer(BufferError::LengthExceedsCapacity));
        }
        let mut controller = Self {
            strip,
            rng,
            buffer: PixelBuffer::new(),
            mode: Mode::Off,
            color: INITIAL_COLOR,
            target: FillColor::default(),
            rainbow: Rainbow::new(),
            palette: &COOLER,
            button_delay: 0,
        };
        controller.strip.latch();
        controller
            .strip
            .blank_with_indicator(LEDS)
            .map_err(ControllerError::Pin)?;
        Ok(controller)
    }

    /// Use a different palette for the warming stripes display.
    #[must_use]
    pub fn with_palette(mut self, palette: &'static Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Active operating mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Current fill colour.
    pub const fn color(&self) -> FillColor {
        self.color
    }

    /// Target of the most recent crossfade.
    pub const fn target(&self) -> FillColor {
        self.target
    }

    /// The pattern pixel buffer.
    pub fn buffer(&self) -> &PixelBuffer<LEDS> {
        &self.buffer
    }

    /// Rainbow generator state.
    pub const fn rainbow(&self) -> &Rainbow {
        &self.rainbow
    }

    /// Run one tick of the active mode, then poll the buttons subject to
    /// the repeat-rate countdown. Buttons are only sampled after the frame's
    /// transmission has fully completed.
    pub fn tick<B: ButtonInput>(
        &mut self,
        buttons: &mut B,
    ) -> Result<TickOutcome, ControllerError<P::Error>> {
        match self.mode {
            Mode::Off => {
                // Strip was blanked on entry; keep the tick cadence for the
                // button countdown.
                self.strip.wait(FRAME_DELAY);
            }
            Mode::Rainbow => {
                self.rainbow
                    .render(&mut self.strip, LEDS)
                    .map_err(ControllerError::Pin)?;
                self.strip.wait(FRAME_DELAY);
            }
            Mode::IonGun => {
                self.strip
                    .write_scrolled(&mut self.buffer, LEDS, 1, self.color.white)
                    .map_err(ControllerError::Pin)?;
                self.strip.wait(FRAME_DELAY);
            }
            Mode::WarmingStripes => {
                self.strip
                    .write_scrolled(&mut self.buffer, LEDS, 0, self.color.white)
                    .map_err(ControllerError::Pin)?;
                self.strip.wait(FRAME_DELAY);
            }
            Mode::Random => {
                self.target = random_fade::pick_target(&mut self.rng, self.target.white);
                random_fade::run(
                    &mut self.strip,
                    &mut self.color,
                    self.target,
                    LEDS,
                    FRAME_DELAY,
                )
                .map_err(ControllerError::Pin)?;
                self.strip.wait(RANDOM_HOLD);
            }
            Mode::ColourPick => {
                colour_pick::render(&mut self.strip, self.color, LEDS)
                    .map_err(ControllerError::Pin)?;
                self.strip.wait(FRAME_DELAY);
            }
        }

        self.poll_buttons(buttons)
    }

    /// Switch modes and apply the new mode's entry effects.
    pub fn enter_mode(&mut self, mode: Mode) -> Result<(), ControllerError<P::Error>> {
        self.mode = mode;
        self.button_delay = if mode == Mode::Random {
            RANDOM_MODE_REPEAT_TICKS
        } else {
            MODE_CHANGE_REPEAT_TICKS
        };

        #[cfg(feature = "esp32-log")]
        println!("mode -> {}", mode.as_str());

        match mode {
            Mode::Off => {
                self.strip
                    .blank_with_indicator(LEDS)
                    .map_err(ControllerError::Pin)?;
            }
            Mode::IonGun => {
                ion_gun::load(&mut self.buffer)?;
                self.color.white = 0;
            }
            Mode::WarmingStripes => {
                warming_stripes::load(&mut self.buffer, self.palette)?;
            }
            Mode::Rainbow | Mode::Random | Mode::ColourPick => {}
        }
        Ok(())
    }

    fn poll_buttons<B: ButtonInput>(
        &mut self,
        buttons: &mut B,
    ) -> Result<TickOutcome, ControllerError<P::Error>> {
        if self.button_delay > 0 {
            self.button_delay -= 1;
            return Ok(TickOutcome::Continue);
        }
        let Some(button) = buttons.poll() else {
            return Ok(TickOutcome::Continue);
        };
        match button {
            Button::Reset => return Ok(TickOutcome::Restart),
            Button::ModeAdvance => self.enter_mode(self.mode.next())?,
            Button::Red | Button::Green | Button::Blue => {
                if self.mode == Mode::ColourPick {
                    colour_pick::bump_channel(&mut self.color, button);
                }
            }
        }
        Ok(TickOutcome::Continue)
    }
}
