mod tests {
    use core::convert::Infallible;
    use std::cell::RefCell;
    use std::rc::Rc;

    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::{ErrorType, OutputPin};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use neostrip_controller::gamma;
    use neostrip_controller::tables::{COOLER, STRIPES};
    use neostrip_controller::{
        BitSender, Button, ButtonInput, Controller, Mode, PixelFormat, Rgb, Strip, TickOutcome,
    };

    const LEDS: usize = 60;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Level {
        High,
        Low,
    }

    #[derive(Clone, Default)]
    struct RecordingPin {
        events: Rc<RefCell<Vec<Level>>>,
    }

    impl RecordingPin {
        fn new() -> (Self, Rc<RefCell<Vec<Level>>>) {
            let pin = Self::default();
            let log = Rc::clone(&pin.events);
            (pin, log)
        }
    }

    impl ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl OutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.events.borrow_mut().push(Level::Low);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.events.borrow_mut().push(Level::High);
            Ok(())
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    struct NoButtons;

    impl ButtonInput for NoButtons {
        fn poll(&mut self) -> Option<Button> {
            None
        }
    }

    /// Button held down permanently.
    struct Held(Button);

    impl ButtonInput for Held {
        fn poll(&mut self) -> Option<Button> {
            Some(self.0)
        }
    }

    /// Presses scripted per poll, then silence.
    struct Script {
        presses: Vec<Button>,
        next: usize,
    }

    impl Script {
        fn new(presses: &[Button]) -> Self {
            Self {
                presses: presses.to_vec(),
                next: 0,
            }
        }
    }

    impl ButtonInput for Script {
        fn poll(&mut self) -> Option<Button> {
            let press = self.presses.get(self.next).copied();
            self.next += 1;
            press
        }
    }

    fn decode_bytes(events: &[Level]) -> Vec<u8> {
        let mut bits = Vec::new();
        let mut i = 0;
        while i < events.len() && events[i] == Level::Low {
            i += 1;
        }
        while i < events.len() {
            assert_eq!(events[i], Level::High, "pulse must start high");
            i += 1;
            let mut lows = 0;
            while i < events.len() && events[i] == Level::Low {
                lows += 1;
                i += 1;
            }
            assert!((1..=2).contains(&lows), "pulse must end low");
            bits.push(u8::from(lows == 1));
        }
        assert_eq!(bits.len() % 8, 0, "bytes are eight pulses");
        bits.chunks(8)
            .map(|byte| byte.iter().fold(0u8, |acc, &bit| (acc << 1) | bit))
            .collect()
    }

    type TestController = Controller<RecordingPin, NoDelay, SmallRng, LEDS>;

    fn controller() -> (TestController, Rc<RefCell<Vec<Level>>>) {
        let (pin, log) = RecordingPin::new();
        let tx = BitSender::new(pin, PixelFormat::Grb).unwrap();
        let strip = Strip::new(tx, NoDelay);
        let controller = Controller::new(strip, SmallRng::seed_from_u64(99)).unwrap();
        (controller, log)
    }

    #[test]
    fn test_powers_on_blanked_with_indicator() {
        let (controller, log) = controller();
        assert_eq!(controller.mode(), Mode::Off);

        let bytes = decode_bytes(&log.borrow());
        assert_eq!(bytes.len(), LEDS * 3 + 3);
        assert!(bytes[..LEDS * 3].iter().all(|&b| b == 0));
        assert_eq!(&bytes[LEDS * 3..], &[32, 0, 0]);
    }

    #[test]
    fn test_too_short_strip_is_rejected() {
        let (pin, _log) = RecordingPin::new();
        let tx = BitSender::new(pin, PixelFormat::Grb).unwrap();
        let strip = Strip::new(tx, NoDelay);
        let result: Result<Controller<_, _, _, 16>, _> =
            Controller::new(strip, SmallRng::seed_from_u64(99));
        assert!(result.is_err());
    }

    #[test]
    fn test_mode_button_walks_the_full_cycle() {
        let (mut controller, _log) = controller();
        let mut buttons = Held(Button::ModeAdvance);

        let mut seen = Vec::new();
        let mut mode = controller.mode();
        for _ in 0..200 {
            controller.tick(&mut buttons).unwrap();
            if controller.mode() != mode {
                mode = controller.mode();
                seen.push(mode);
            }
            if seen.len() == 6 {
                break;
            }
        }
        assert_eq!(
            seen,
            [
                Mode::Rainbow,
                Mode::IonGun,
                Mode::WarmingStripes,
                Mode::Random,
                Mode::ColourPick,
                Mode::Off,
            ]
        );
    }

    #[test]
    fn test_mode_advance_enters_rainbow_and_streams_without_buffer() {
        let (mut controller, log) = controller();
        let mut buttons = Script::new(&[Button::ModeAdvance]);

        controller.tick(&mut buttons).unwrap();
        assert_eq!(controller.mode(), Mode::Rainbow);

        log.borrow_mut().clear();
        controller.tick(&mut buttons).unwrap();
        let first = decode_bytes(&log.borrow());

        log.borrow_mut().clear();
        controller.tick(&mut buttons).unwrap();
        let second = decode_bytes(&log.borrow());

        assert_eq!(first.len(), LEDS * 3);
        // Leading pixel of the first frame: green phase 0, red 60, blue 120.
        assert_eq!(&first[..3], &[0, 255, 0]);
        assert_ne!(first, second, "rainbow must move every tick");

        // The pixel buffer plays no part in the rainbow.
        assert_eq!(controller.buffer().len(), LEDS);
        assert!(
            controller
                .buffer()
                .pixels()
                .iter()
                .all(|&px| px == Rgb::default())
        );
    }

    #[test]
    fn test_rainbow_phases_stay_in_table_range() {
        let (mut controller, _log) = controller();
        controller.enter_mode(Mode::Rainbow).unwrap();

        let mut buttons = NoButtons;
        for _ in 0..400 {
            controller.tick(&mut buttons).unwrap();
            let (r, g, b) = controller.rainbow().phases();
            assert!(r < 180 && g < 180 && b < 180);
        }
    }

    #[test]
    fn test_ion_gun_entry_loads_blob_shape() {
        let (mut controller, _log) = controller();
        controller.enter_mode(Mode::IonGun).unwrap();

        let buffer = controller.buffer();
        assert_eq!(buffer.len(), 24);

        let expected = [
            Rgb::new(1, 0, 1),
            Rgb::new(2, 0, 3),
            Rgb::new(8, 0, 12),
            Rgb::new(24, 0, 32),
            Rgb::new(90, 0, 120),
            Rgb::new(230, 0, 255),
            Rgb::new(90, 0, 120),
        ];
        assert_eq!(&buffer.pixels()[..7], &expected);
        assert!(buffer.pixels()[7..].iter().all(|&px| px == Rgb::default()));
    }

    #[test]
    fn test_ion_gun_scrolls_one_pixel_per_tick() {
        let (mut controller, _log) = controller();
        controller.enter_mode(Mode::IonGun).unwrap();

        let mut buttons = NoButtons;
        controller.tick(&mut buttons).unwrap();
        assert_eq!(controller.buffer().cursor(), 23);
        controller.tick(&mut buttons).unwrap();
        assert_eq!(controller.buffer().cursor(), 22);
    }

    #[test]
    fn test_warming_stripes_frames_are_bit_identical() {
        let (mut controller, log) = controller();
        controller.enter_mode(Mode::WarmingStripes).unwrap();
        assert_eq!(controller.buffer().len(), LEDS);
        assert_eq!(controller.buffer().cursor(), 0);

        let mut buttons = NoButtons;
        log.borrow_mut().clear();
        controller.tick(&mut buttons).unwrap();
        let first = log.borrow().clone();

        log.borrow_mut().clear();
        controller.tick(&mut buttons).unwrap();
        let second = log.borrow().clone();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_warming_stripes_maps_palette_through_gamma() {
        let (mut controller, _log) = controller();
        controller.enter_mode(Mode::WarmingStripes).unwrap();

        for (pixel, &level) in controller.buffer().pixels().iter().zip(STRIPES.iter()) {
            let color = COOLER[level as usize];
            assert_eq!(pixel.r, gamma::correct(color.r));
            assert_eq!(pixel.g, gamma::correct(color.g));
            assert_eq!(pixel.b, gamma::correct(color.b));
        }
    }

    #[test]
    fn test_random_mode_fades_exactly_to_its_target() {
        let (mut controller, log) = controller();
        controller.enter_mode(Mode::Random).unwrap();

        let mut buttons = NoButtons;
        log.borrow_mut().clear();
        controller.tick(&mut buttons).unwrap();

        assert_eq!(controller.color(), controller.target());
        // Sixteen fade fills plus the final snap fill.
        assert_eq!(decode_bytes(&log.borrow()).len(), 17 * LEDS * 3);
    }

    #[test]
    fn test_colour_pick_bumps_channels() {
        let (mut controller, _log) = controller();
        controller.enter_mode(Mode::ColourPick).unwrap();

        // Entry sets the repeat countdown; the held button registers once
        // per tick after it expires.
        let mut buttons = Held(Button::Red);
        for _ in 0..26 {
            controller.tick(&mut buttons).unwrap();
        }
        assert_eq!(controller.color().rgb.r, 65);

        for _ in 0..4 {
            controller.tick(&mut buttons).unwrap();
        }
        assert_eq!(controller.color().rgb.r, 69);
        assert_eq!(controller.color().rgb.g, 32);
        assert_eq!(controller.color().rgb.b, 128);
    }

    #[test]
    fn test_channel_buttons_ignored_outside_colour_pick() {
        let (mut controller, _log) = controller();
        let before = controller.color();

        let mut buttons = Held(Button::Green);
        for _ in 0..5 {
            controller.tick(&mut buttons).unwrap();
        }
        assert_eq!(controller.color(), before);
        assert_eq!(controller.mode(), Mode::Off);
    }

    #[test]
    fn test_reset_button_requests_restart() {
        let (mut controller, _log) = controller();
        let mut buttons = Held(Button::Reset);
        assert_eq!(controller.tick(&mut buttons).unwrap(), TickOutcome::Restart);
    }

    #[test]
    fn test_mode_change_arms_the_repeat_delay() {
        let (mut controller, _log) = controller();
        let mut buttons = Held(Button::ModeAdvance);

        controller.tick(&mut buttons).unwrap();
        assert_eq!(controller.mode(), Mode::Rainbow);

        // The next sample only lands after 25 quiet ticks.
        for _ in 0..25 {
            controller.tick(&mut buttons).unwrap();
            assert_eq!(controller.mode(), Mode::Rainbow);
        }
        controller.tick(&mut buttons).unwrap();
        assert_eq!(controller.mode(), Mode::IonGun);
    }

    #[test]
    fn test_random_mode_keeps_the_repeat_delay_short() {
        let (mut controller, _log) = controller();
        controller.enter_mode(Mode::Random).unwrap();

        let mut buttons = Held(Button::ModeAdvance);
        controller.tick(&mut buttons).unwrap();
        assert_eq!(controller.mode(), Mode::Random);
        controller.tick(&mut buttons).unwrap();
        assert_eq!(controller.mode(), Mode::ColourPick);
    }
}
