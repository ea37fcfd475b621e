mod tests {
    use neostrip_controller::pattern::{CROSSFADE_STEPS, crossfade_step};

    fn distance(current: [u8; 3], target: [u8; 3]) -> u32 {
        current
            .iter()
            .zip(target.iter())
            .map(|(&c, &t)| u32::from(c.abs_diff(t)))
            .sum()
    }

    #[test]
    fn test_fade_to_black_arrives_exactly() {
        let start = [64u8, 32, 128];
        let target = [0u8, 0, 0];
        let mut current = start;

        let mut last_distance = distance(current, target);
        for _ in 0..CROSSFADE_STEPS {
            for channel in 0..3 {
                current[channel] =
                    crossfade_step(current[channel], start[channel], target[channel]);
            }
            let now = distance(current, target);
            assert!(now <= last_distance, "fade moved away from the target");
            last_distance = now;
        }
        assert_eq!(current, target);
    }

    #[test]
    fn test_fade_between_colors_closes_most_of_the_gap() {
        // Arbitrary endpoints do not land exactly (the fill snaps to the
        // target after the last step); the stepped approach must still get
        // within one sixteenth-rounding per channel.
        let start = [200u8, 10, 90];
        let target = [20u8, 250, 90];
        let mut current = start;

        for _ in 0..CROSSFADE_STEPS {
            for channel in 0..3 {
                current[channel] =
                    crossfade_step(current[channel], start[channel], target[channel]);
            }
        }
        for channel in 0..3 {
            assert!(u32::from(current[channel].abs_diff(target[channel])) < 16);
        }
    }

    #[test]
    fn test_identical_endpoints_hold_steady() {
        let mut value = 77u8;
        for _ in 0..CROSSFADE_STEPS {
            value = crossfade_step(value, 77, 77);
        }
        assert_eq!(value, 77);
    }
}
