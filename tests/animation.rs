mod tests {
    use fireplace_core::color::blend_weights;
    use fireplace_core::{
        AnimationState, FireAnimation, FireplaceConfig, FlickerSource, Rgb, SplitMix32, Strip,
    };

    const FRAME_MS: u32 = 35;

    struct FakeStrip {
        pixels: [Rgb; 10],
        brightness: u8,
        shows: u32,
    }

    impl FakeStrip {
        fn new() -> Self {
            Self {
                pixels: [Rgb::default(); 10],
                brightness: 0,
                shows: 0,
            }
        }
    }

    impl Strip for FakeStrip {
        fn pixel_count(&self) -> u16 {
            10
        }

        fn set_pixel(&mut self, index: u16, color: Rgb) {
            self.pixels[usize::from(index)] = color;
        }

        fn set_brightness(&mut self, brightness: u8) {
            self.brightness = brightness;
        }

        fn show(&mut self) {
            self.shows += 1;
        }
    }

    /// Pins every flicker draw to one multiplier.
    struct FixedFlicker(u8);

    impl FlickerSource for FixedFlicker {
        fn flicker_percent(&mut self) -> u8 {
            self.0
        }
    }

    fn engine(flicker: u8) -> FireAnimation<FixedFlicker> {
        FireAnimation::new(&FireplaceConfig::one_wire(), FixedFlicker(flicker))
    }

    #[test]
    fn test_begin_clamps_and_flushes_once() {
        let mut strip = FakeStrip::new();
        let animation = engine(100);

        // Below the configured minimum of 10, but nonzero: floored to 10.
        animation.begin(&mut strip, 5);
        assert_eq!(strip.brightness, 10);
        assert_eq!(strip.shows, 1);
    }

    #[test]
    fn test_zero_brightness_means_shutoff() {
        let mut strip = FakeStrip::new();
        let animation = engine(100);

        // Zero bypasses the minimum floor entirely.
        animation.begin(&mut strip, 0);
        assert_eq!(strip.brightness, 0);
    }

    #[test]
    fn test_easing_converges_monotonically() {
        let mut strip = FakeStrip::new();
        let mut animation = engine(100);
        let mut state = AnimationState::new();

        for frame in 1..=60u8 {
            animation.update(&mut strip, &mut state, 100, 0, u32::from(frame) * FRAME_MS);
            let expected = frame.saturating_mul(2).min(100);
            assert_eq!(state.base_brightness, expected);
        }
    }

    #[test]
    fn test_easing_idempotent_at_target() {
        let mut strip = FakeStrip::new();
        let mut animation = engine(100);
        let mut state = AnimationState {
            base_brightness: 100,
            last_frame_ms: 0,
        };

        for frame in 1..=5u32 {
            animation.update(&mut strip, &mut state, 100, 0, frame * FRAME_MS);
            assert_eq!(state.base_brightness, 100);
        }
    }

    #[test]
    fn test_easing_never_overshoots_downward() {
        let mut strip = FakeStrip::new();
        let mut animation = engine(100);
        let mut state = AnimationState {
            base_brightness: 3,
            last_frame_ms: 0,
        };

        animation.update(&mut strip, &mut state, 2, 0, FRAME_MS);
        assert_eq!(state.base_brightness, 2);
    }

    #[test]
    fn test_frame_gate_skips_early_calls() {
        let mut strip = FakeStrip::new();
        let mut animation = engine(100);
        let mut state = AnimationState::new();

        animation.update(&mut strip, &mut state, 100, 0, FRAME_MS);
        assert_eq!(strip.shows, 1);
        assert_eq!(state.last_frame_ms, FRAME_MS);

        // Second call inside the interval: no render, state untouched.
        animation.update(&mut strip, &mut state, 100, 0, FRAME_MS + 10);
        assert_eq!(strip.shows, 1);
        assert_eq!(state.last_frame_ms, FRAME_MS);
        assert_eq!(state.base_brightness, 2);

        animation.update(&mut strip, &mut state, 100, 0, 2 * FRAME_MS);
        assert_eq!(strip.shows, 2);
    }

    #[test]
    fn test_channels_clamped_at_extremes() {
        // Max brightness, max flicker, warm color: red saturates at 255.
        let mut strip = FakeStrip::new();
        let mut animation = engine(140);
        let mut state = AnimationState {
            base_brightness: 255,
            last_frame_ms: 0,
        };

        animation.update(&mut strip, &mut state, 255, 0, FRAME_MS);
        for pixel in &strip.pixels {
            assert_eq!(*pixel, Rgb { r: 255, g: 249, b: 89 });
        }
    }

    #[test]
    fn test_cool_color_at_min_flicker() {
        let mut strip = FakeStrip::new();
        let mut animation = engine(80);
        let mut state = AnimationState {
            base_brightness: 255,
            last_frame_ms: 0,
        };

        animation.update(&mut strip, &mut state, 255, 100, FRAME_MS);
        for pixel in &strip.pixels {
            assert_eq!(*pixel, Rgb { r: 102, g: 142, b: 204 });
        }
    }

    #[test]
    fn test_blend_weight_endpoints() {
        let warm = blend_weights(0);
        assert_eq!((warm.red, warm.green, warm.blue), (1.0, 0.7, 0.25));

        let cool = blend_weights(100);
        assert_eq!((cool.red, cool.green, cool.blue), (0.5, 0.7, 1.0));

        let mid = blend_weights(50);
        assert_eq!((mid.red, mid.green, mid.blue), (0.75, 0.7, 0.625));

        // Out-of-range percent clamps to the cool endpoint.
        assert_eq!(blend_weights(200), blend_weights(100));
    }

    #[test]
    fn test_splitmix_stays_in_flicker_range() {
        let mut rng = SplitMix32::new(0x1234_5678);
        for _ in 0..10_000 {
            let value = rng.flicker_percent();
            assert!((80..=140).contains(&value));
        }
    }

    #[test]
    fn test_splitmix_is_seed_deterministic() {
        let mut a = SplitMix32::new(42);
        let mut b = SplitMix32::new(42);
        for _ in 0..100 {
            assert_eq!(a.flicker_percent(), b.flicker_percent());
        }
    }
}
