//! Flickering fire animation.
//!
//! One frame is rendered per eligible call: the base brightness eases toward
//! the target, then every pixel gets an independent random flicker
//! multiplier on top of the blended flame color. The strip is flushed once
//! per frame so the update lands as a single visual change.

use crate::Strip;
use crate::clock::{Millis, elapsed_ms};
use crate::color::{Rgb, blend_weights};
use crate::config::FireplaceConfig;
use crate::flicker::FlickerSource;

/// Brightness moves toward the target this much per frame. Small enough to
/// read as a fade at the 35 ms frame interval.
const EASE_STEP: u8 = 2;

/// Mutable animation state, created once at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationState {
    /// Strip brightness before flicker, eased toward the target.
    pub base_brightness: u8,
    /// Timestamp of the last rendered frame, for the frame-rate gate.
    pub last_frame_ms: Millis,
}

impl AnimationState {
    pub const fn new() -> Self {
        Self {
            base_brightness: 0,
            last_frame_ms: 0,
        }
    }
}

/// Fire animation engine.
///
/// Generic over the flicker source so tests can pin the multiplier.
#[derive(Debug)]
pub struct FireAnimation<R: FlickerSource> {
    frame_interval_ms: u32,
    min_brightness: u8,
    max_brightness: u8,
    rng: R,
}

impl<R: FlickerSource> FireAnimation<R> {
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(config: &FireplaceConfig, rng: R) -> Self {
        Self {
            frame_interval_ms: config.timing.animation_frame.as_millis() as u32,
            min_brightness: config.control.min_brightness,
            max_brightness: config.control.max_brightness,
            rng,
        }
    }

    /// Initialize the strip with a clamped brightness and flush it once.
    pub fn begin<S: Strip>(&self, strip: &mut S, initial_brightness: u8) {
        strip.set_brightness(self.clamp_brightness(initial_brightness));
        strip.show();
    }

    /// Render at most one frame.
    ///
    /// A no-op (state untouched, nothing written to the strip) when fewer
    /// than the configured frame interval has elapsed since the last frame.
    pub fn update<S: Strip>(
        &mut self,
        strip: &mut S,
        state: &mut AnimationState,
        target_brightness: u8,
        color_percent: u8,
        now_ms: Millis,
    ) {
        if elapsed_ms(now_ms, state.last_frame_ms) < self.frame_interval_ms {
            return;
        }
        state.last_frame_ms = now_ms;

        // Ease brightness toward the target to avoid abrupt jumps.
        if state.base_brightness < target_brightness {
            state.base_brightness =
                target_brightness.min(state.base_brightness.saturating_add(EASE_STEP));
        } else if state.base_brightness > target_brightness {
            state.base_brightness =
                target_brightness.max(state.base_brightness.saturating_sub(EASE_STEP));
        }
        strip.set_brightness(self.clamp_brightness(state.base_brightness));

        let weights = blend_weights(color_percent);
        for i in 0..strip.pixel_count() {
            let flicker = u32::from(self.rng.flicker_percent());
            let flickered = (u32::from(state.base_brightness) * flicker) / 100;
            strip.set_pixel(
                i,
                Rgb {
                    r: channel_value(flickered, weights.red),
                    g: channel_value(flickered, weights.green),
                    b: channel_value(flickered, weights.blue),
                },
            );
        }
        strip.show();
    }

    /// Clamp a brightness to the configured range.
    ///
    /// Zero stays zero instead of being lifted to the minimum: the minimum
    /// only floors values that are meant to be visible, full shutoff must
    /// remain reachable.
    fn clamp_brightness(&self, value: u8) -> u8 {
        if value == 0 {
            return 0;
        }
        value.clamp(self.min_brightness, self.max_brightness)
    }
}

/// Scale a flickered brightness by a channel weight and clamp to a valid
/// color byte.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn channel_value(flickered: u32, weight: f32) -> u8 {
    let value = (flickered as f32 * weight) as i32;
    value.clamp(0, 255) as u8
}
