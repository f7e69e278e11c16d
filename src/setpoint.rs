//! User-adjustable setpoint state.
//!
//! Owned by the control loop, mutated only by applying step events. The
//! clamping to valid ranges happens here, at the owner, not inside the
//! input controller.

use crate::config::ControlConfig;
use crate::input::StepEvent;

/// Target temperature, brightness and flame color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Setpoint {
    /// Degrees Celsius, within the configured target bounds.
    pub target_temperature: f32,
    /// Within the configured brightness bounds.
    pub target_brightness: u8,
    /// Warm-to-cool flame blend, 0-100.
    pub color_percent: u8,
}

impl Setpoint {
    pub const fn new(target_temperature: f32, target_brightness: u8, color_percent: u8) -> Self {
        Self {
            target_temperature,
            target_brightness,
            color_percent,
        }
    }

    /// Apply one step event, clamped to the configured ranges.
    pub fn apply(&mut self, event: StepEvent, control: &ControlConfig) {
        match event {
            StepEvent::TemperatureUp => {
                self.target_temperature = (self.target_temperature + control.temperature_step)
                    .min(control.max_target_temperature);
            }
            StepEvent::TemperatureDown => {
                self.target_temperature = (self.target_temperature - control.temperature_step)
                    .max(control.min_target_temperature);
            }
            StepEvent::BrightnessUp => {
                self.target_brightness = self
                    .target_brightness
                    .saturating_add(control.brightness_step)
                    .clamp(control.min_brightness, control.max_brightness);
            }
            StepEvent::BrightnessDown => {
                self.target_brightness = self
                    .target_brightness
                    .saturating_sub(control.brightness_step)
                    .clamp(control.min_brightness, control.max_brightness);
            }
            StepEvent::ColorUp => {
                self.color_percent = self
                    .color_percent
                    .saturating_add(control.color_step)
                    .min(100);
            }
            StepEvent::ColorDown => {
                self.color_percent = self.color_percent.saturating_sub(control.color_step);
            }
        }
    }
}
