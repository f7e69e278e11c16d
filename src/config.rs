//! Build-time configuration for the fireplace core.
//!
//! All of these values are fixed at integration time and passed by reference
//! into the component constructors. There is no process-wide mutable state.
//!
//! Two presets are provided, matching the two hardware revisions this core
//! has shipped on: an analog thermistor build and a 1-Wire digital sensor
//! build. They differ in sensor pin, LED count, hysteresis band and
//! brightness step.

use embassy_time::Duration;

/// GPIO assignments for the board.
///
/// The core never touches pins itself; these are carried for the platform
/// layer that owns the actual drivers.
#[derive(Debug, Clone, Copy)]
pub struct PinAssignments {
    pub relay: u8,
    pub temperature_sensor: u8,
    pub neo_pixel: u8,
    pub button_temp_up: u8,
    pub button_temp_down: u8,
    pub button_bright_up: u8,
    pub button_bright_down: u8,
}

/// Setpoint steps, bounds and control loop tuning.
#[derive(Debug, Clone, Copy)]
pub struct ControlConfig {
    /// Degrees Celsius added or removed per temperature step event.
    pub temperature_step: f32,
    pub min_target_temperature: f32,
    pub max_target_temperature: f32,
    /// Full width of the thermostat dead zone, in degrees Celsius.
    pub hysteresis: f32,
    /// EMA coefficient for sensor smoothing (weight of the newest sample).
    pub smooth_alpha: f32,
    pub brightness_step: u8,
    pub min_brightness: u8,
    pub max_brightness: u8,
    /// Percent points added or removed per color step event.
    pub color_step: u8,
}

/// Debounce, hold-repeat and animation frame timings.
#[derive(Debug, Clone, Copy)]
pub struct TimingConfig {
    /// How long a raw button level must hold still before it is accepted.
    pub debounce: Duration,
    /// Held time past the initial press before auto-repeat starts.
    pub hold_repeat_delay: Duration,
    /// Interval between auto-repeat events.
    pub hold_repeat_rate: Duration,
    /// Minimum interval between rendered animation frames.
    pub animation_frame: Duration,
}

/// Aggregate configuration consumed by the component constructors.
#[derive(Debug, Clone, Copy)]
pub struct FireplaceConfig {
    pub pins: PinAssignments,
    pub led_count: u16,
    pub control: ControlConfig,
    pub timing: TimingConfig,
}

const TIMING: TimingConfig = TimingConfig {
    debounce: Duration::from_millis(50),
    hold_repeat_delay: Duration::from_millis(400),
    hold_repeat_rate: Duration::from_millis(150),
    animation_frame: Duration::from_millis(35),
};

impl FireplaceConfig {
    /// Preset for the analog thermistor build (14-pixel strip, tight band).
    pub const fn thermistor() -> Self {
        Self {
            pins: PinAssignments {
                relay: 5,
                temperature_sensor: 34,
                neo_pixel: 18,
                button_temp_up: 25,
                button_temp_down: 26,
                button_bright_up: 27,
                button_bright_down: 14,
            },
            led_count: 14,
            control: ControlConfig {
                temperature_step: 0.5,
                min_target_temperature: 15.0,
                max_target_temperature: 30.0,
                hysteresis: 0.5,
                smooth_alpha: 0.05,
                brightness_step: 5,
                min_brightness: 10,
                max_brightness: 255,
                color_step: 5,
            },
            timing: TIMING,
        }
    }

    /// Preset for the 1-Wire digital sensor build (10-pixel strip, wide band).
    pub const fn one_wire() -> Self {
        Self {
            pins: PinAssignments {
                relay: 5,
                temperature_sensor: 4,
                neo_pixel: 18,
                button_temp_up: 25,
                button_temp_down: 26,
                button_bright_up: 27,
                button_bright_down: 14,
            },
            led_count: 10,
            control: ControlConfig {
                temperature_step: 0.5,
                min_target_temperature: 15.0,
                max_target_temperature: 30.0,
                hysteresis: 2.0,
                smooth_alpha: 0.05,
                brightness_step: 15,
                min_brightness: 10,
                max_brightness: 255,
                color_step: 5,
            },
            timing: TIMING,
        }
    }
}

impl Default for FireplaceConfig {
    fn default() -> Self {
        Self::one_wire()
    }
}
