//! Hysteresis thermostat control.
//!
//! The relay is driven with a two-sided dead zone centered on the target:
//! the heater turns on only once the smoothed temperature falls to
//! `target - hysteresis / 2` and off only once it rises to
//! `target + hysteresis / 2`. Inside the band the previous command is held,
//! so sensor noise near the setpoint cannot toggle the relay.

/// Relay capability supplied by the platform layer.
///
/// The thermostat writes exactly one boolean per tick; it never owns the
/// output pin itself.
pub trait RelayOutput {
    fn set_on(&mut self, on: bool);
}

/// Next relay command from the previous command and the smoothed reading.
///
/// Total over all finite inputs; no clamping or validation is performed
/// here, implausible readings are the sensor driver's problem.
pub fn decide(previous_on: bool, smoothed_temp: f32, target_temp: f32, hysteresis: f32) -> bool {
    let half_band = hysteresis / 2.0;
    if previous_on {
        smoothed_temp < target_temp + half_band
    } else {
        smoothed_temp <= target_temp - half_band
    }
}

/// Thermostat controller holding the previous relay command.
#[derive(Debug, Clone, Copy)]
pub struct Thermostat {
    hysteresis: f32,
    relay_on: bool,
}

impl Thermostat {
    /// Create a controller with the given band width. The relay starts off.
    pub const fn new(hysteresis: f32) -> Self {
        Self {
            hysteresis,
            relay_on: false,
        }
    }

    /// Current relay command.
    pub const fn is_on(&self) -> bool {
        self.relay_on
    }

    /// Run one control step and write the command to the relay.
    pub fn tick<R: RelayOutput>(
        &mut self,
        relay: &mut R,
        smoothed_temp: f32,
        target_temp: f32,
    ) -> bool {
        self.relay_on = decide(self.relay_on, smoothed_temp, target_temp, self.hysteresis);
        relay.set_on(self.relay_on);
        self.relay_on
    }
}
