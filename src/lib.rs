#![no_std]

pub mod animation;
pub mod clock;
pub mod color;
pub mod config;
pub mod flicker;
pub mod input;
pub mod sensor;
pub mod setpoint;
pub mod thermostat;

pub use animation::{AnimationState, FireAnimation};
pub use clock::{Millis, elapsed_ms};
pub use config::{ControlConfig, FireplaceConfig, PinAssignments, TimingConfig};
pub use flicker::{FlickerSource, SplitMix32};
pub use input::{Button, InputController, Pull, StepEvent};
pub use sensor::TemperatureFilter;
pub use setpoint::Setpoint;
pub use thermostat::{RelayOutput, Thermostat, decide};

pub use color::Rgb;
pub use embassy_time::Duration;

/// Abstract LED strip capability
///
/// Implement this trait over the actual strip driver; the animation engine
/// only ever calls these four methods and never touches the transmission
/// protocol underneath.
pub trait Strip {
    /// Number of addressable pixels.
    fn pixel_count(&self) -> u16;
    /// Stage one pixel color. Takes effect on the next `show`.
    fn set_pixel(&mut self, index: u16, color: Rgb);
    /// Set the global strip brightness.
    fn set_brightness(&mut self, brightness: u8);
    /// Flush staged pixels to the hardware.
    fn show(&mut self);
}
