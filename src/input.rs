//! Button debouncing and press-and-hold repeat.
//!
//! Each physical button runs its own little state machine: a raw level must
//! hold still for the debounce delay before it becomes the debounced state,
//! a debounced press emits exactly one step event, and a press held past
//! the hold delay auto-repeats at a fixed rate until release. Bouncing
//! electrical input degrades to "no event this tick", never to a spurious
//! event.

use heapless::Vec;

use crate::clock::{Millis, elapsed_ms};
use crate::config::TimingConfig;

/// Discrete setpoint adjustment produced by a debounced press or repeat.
///
/// The magnitude lives in [`ControlConfig`](crate::config::ControlConfig);
/// the caller applies it to the owned setpoint and does the range clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    TemperatureUp,
    TemperatureDown,
    BrightnessUp,
    BrightnessDown,
    ColorUp,
    ColorDown,
}

/// Button wiring. Pull-up inputs read low when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    Up,
    Down,
}

/// Debounce and repeat timings resolved to clock milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct ButtonTimings {
    pub debounce_ms: u32,
    pub hold_repeat_delay_ms: u32,
    pub hold_repeat_rate_ms: u32,
}

impl From<&TimingConfig> for ButtonTimings {
    #[allow(clippy::cast_possible_truncation)]
    fn from(timing: &TimingConfig) -> Self {
        Self {
            debounce_ms: timing.debounce.as_millis() as u32,
            hold_repeat_delay_ms: timing.hold_repeat_delay.as_millis() as u32,
            hold_repeat_rate_ms: timing.hold_repeat_rate.as_millis() as u32,
        }
    }
}

/// Per-button debounce and repeat state.
#[derive(Debug, Clone, Copy)]
struct ButtonState {
    /// Most recent raw level, in logical pressed form.
    last_raw: bool,
    /// Debounced level.
    stable: bool,
    /// When the raw level last changed; anchors the debounce window.
    last_change_ms: Millis,
    /// Whether auto-repeat is active.
    is_held: bool,
    /// Deadline anchor for hold entry and for the next repeat.
    next_repeat_ms: Millis,
}

impl ButtonState {
    const fn released() -> Self {
        Self {
            last_raw: false,
            stable: false,
            last_change_ms: 0,
            is_held: false,
            next_repeat_ms: 0,
        }
    }
}

/// One physical button bound to a step event.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    event: StepEvent,
    pull: Pull,
    state: ButtonState,
}

impl Button {
    pub const fn new(event: StepEvent, pull: Pull) -> Self {
        Self {
            event,
            pull,
            state: ButtonState::released(),
        }
    }

    /// Feed one raw sample and return the event emitted this tick, if any.
    pub fn poll(
        &mut self,
        raw_level: bool,
        now_ms: Millis,
        timings: &ButtonTimings,
    ) -> Option<StepEvent> {
        let pressed = match self.pull {
            Pull::Up => !raw_level,
            Pull::Down => raw_level,
        };

        if pressed != self.state.last_raw {
            // Raw edge: restart the debounce window.
            self.state.last_raw = pressed;
            self.state.last_change_ms = now_ms;
        } else if pressed != self.state.stable
            && elapsed_ms(now_ms, self.state.last_change_ms) >= timings.debounce_ms
        {
            self.state.stable = pressed;
            self.state.is_held = false;
            if pressed {
                self.state.next_repeat_ms = now_ms;
                return Some(self.event);
            }
            // Release accepted: timers reset, no event.
            return None;
        }

        if self.state.stable && pressed {
            if !self.state.is_held
                && elapsed_ms(now_ms, self.state.next_repeat_ms) >= timings.hold_repeat_delay_ms
            {
                self.state.is_held = true;
                self.state.next_repeat_ms = self
                    .state
                    .next_repeat_ms
                    .wrapping_add(timings.hold_repeat_delay_ms);
            }
            if self.state.is_held
                && elapsed_ms(now_ms, self.state.next_repeat_ms) >= timings.hold_repeat_rate_ms
            {
                self.state.next_repeat_ms = self
                    .state
                    .next_repeat_ms
                    .wrapping_add(timings.hold_repeat_rate_ms);
                return Some(self.event);
            }
        }
        None
    }
}

/// Debounces a fixed set of buttons against one shared timing config.
#[derive(Debug)]
pub struct InputController<const N: usize> {
    buttons: [Button; N],
    timings: ButtonTimings,
}

impl<const N: usize> InputController<N> {
    pub fn new(buttons: [Button; N], timing: &TimingConfig) -> Self {
        Self {
            buttons,
            timings: ButtonTimings::from(timing),
        }
    }

    /// Feed one raw sample per button and collect the events emitted this
    /// tick, in button order.
    pub fn poll(&mut self, raw_levels: [bool; N], now_ms: Millis) -> Vec<StepEvent, N> {
        let mut events = Vec::new();
        for (button, raw_level) in self.buttons.iter_mut().zip(raw_levels) {
            if let Some(event) = button.poll(raw_level, now_ms, &self.timings) {
                // At most one event per button per tick, so this never fills.
                let _ = events.push(event);
            }
        }
        events
    }
}

impl InputController<4> {
    /// Standard four-button fireplace panel: temperature up/down,
    /// brightness up/down.
    pub fn fireplace(timing: &TimingConfig, pull: Pull) -> Self {
        Self::new(
            [
                Button::new(StepEvent::TemperatureUp, pull),
                Button::new(StepEvent::TemperatureDown, pull),
                Button::new(StepEvent::BrightnessUp, pull),
                Button::new(StepEvent::BrightnessDown, pull),
            ],
            timing,
        )
    }
}
