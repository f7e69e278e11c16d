//! Per-pixel flicker randomness.
//!
//! Each pixel draws an independent multiplier every frame; sharing one draw
//! across the strip would make the whole thing pulse in lockstep instead of
//! flickering. The source is injected so tests can pin the multiplier while
//! production seeds from hardware entropy.

/// Lowest flicker multiplier, in percent.
pub const FLICKER_MIN_PERCENT: u8 = 80;

/// Highest flicker multiplier, in percent.
pub const FLICKER_MAX_PERCENT: u8 = 140;

/// Supplies flicker multipliers for the animation engine.
pub trait FlickerSource {
    /// Next multiplier, within `[FLICKER_MIN_PERCENT, FLICKER_MAX_PERCENT]`.
    fn flicker_percent(&mut self) -> u8;
}

/// Small seedable generator based on SplitMix-style integer mixing.
///
/// Not cryptographic, just cheap and well distributed enough that adjacent
/// pixels do not visibly correlate.
#[derive(Debug, Clone, Copy)]
pub struct SplitMix32 {
    state: u32,
}

impl SplitMix32 {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    const fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9e37_79b9);
        let mut z = self.state;
        z = (z ^ (z >> 16)).wrapping_mul(0x85eb_ca6b);
        z = (z ^ (z >> 13)).wrapping_mul(0xc2b2_ae35);
        z ^ (z >> 16)
    }
}

impl FlickerSource for SplitMix32 {
    #[allow(clippy::cast_possible_truncation)]
    fn flicker_percent(&mut self) -> u8 {
        let span = u32::from(FLICKER_MAX_PERCENT - FLICKER_MIN_PERCENT) + 1;
        FLICKER_MIN_PERCENT + (self.next() % span) as u8
    }
}
