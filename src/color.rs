//! Flame color blending.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Per-channel multipliers applied to the flickered brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelWeights {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

/// Warm flame endpoint, selected at 0 %.
const WARM: ChannelWeights = ChannelWeights {
    red: 1.0,
    green: 0.7,
    blue: 0.25,
};

/// Cool flame endpoint, selected at 100 %.
const COOL: ChannelWeights = ChannelWeights {
    red: 0.5,
    green: 0.7,
    blue: 1.0,
};

/// Linear per-channel blend between the warm and cool endpoints.
///
/// `color_percent` above 100 is clamped rather than rejected.
pub fn blend_weights(color_percent: u8) -> ChannelWeights {
    let t = f32::from(color_percent.min(100)) / 100.0;
    ChannelWeights {
        red: WARM.red + (COOL.red - WARM.red) * t,
        green: WARM.green + (COOL.green - WARM.green) * t,
        blue: WARM.blue + (COOL.blue - WARM.blue) * t,
    }
}
