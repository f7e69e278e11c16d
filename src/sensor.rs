//! Temperature smoothing.
//!
//! Raw readings come from the sensor driver once per tick (thermistor ADC
//! conversion or 1-Wire read, both outside this crate). Digital sensors in
//! particular jitter by a few tenths of a degree between reads, which is
//! enough to chatter a tight hysteresis band. An exponential moving average
//! suppresses that noise while still tracking the slow room trend.

/// Exponential moving average over raw temperature samples.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureFilter {
    alpha: f32,
    smoothed: Option<f32>,
}

impl TemperatureFilter {
    /// Create a filter with the given smoothing coefficient.
    ///
    /// `alpha` is the weight of the newest sample; values near 0 smooth
    /// harder. It is clamped to `[0, 1]`.
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            smoothed: None,
        }
    }

    /// Fold in one raw sample and return the new smoothed value.
    ///
    /// The first sample seeds the filter directly so startup does not spend
    /// minutes converging from zero.
    pub fn update(&mut self, raw: f32) -> f32 {
        let next = match self.smoothed {
            Some(prev) => prev + self.alpha * (raw - prev),
            None => raw,
        };
        self.smoothed = Some(next);
        next
    }

    /// Last smoothed value, if any sample has been seen.
    pub const fn value(&self) -> Option<f32> {
        self.smoothed
    }
}
