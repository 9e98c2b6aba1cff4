pub mod types;

use core::f32::consts::TAU;

use micromath::F32Ext;

use types::{
    SweepConfig, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ, OSCILLATION_PERIOD_MS, UPDATE_INTERVAL_MS,
};

use crate::Error;

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_hz: MIN_FREQUENCY_HZ,
            max_hz: MAX_FREQUENCY_HZ,
            period_ms: OSCILLATION_PERIOD_MS,
            update_interval_ms: UPDATE_INTERVAL_MS,
        }
    }
}

impl SweepConfig {
    pub fn verify(self) -> Result<Self, Error> {
        if self.min_hz == 0 || self.min_hz > self.max_hz {
            return Err(Error::InvalidSweepBounds);
        }
        if self.period_ms == 0 || self.update_interval_ms == 0 {
            return Err(Error::InvalidSweepPeriod);
        }

        Ok(self)
    }

    /// Centre of the sweep. Rounds up when `min_hz + max_hz` is odd, same as [`Self::frequency_at`].
    pub fn midpoint_hz(&self) -> u32 {
        let span = self.max_hz.saturating_sub(self.min_hz);
        self.min_hz + span / 2 + span % 2
    }

    /// Output frequency `elapsed_ms` after the sweep started.
    ///
    /// A sine of the elapsed time, mapped from [-1, 1] onto [min_hz, max_hz].
    /// Time is folded into one period first so precision doesn't decay as the
    /// uptime grows.
    ///
    /// Expects a config that passed [`Self::verify`]. With `min_hz >= max_hz`
    /// the output holds at `min_hz`.
    pub fn frequency_at(&self, elapsed_ms: u64) -> u32 {
        if self.min_hz >= self.max_hz || self.period_ms == 0 {
            return self.min_hz;
        }

        let phase_ms = elapsed_ms % u64::from(self.period_ms);
        let angle = TAU * (phase_ms as f32) / (self.period_ms as f32);
        let half_span = (self.max_hz - self.min_hz) as f32 / 2.0;
        // Explicit trait calls, so host builds run the same approximation as the target.
        let offset = F32Ext::round(half_span * F32Ext::sin(angle)) as i64;

        let hz = i64::from(self.midpoint_hz()) + offset;
        hz.clamp(i64::from(self.min_hz), i64::from(self.max_hz)) as u32
    }
}
