pub const MIN_FREQUENCY_HZ: u32 = 100;
pub const MAX_FREQUENCY_HZ: u32 = 1000;
/// Time for one full low-high-low swing.
pub const OSCILLATION_PERIOD_MS: u32 = 5000;
pub const UPDATE_INTERVAL_MS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepConfig {
    pub min_hz: u32,
    pub max_hz: u32,
    pub period_ms: u32,
    /// How often the output frequency gets recomputed.
    pub update_interval_ms: u32,
}
