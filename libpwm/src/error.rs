use crate::timer::types::TimerNumber;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Duty resolution outside of what the counter can hold.
    InvalidResolution(u8),
    /// No clock division gives a counter top in range for this frequency and resolution.
    FrequencyUnreachable { frequency_hz: u32, resolution_bits: u8 },
    TimerNotConfigured,
    /// Channel was bound to a timer the controller doesn't own.
    TimerMismatch {
        expected: TimerNumber,
        found: TimerNumber,
    },
    InvalidChannel(u8),
    ChannelNotConfigured(u8),
    DutyOutOfRange { duty: u32, max: u32 },
    // Sweep configuration errors.
    InvalidSweepBounds,
    InvalidSweepPeriod,
}
