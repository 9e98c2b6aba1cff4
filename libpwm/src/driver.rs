use crate::{ChannelNumber, ClockDivider};

/// What a vendor PWM driver has to offer for one PWM instance.
///
/// Values are already validated and scaled by [`crate::PwmController`], so
/// implementors only forward them to the registers.
pub trait PwmDriver {
    /// Number of output pins bound to this instance.
    fn channel_count(&self) -> usize;

    fn apply_divider(&mut self, divider: ClockDivider);

    /// `ticks` is in counter units, `0..=divider.counter_top`.
    fn write_compare(&mut self, channel: ChannelNumber, ticks: u16);

    fn enable(&mut self);
}
