use crate::timer::types::TimerNumber;

/// Compare channel within one PWM instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelNumber {
    Channel0,
    Channel1,
    Channel2,
    Channel3,
}

impl ChannelNumber {
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelConfig {
    pub channel: ChannelNumber,
    /// Timer driving this channel.
    pub timer: TimerNumber,
    /// Initial duty, in units of the timer's resolution.
    pub duty: u32,
}
