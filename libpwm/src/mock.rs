use std::vec::Vec;

use crate::{ChannelNumber, ClockDivider, PwmDriver};

/// Records everything the controller pushes to the hardware.
pub struct MockDriver {
    pub channels: usize,
    pub divider: Option<ClockDivider>,
    pub compare: [u16; 4],
    pub enabled: bool,
    pub compare_writes: Vec<(ChannelNumber, u16)>,
}

impl MockDriver {
    pub fn new(channels: usize) -> Self {
        Self {
            channels,
            divider: None,
            compare: [0; 4],
            enabled: false,
            compare_writes: Vec::new(),
        }
    }
}

impl PwmDriver for MockDriver {
    fn channel_count(&self) -> usize {
        self.channels
    }

    fn apply_divider(&mut self, divider: ClockDivider) {
        self.divider = Some(divider);
    }

    fn write_compare(&mut self, channel: ChannelNumber, ticks: u16) {
        self.compare[channel.index()] = ticks;
        self.compare_writes.push((channel, ticks));
    }

    fn enable(&mut self) {
        self.enabled = true;
    }
}
