use heapless::LinearMap;

use crate::{
    ChannelConfig, ChannelNumber, ClockDivider, DutyResolution, Error, PwmDriver, TimerConfig,
};

const MAX_CHANNELS: usize = 4;

#[derive(Clone, Copy)]
struct ChannelState {
    /// Written by `set_duty`, not yet on the pin.
    pending: u32,
    /// What the hardware currently outputs.
    latched: u32,
}

#[derive(Clone, Copy)]
struct TimerState {
    config: TimerConfig,
    divider: ClockDivider,
}

/// Timer and channel bookkeeping for one PWM instance.
///
/// Duties are kept in logical units of the configured [`DutyResolution`] and
/// rescaled to counter ticks whenever the timer changes.
pub struct PwmController<D: PwmDriver> {
    driver: D,
    timer: Option<TimerState>,
    channels: LinearMap<ChannelNumber, ChannelState, MAX_CHANNELS>,
}

impl<D: PwmDriver> PwmController<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            timer: None,
            channels: LinearMap::new(),
        }
    }

    /// Solves the clock divider for `config` and applies it.
    ///
    /// Channels configured earlier keep their duty fraction. Once channels are
    /// bound, the timer number can no longer change.
    pub fn configure_timer(&mut self, config: TimerConfig) -> Result<ClockDivider, Error> {
        if let Some(timer) = self.timer {
            if timer.config.timer != config.timer && !self.channels.is_empty() {
                return Err(Error::TimerMismatch {
                    expected: timer.config.timer,
                    found: config.timer,
                });
            }
        }

        let divider = ClockDivider::solve(config.frequency_hz, config.resolution, config.clock)?;
        self.driver.apply_divider(divider);
        self.timer = Some(TimerState { config, divider });

        for (channel, state) in self.channels.iter() {
            let ticks = divider.duty_to_ticks(state.latched, config.resolution);
            self.driver.write_compare(*channel, ticks);
        }

        Ok(divider)
    }

    pub fn configure_channel(&mut self, config: ChannelConfig) -> Result<(), Error> {
        let timer = self.timer.ok_or(Error::TimerNotConfigured)?;
        if config.timer != timer.config.timer {
            return Err(Error::TimerMismatch {
                expected: timer.config.timer,
                found: config.timer,
            });
        }
        if config.channel.index() >= self.driver.channel_count() {
            return Err(Error::InvalidChannel(config.channel.index() as u8));
        }
        check_duty(config.duty, timer.config.resolution)?;

        let state = ChannelState {
            pending: config.duty,
            latched: config.duty,
        };
        self.channels
            .insert(config.channel, state)
            .map_err(|_| Error::InvalidChannel(config.channel.index() as u8))?;

        // Compare writes only reach the pin on an enabled instance.
        self.driver.enable();
        let ticks = timer
            .divider
            .duty_to_ticks(config.duty, timer.config.resolution);
        self.driver.write_compare(config.channel, ticks);
        Ok(())
    }

    /// Stages a new duty. Nothing changes on the pin until [`Self::update_duty`].
    pub fn set_duty(&mut self, channel: ChannelNumber, duty: u32) -> Result<(), Error> {
        let timer = self.timer.ok_or(Error::TimerNotConfigured)?;
        check_duty(duty, timer.config.resolution)?;
        let state = self
            .channels
            .get_mut(&channel)
            .ok_or(Error::ChannelNotConfigured(channel.index() as u8))?;
        state.pending = duty;
        Ok(())
    }

    pub fn update_duty(&mut self, channel: ChannelNumber) -> Result<(), Error> {
        let timer = self.timer.ok_or(Error::TimerNotConfigured)?;
        let state = self
            .channels
            .get_mut(&channel)
            .ok_or(Error::ChannelNotConfigured(channel.index() as u8))?;
        state.latched = state.pending;

        let ticks = timer
            .divider
            .duty_to_ticks(state.latched, timer.config.resolution);
        self.driver.write_compare(channel, ticks);
        Ok(())
    }

    pub fn write_duty(&mut self, channel: ChannelNumber, duty: u32) -> Result<(), Error> {
        self.set_duty(channel, duty)?;
        self.update_duty(channel)
    }

    /// Duty currently on the pin, in logical units.
    pub fn duty(&self, channel: ChannelNumber) -> Result<u32, Error> {
        self.channels
            .get(&channel)
            .map(|state| state.latched)
            .ok_or(Error::ChannelNotConfigured(channel.index() as u8))
    }

    /// Retunes the timer, keeping resolution and clock source.
    pub fn set_frequency(&mut self, frequency_hz: u32) -> Result<ClockDivider, Error> {
        let timer = self.timer.ok_or(Error::TimerNotConfigured)?;
        self.configure_timer(TimerConfig {
            frequency_hz,
            ..timer.config
        })
    }

    pub fn frequency_hz(&self) -> Option<u32> {
        self.timer.map(|timer| timer.divider.frequency_hz())
    }

    pub fn resolution(&self) -> Option<DutyResolution> {
        self.timer.map(|timer| timer.config.resolution)
    }

    pub fn max_duty(&self) -> Option<u32> {
        self.resolution().map(DutyResolution::max_duty)
    }

    /// Hands the driver back. Dropping it usually disconnects the pins.
    pub fn release(self) -> D {
        self.driver
    }
}

fn check_duty(duty: u32, resolution: DutyResolution) -> Result<(), Error> {
    let max = resolution.max_duty();
    if duty > max {
        return Err(Error::DutyOutOfRange { duty, max });
    }
    Ok(())
}
