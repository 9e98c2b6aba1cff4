#![cfg_attr(not(test), no_std)]

mod channel;
mod controller;
mod driver;
mod error;
pub mod sweep;
pub mod timer;

#[cfg(test)]
mod mock;

pub use channel::{ChannelConfig, ChannelNumber};
pub use controller::PwmController;
pub use driver::PwmDriver;
pub use error::Error;
pub use sweep::types::SweepConfig;
pub use timer::types::{
    ClockDivider, ClockDivision, ClockSource, DutyResolution, TimerConfig, TimerNumber,
};
