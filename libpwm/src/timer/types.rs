/// Every PWM instance on the nRF52 runs from the 16 MHz peripheral clock.
pub const PWM_BASE_CLOCK_HZ: u32 = 16_000_000;
/// COUNTERTOP is a 15 bit register.
pub const MAX_COUNTER_TOP: u16 = 32767;

/// One timer per PWM instance (PWM0..PWM2 on the nRF52832).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerNumber {
    Timer0,
    Timer1,
    Timer2,
}

/// Logical duty resolution. A duty of `2^bits` is 100 %.
///
/// Capped at 14 bits since the counter top has to hold at least `2^bits` ticks.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DutyResolution {
    Bits1 = 1,
    Bits2 = 2,
    Bits3 = 3,
    Bits4 = 4,
    Bits5 = 5,
    Bits6 = 6,
    Bits7 = 7,
    Bits8 = 8,
    Bits9 = 9,
    Bits10 = 10,
    Bits11 = 11,
    Bits12 = 12,
    Bits13 = 13,
    Bits14 = 14,
}

/// Prescaler applied to [`PWM_BASE_CLOCK_HZ`]. The discriminant is the power of two.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockDivision {
    Div1 = 0,
    Div2 = 1,
    Div4 = 2,
    Div8 = 3,
    Div16 = 4,
    Div32 = 5,
    Div64 = 6,
    Div128 = 7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockSource {
    /// Smallest division that reaches the requested frequency.
    #[default]
    Auto,
    Fixed(ClockDivision),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    pub timer: TimerNumber,
    pub resolution: DutyResolution,
    pub frequency_hz: u32,
    pub clock: ClockSource,
}

/// Solved hardware settings for one timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockDivider {
    pub division: ClockDivision,
    pub counter_top: u16,
}
