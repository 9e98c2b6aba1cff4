pub mod types;

use types::{
    ClockDivider, ClockDivision, ClockSource, DutyResolution, MAX_COUNTER_TOP, PWM_BASE_CLOCK_HZ,
};

use crate::Error;

impl DutyResolution {
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Duty value meaning "always on".
    pub const fn max_duty(self) -> u32 {
        1 << self.bits()
    }

    /// 50 % duty.
    pub const fn half_duty(self) -> u32 {
        1 << (self.bits() - 1)
    }

    pub fn from_bits(bits: u8) -> Result<Self, Error> {
        use DutyResolution::*;
        let resolution = match bits {
            1 => Bits1,
            2 => Bits2,
            3 => Bits3,
            4 => Bits4,
            5 => Bits5,
            6 => Bits6,
            7 => Bits7,
            8 => Bits8,
            9 => Bits9,
            10 => Bits10,
            11 => Bits11,
            12 => Bits12,
            13 => Bits13,
            14 => Bits14,
            _ => return Err(Error::InvalidResolution(bits)),
        };
        Ok(resolution)
    }
}

impl ClockDivision {
    /// Ordered from the finest to the coarsest division.
    pub const ALL: [ClockDivision; 8] = [
        ClockDivision::Div1,
        ClockDivision::Div2,
        ClockDivision::Div4,
        ClockDivision::Div8,
        ClockDivision::Div16,
        ClockDivision::Div32,
        ClockDivision::Div64,
        ClockDivision::Div128,
    ];

    pub const fn divisor(self) -> u32 {
        1 << (self as u8)
    }

    /// Clock the PWM counter ticks at after this division.
    pub const fn clock_hz(self) -> u32 {
        PWM_BASE_CLOCK_HZ / self.divisor()
    }
}

impl ClockDivider {
    /// Finds the prescaler and counter top for `frequency_hz`.
    ///
    /// The counter top must hold at least `2^bits` ticks, otherwise the requested
    /// resolution would only exist on paper.
    pub fn solve(
        frequency_hz: u32,
        resolution: DutyResolution,
        clock: ClockSource,
    ) -> Result<Self, Error> {
        match clock {
            ClockSource::Fixed(division) => Self::with_division(frequency_hz, resolution, division),
            ClockSource::Auto => ClockDivision::ALL
                .iter()
                .find_map(|&division| Self::with_division(frequency_hz, resolution, division).ok())
                .ok_or(Error::FrequencyUnreachable {
                    frequency_hz,
                    resolution_bits: resolution.bits(),
                }),
        }
    }

    fn with_division(
        frequency_hz: u32,
        resolution: DutyResolution,
        division: ClockDivision,
    ) -> Result<Self, Error> {
        let unreachable = Error::FrequencyUnreachable {
            frequency_hz,
            resolution_bits: resolution.bits(),
        };
        if frequency_hz == 0 {
            return Err(unreachable);
        }

        let clock_hz = u64::from(division.clock_hz());
        let frequency_hz_wide = u64::from(frequency_hz);
        let counter_top = (clock_hz + frequency_hz_wide / 2) / frequency_hz_wide;

        if counter_top < u64::from(resolution.max_duty()) || counter_top > u64::from(MAX_COUNTER_TOP)
        {
            return Err(unreachable);
        }

        Ok(ClockDivider {
            division,
            counter_top: counter_top as u16,
        })
    }

    /// Frequency actually produced, rounded to the nearest Hz.
    pub fn frequency_hz(&self) -> u32 {
        let top = u32::from(self.counter_top);
        (self.division.clock_hz() + top / 2) / top
    }

    /// Converts a logical duty into counter ticks.
    pub fn duty_to_ticks(&self, duty: u32, resolution: DutyResolution) -> u16 {
        let ticks = (u64::from(duty) * u64::from(self.counter_top)) >> resolution.bits();
        ticks as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_duty_of_ten_bits_is_512() {
        assert_eq!(DutyResolution::Bits10.half_duty(), 512);
        assert_eq!(DutyResolution::Bits10.max_duty(), 1024);
    }

    #[test]
    fn resolution_from_bits_rejects_out_of_range() {
        assert_eq!(DutyResolution::from_bits(10), Ok(DutyResolution::Bits10));
        assert_eq!(DutyResolution::from_bits(0), Err(Error::InvalidResolution(0)));
        assert_eq!(DutyResolution::from_bits(15), Err(Error::InvalidResolution(15)));
    }

    #[test]
    fn auto_clock_picks_finest_division() {
        let divider = ClockDivider::solve(500, DutyResolution::Bits10, ClockSource::Auto).unwrap();
        assert_eq!(divider.division, ClockDivision::Div1);
        assert_eq!(divider.counter_top, 32000);
        assert_eq!(divider.frequency_hz(), 500);

        // 16 MHz / 100 Hz does not fit the counter until the clock is divided by 8.
        let divider = ClockDivider::solve(100, DutyResolution::Bits10, ClockSource::Auto).unwrap();
        assert_eq!(divider.division, ClockDivision::Div8);
        assert_eq!(divider.counter_top, 20000);
        assert_eq!(divider.frequency_hz(), 100);
    }

    #[test]
    fn fixed_clock_fails_when_counter_overflows() {
        let err = ClockDivider::solve(
            100,
            DutyResolution::Bits10,
            ClockSource::Fixed(ClockDivision::Div1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::FrequencyUnreachable {
                frequency_hz: 100,
                resolution_bits: 10
            }
        );
    }

    #[test]
    fn too_fast_for_resolution_is_unreachable() {
        // 16 MHz / 1024 = 15625 Hz is the ceiling for 10 bits.
        assert!(ClockDivider::solve(15_625, DutyResolution::Bits10, ClockSource::Auto).is_ok());
        assert!(ClockDivider::solve(16_000, DutyResolution::Bits10, ClockSource::Auto).is_err());
        assert!(ClockDivider::solve(16_000, DutyResolution::Bits8, ClockSource::Auto).is_ok());
    }

    #[test]
    fn too_slow_or_zero_is_unreachable() {
        assert!(ClockDivider::solve(0, DutyResolution::Bits10, ClockSource::Auto).is_err());
        // Div128 with a full counter gives roughly 3.8 Hz.
        assert!(ClockDivider::solve(3, DutyResolution::Bits10, ClockSource::Auto).is_err());
        assert!(ClockDivider::solve(4, DutyResolution::Bits10, ClockSource::Auto).is_ok());
    }

    #[test]
    fn duty_scales_onto_counter_top() {
        let divider = ClockDivider {
            division: ClockDivision::Div1,
            counter_top: 32000,
        };
        assert_eq!(divider.duty_to_ticks(512, DutyResolution::Bits10), 16000);
        assert_eq!(divider.duty_to_ticks(1024, DutyResolution::Bits10), 32000);
        assert_eq!(divider.duty_to_ticks(0, DutyResolution::Bits10), 0);
    }
}
