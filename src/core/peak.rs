use std::ops::RangeInclusive;

use chrono::Weekday;

/// Billing category of an hourly reading.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, derive_more::Display)]
pub enum Peak {
    #[display("on-peak")]
    On,

    #[display("off-peak")]
    Off,
}

impl Peak {
    /// Weekday on-peak hours in standard time.
    pub const WINTER_HOURS: RangeInclusive<u32> = 12..=20;

    /// Weekday on-peak hours in daylight-saving time, one hour later.
    pub const SUMMER_HOURS: RangeInclusive<u32> = 13..=21;

    #[must_use]
    pub fn classify(weekday: Weekday, hour: u32, is_daylight_saving: bool) -> Self {
        if matches!(weekday, Weekday::Sat | Weekday::Sun) {
            return Self::Off;
        }
        let on_peak_hours =
            if is_daylight_saving { Self::SUMMER_HOURS } else { Self::WINTER_HOURS };
        if on_peak_hours.contains(&hour) { Self::On } else { Self::Off }
    }
}
