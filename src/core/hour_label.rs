use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// How to read the feed's `12 am` label.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HourLabels {
    /// Read labels literally: `12 am` lands on hour 12, together with noon.
    #[default]
    Feed,

    /// Wall-clock reading: `12 am` is midnight, hour 0.
    Clock,
}

impl HourLabels {
    /// Parse a label like `9 pm` or `12 am` into an hour of the day, `0..=23`.
    pub fn parse(self, label: &str) -> Result<u32> {
        let (hour, suffix) =
            label.split_once(' ').with_context(|| format!("malformed hour label `{label}`"))?;
        let is_pm = if suffix.eq_ignore_ascii_case("pm") {
            true
        } else if suffix.eq_ignore_ascii_case("am") {
            false
        } else {
            bail!("unexpected suffix in hour label `{label}`");
        };
        ensure!(
            matches!(hour.len(), 1 | 2) && hour.bytes().all(|byte| byte.is_ascii_digit()),
            "unexpected hour in label `{label}`",
        );
        let value: u32 = hour.parse().with_context(|| format!("invalid hour label `{label}`"))?;
        ensure!((1..=12).contains(&value), "hour in label `{label}` is out of range");

        Ok(match (is_pm, value) {
            (false, 12) if self == Self::Clock => 0,
            (true, 12) | (false, _) => value,
            (true, _) => value + 12,
        })
    }
}
