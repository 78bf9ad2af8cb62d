use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::{
    core::{
        daylight_saving::is_daylight_saving,
        feed::{DailyTotalFeed, HourlyFeed},
        hour_label::HourLabels,
        peak::Peak,
        site::{Schema, Site},
    },
    prelude::*,
    quantity::energy::KilowattHours,
};

/// Energy produced on a single day.
///
/// For daily-total sites the whole day lands in [`DailyResult::off_peak`] and
/// [`DailyResult::on_peak`] stays zero.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DailyResult {
    pub off_peak: KilowattHours,
    pub on_peak: KilowattHours,
}

impl DailyResult {
    pub const fn daily_total(total: KilowattHours) -> Self {
        Self { off_peak: total, on_peak: KilowattHours::zero() }
    }

    fn add(mut self, peak: Peak, energy: KilowattHours) -> Self {
        match peak {
            Peak::On => self.on_peak += energy,
            Peak::Off => self.off_peak += energy,
        }
        self
    }
}

/// Turns a raw daily feed into on-peak and off-peak energy.
#[derive(Copy, Clone, Debug, Default)]
pub struct Normalizer {
    pub hour_labels: HourLabels,
}

impl Normalizer {
    pub const fn new(hour_labels: HourLabels) -> Self {
        Self { hour_labels }
    }

    #[instrument(skip_all, fields(site = %site, date = %date))]
    pub fn normalize(self, site: Site, date: NaiveDate, body: &str) -> Result<DailyResult> {
        let result = match site.schema() {
            Schema::HourlySplit => {
                let feed: HourlyFeed =
                    serde_json::from_str(body).context("failed to deserialize the hourly feed")?;
                self.split(date, &feed)?
            }
            Schema::DailyTotal => {
                let feed: DailyTotalFeed = serde_json::from_str(body)
                    .context("failed to deserialize the daily total feed")?;
                DailyResult::daily_total(feed.total()?)
            }
        };
        debug!(off_peak = %result.off_peak, on_peak = %result.on_peak, "normalized");
        Ok(result)
    }

    /// Readings summed per hour of the day.
    pub fn hourly(self, feed: &HourlyFeed) -> Result<BTreeMap<u32, KilowattHours>> {
        let mut hourly = BTreeMap::new();
        for (hour, energy) in feed.readings(self.hour_labels)? {
            *hourly.entry(hour).or_insert_with(KilowattHours::zero) += energy;
        }
        Ok(hourly)
    }

    fn split(self, date: NaiveDate, feed: &HourlyFeed) -> Result<DailyResult> {
        let is_daylight_saving = is_daylight_saving(date);
        Ok(self.hourly(feed)?.into_iter().fold(DailyResult::default(), |result, (hour, energy)| {
            result.add(Peak::classify(date.weekday(), hour, is_daylight_saving), energy)
        }))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn hourly_body(readings: &[(&str, &str)]) -> String {
        let categories: Vec<_> =
            readings.iter().map(|(label, _)| serde_json::json!({ "label": label })).collect();
        let data: Vec<_> =
            readings.iter().map(|(_, value)| serde_json::json!({ "value": value })).collect();
        serde_json::json!({
            "categories": [{ "category": categories }],
            "dataset": [{ "data": data }],
        })
        .to_string()
    }

    /// Wednesday in July: daylight-saving time.
    #[test]
    fn test_summer_weekday() -> Result {
        let body =
            hourly_body(&[("10 am", "5.0"), ("1 pm", "10.0"), ("2 pm", "20.0"), ("10 pm", "3.0")]);
        let date = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        let result = Normalizer::default().normalize(Site::Southbury, date, &body)?;
        assert_abs_diff_eq!(result.on_peak.0, 30.0);
        assert_abs_diff_eq!(result.off_peak.0, 8.0);
        Ok(())
    }

    /// Wednesday in January: standard time, on-peak from noon through 8 pm.
    #[test]
    fn test_winter_weekday() -> Result {
        let body = hourly_body(&[("11 am", "1.0"), ("12 pm", "2.0"), ("8 pm", "4.0"), ("9 pm", "8.0")]);
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let result = Normalizer::default().normalize(Site::Bridgeport, date, &body)?;
        assert_abs_diff_eq!(result.on_peak.0, 6.0);
        assert_abs_diff_eq!(result.off_peak.0, 9.0);
        Ok(())
    }

    #[test]
    fn test_weekend() -> Result {
        let body = hourly_body(&[("1 pm", "10.0"), ("2 pm", "20.0")]);
        let date = NaiveDate::from_ymd_opt(2024, 7, 13).unwrap();
        let result = Normalizer::default().normalize(Site::Southbury, date, &body)?;
        assert_eq!(result.on_peak, KilowattHours::zero());
        assert_abs_diff_eq!(result.off_peak.0, 30.0);
        Ok(())
    }

    #[test]
    fn test_repeated_hours_are_summed() -> Result {
        let body = hourly_body(&[("12 am", "1.5"), ("12 pm", "2.5"), ("1 pm", "")]);
        let feed: HourlyFeed = serde_json::from_str(&body)?;
        let hourly = Normalizer::default().hourly(&feed)?;
        assert_eq!(hourly.len(), 2);
        assert_abs_diff_eq!(hourly[&12].0, 4.0);
        assert_eq!(hourly[&13], KilowattHours::zero());
        Ok(())
    }

    #[test]
    fn test_clock_labels_move_midnight() -> Result {
        let body = hourly_body(&[("12 am", "1.5"), ("12 pm", "2.5")]);
        let feed: HourlyFeed = serde_json::from_str(&body)?;
        let hourly = Normalizer::new(HourLabels::Clock).hourly(&feed)?;
        assert_abs_diff_eq!(hourly[&0].0, 1.5);
        assert_abs_diff_eq!(hourly[&12].0, 2.5);
        Ok(())
    }

    #[test]
    fn test_daily_total_site_ignores_season_and_weekday() -> Result {
        let body = r#"{"dataset": [{"data": [{"value": "1"}, {"value": "42.5"}]}]}"#;
        for date in [
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 13).unwrap(),
        ] {
            let result = Normalizer::default().normalize(Site::Torrington, date, body)?;
            assert_eq!(result, DailyResult::daily_total(KilowattHours(42.5)));
        }
        Ok(())
    }

    #[test]
    fn test_daily_total_site_empty_value() -> Result {
        let body = r#"{"dataset": [{"data": [{"value": ""}, {"value": ""}]}]}"#;
        let date = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        let result = Normalizer::default().normalize(Site::Torrington, date, body)?;
        assert_eq!(result, DailyResult::default());
        Ok(())
    }

    #[test]
    fn test_wrong_schema_fails() {
        let body = r#"{"dataset": [{"data": [{"value": "1"}, {"value": "42.5"}]}]}"#;
        let date = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        assert!(Normalizer::default().normalize(Site::Southbury, date, body).is_err());
    }
}
