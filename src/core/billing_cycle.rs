use std::{
    fmt::{Display, Formatter},
    ops::Add,
};

use chrono::NaiveDate;

use crate::{
    api::FeedSource,
    core::{
        daily::{DailyResult, Normalizer},
        site::Site,
    },
    prelude::*,
    quantity::energy::KilowattHours,
};

/// Inclusive range of days to bill for one site.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BillingCycle {
    pub site: Site,
    start: NaiveDate,
    end: NaiveDate,
}

impl BillingCycle {
    pub fn try_new(site: Site, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        ensure!(start <= end, "the end date {end} is before the start date {start}");
        Ok(Self { site, start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub fn n_days(&self) -> usize {
        self.dates().count()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }

    /// Fetch and normalize every day in order, stopping at the first failure.
    ///
    /// Nothing is reported for an aborted cycle, not even the days that succeeded.
    #[instrument(skip_all, fields(site = %self.site, start = %self.start, end = %self.end))]
    pub fn run(
        &self,
        source: &impl FeedSource,
        normalizer: Normalizer,
        mut on_progress: impl FnMut(Progress),
    ) -> Outcome {
        let n_days = self.n_days();
        info!(n_days, "running the billing cycle…");
        let totals = self.dates().enumerate().try_fold(
            CycleTotals::default(),
            |totals, (index, date)| -> Result<CycleTotals, DayFailure> {
                let daily = source
                    .fetch(self.site, date)
                    .and_then(|body| normalizer.normalize(self.site, date, &body))
                    .map_err(|error| DayFailure { date, error })?;
                on_progress(Progress { n_processed: index + 1, n_days });
                Ok(totals + daily)
            },
        );
        match totals {
            Ok(totals) => {
                info!(off_peak = %totals.off_peak, on_peak = %totals.on_peak, "completed");
                Outcome::Completed(totals)
            }
            Err(failure) => {
                warn!(date = %failure.date, error = %format!("{:#}", failure.error), "aborted");
                Outcome::Aborted(failure)
            }
        }
    }
}

/// Running sums over the processed days.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleTotals {
    pub off_peak: KilowattHours,
    pub on_peak: KilowattHours,
}

impl CycleTotals {
    pub fn total(self) -> KilowattHours {
        self.off_peak + self.on_peak
    }

    /// Percentage of on-peak generation, unless nothing was generated at all.
    #[must_use]
    pub fn on_peak_percentage(self) -> Option<f64> {
        let total = self.total();
        (!total.is_zero()).then(|| self.on_peak / total * 100.0)
    }
}

impl Add<DailyResult> for CycleTotals {
    type Output = Self;

    fn add(self, daily: DailyResult) -> Self::Output {
        Self { off_peak: self.off_peak + daily.off_peak, on_peak: self.on_peak + daily.on_peak }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Progress {
    pub n_processed: usize,
    pub n_days: usize,
}

#[derive(Debug)]
pub struct DayFailure {
    pub date: NaiveDate,
    pub error: Error,
}

impl Display for DayFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "The following error occurred while trying to pull data from {}:",
            self.date.format("%m/%d/%Y"),
        )?;
        write!(f, "{:#}", self.error)
    }
}

#[must_use]
#[derive(Debug)]
pub enum Outcome {
    Completed(CycleTotals),
    Aborted(DayFailure),
}
