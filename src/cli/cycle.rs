use chrono::NaiveDate;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    api::FeedSource,
    cli::{date::parse_date, feed::FeedArgs},
    core::{
        billing_cycle::{BillingCycle, Outcome},
        daily::Normalizer,
        site::Site,
        summary::Summary,
    },
    prelude::*,
};

#[derive(Parser)]
pub struct CycleArgs {
    #[clap(long, value_enum, env = "AUTOBILL_SITE")]
    site: Site,

    /// First day of the billing cycle, MM/DD/YYYY.
    #[clap(long, value_parser = parse_date)]
    start: NaiveDate,

    /// Last day of the billing cycle, MM/DD/YYYY, inclusive.
    #[clap(long, value_parser = parse_date)]
    end: NaiveDate,

    #[clap(flatten)]
    feed: FeedArgs,
}

impl CycleArgs {
    pub fn run(self) -> Result {
        let cycle = BillingCycle::try_new(self.site, self.start, self.end)?;
        let api = self.feed.try_new_api()?;
        match calculate(&cycle, &api, self.feed.normalizer())? {
            Outcome::Completed(totals) => {
                println!("{}", Summary { site: cycle.site, totals });
                Ok(())
            }
            Outcome::Aborted(failure) => Err(failure.error.context(format!(
                "the billing cycle was aborted on {}",
                failure.date.format("%m/%d/%Y"),
            ))),
        }
    }
}

/// Run the cycle while drawing its progress on stderr.
pub fn calculate(
    cycle: &BillingCycle,
    source: &impl FeedSource,
    normalizer: Normalizer,
) -> Result<Outcome> {
    info!(site = %cycle.site, start = %cycle.start(), end = %cycle.end(), "calculating…");
    let progress_bar = ProgressBar::new(cycle.n_days() as u64).with_style(
        ProgressStyle::with_template("Progress: |{bar:30}| {pos}/{len}")?.progress_chars("■■ "),
    );
    let outcome = cycle.run(source, normalizer, |progress| {
        progress_bar.set_position(progress.n_processed as u64);
    });
    progress_bar.finish();
    Ok(outcome)
}
