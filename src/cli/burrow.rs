use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::{
    api::FeedSource,
    cli::{date::parse_date, feed::FeedArgs},
    core::{
        daylight_saving::{DaylightSaving, is_daylight_saving},
        feed::{DailyTotalFeed, HourlyFeed},
        site::{Schema, Site},
    },
    prelude::*,
    tables::{build_daily_total_table, build_hourly_table},
};

#[derive(Parser)]
pub struct BurrowArgs {
    #[command(subcommand)]
    command: BurrowCommand,
}

impl BurrowArgs {
    pub fn run(self) -> Result {
        match self.command {
            BurrowCommand::DaylightSaving(args) => args.run(),
            BurrowCommand::Day(args) => args.run(),
        }
    }
}

#[derive(Subcommand)]
pub enum BurrowCommand {
    /// Show the daylight-saving period of a year.
    DaylightSaving(BurrowDaylightSavingArgs),

    /// Fetch a single day and show how it is billed.
    Day(BurrowDayArgs),
}

#[derive(Parser)]
pub struct BurrowDaylightSavingArgs {
    #[clap(long)]
    year: i32,
}

impl BurrowDaylightSavingArgs {
    fn run(self) -> Result {
        let period = DaylightSaving::try_for_year(self.year)?;
        println!("Daylight saving starts on {} (inclusive)", period.start.format("%A, %m/%d/%Y"));
        println!("Daylight saving ends on {} (exclusive)", period.end.format("%A, %m/%d/%Y"));
        Ok(())
    }
}

#[derive(Parser)]
pub struct BurrowDayArgs {
    #[clap(long, value_enum, env = "AUTOBILL_SITE")]
    site: Site,

    /// MM/DD/YYYY.
    #[clap(long, value_parser = parse_date)]
    date: NaiveDate,

    #[clap(flatten)]
    feed: FeedArgs,
}

impl BurrowDayArgs {
    #[instrument(skip_all, fields(site = %self.site, date = %self.date))]
    fn run(self) -> Result {
        let body = self.feed.try_new_api()?.fetch(self.site, self.date)?;
        let table = match self.site.schema() {
            Schema::HourlySplit => {
                let feed: HourlyFeed = serde_json::from_str(&body)?;
                let hourly = self.feed.normalizer().hourly(&feed)?;
                build_hourly_table(self.date, &hourly, is_daylight_saving(self.date))
            }
            Schema::DailyTotal => {
                let feed: DailyTotalFeed = serde_json::from_str(&body)?;
                build_daily_total_table(self.date, feed.total()?)
            }
        };
        println!("{table}");
        Ok(())
    }
}
