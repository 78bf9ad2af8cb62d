use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use clap::{Parser, crate_version};
use itertools::Itertools;

use crate::{
    cli::{
        cycle::calculate,
        date::{DateInputError, parse_date},
        feed::FeedArgs,
    },
    core::{
        billing_cycle::{BillingCycle, Outcome},
        site::Site,
        summary::Summary,
    },
    prelude::*,
};

#[derive(Parser)]
pub struct PromptArgs {
    #[clap(flatten)]
    feed: FeedArgs,
}

impl PromptArgs {
    pub fn run(self) -> Result {
        let api = self.feed.try_new_api()?;
        let normalizer = self.feed.normalizer();
        Prompt::new(io::stdin().lock(), io::stdout().lock())
            .run(|cycle| calculate(cycle, &api, normalizer))
    }
}

/// Interactive session: re-prompts on invalid input until the input is closed.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(mut self, mut calculate: impl FnMut(&BillingCycle) -> Result<Outcome>) -> Result {
        writeln!(self.output, "Welcome to Autobill v{}", crate_version!())?;
        writeln!(
            self.output,
            "Continue to automatically calculate the energy output of the solar sites\n",
        )?;
        loop {
            let Some(cycle) = self.read_cycle()? else {
                break;
            };
            writeln!(self.output, "\nCalculating...")?;
            self.output.flush()?;
            match calculate(&cycle)? {
                Outcome::Completed(totals) => {
                    writeln!(self.output, "\n{}", Summary { site: cycle.site, totals })?;
                }
                Outcome::Aborted(failure) => {
                    writeln!(self.output, "\n{failure}")?;
                }
            }
            if self.read_line("\nPress ENTER to run another calculation")?.is_none() {
                break;
            }
            writeln!(self.output)?;
        }
        info!("the input is closed");
        Ok(())
    }

    fn read_cycle(&mut self) -> Result<Option<BillingCycle>> {
        let Some(site) = self.read_site()? else {
            return Ok(None);
        };
        writeln!(self.output)?;
        let Some(start) = self.read_date("Billing cycle start date (MM/DD/YYYY) >> ", None)? else {
            return Ok(None);
        };
        let Some(end) = self.read_date("Billing cycle end date (MM/DD/YYYY) >> ", Some(start))?
        else {
            return Ok(None);
        };
        Ok(Some(BillingCycle::try_new(site, start, end)?))
    }

    fn read_site(&mut self) -> Result<Option<Site>> {
        writeln!(self.output, "Site IDs are as follows:")?;
        let menu = Site::ALL.iter().map(|site| format!("{site}: {}", site.id())).join(", ");
        writeln!(self.output, "{menu}")?;
        loop {
            let Some(line) = self.read_line("Site ID to calculate >> ")? else {
                return Ok(None);
            };
            if let Some(site) = line.trim().parse::<u8>().ok().and_then(Site::from_id) {
                return Ok(Some(site));
            }
            writeln!(self.output, "Please enter a valid site ID")?;
        }
    }

    fn read_date(&mut self, prompt: &str, after: Option<NaiveDate>) -> Result<Option<NaiveDate>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            let message = match parse_date(line.trim_end_matches(['\r', '\n'])) {
                Ok(date) if after.is_some_and(|after| date < after) => {
                    "Please ensure the end date is after the start date"
                }
                Ok(date) => return Ok(Some(date)),
                Err(DateInputError::Malformed) => "Please enter a valid date",
                Err(DateInputError::YearOutOfRange) => {
                    "Please enter a date between 1 CE and 9999 CE"
                }
            };
            writeln!(self.output, "{message}")?;
        }
    }

    /// Read a line, or `None` at the end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }
}
