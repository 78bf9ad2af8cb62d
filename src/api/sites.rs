//! Where each site publishes its daily feed.

use std::{fmt::Write, fs, path::Path};

use chrono::{Days, NaiveDate};
use serde::Deserialize;

use crate::{core::site::Site, prelude::*};

#[must_use]
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sites {
    southbury: Option<SiteFeed>,
    bridgeport: Option<SiteFeed>,
    torrington: Option<SiteFeed>,
}

impl Sites {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))?;
        let sites: Self =
            toml::from_str(&contents).with_context(|| format!("failed to parse `{}`", path.display()))?;
        info!("loaded the site feeds");
        Ok(sites)
    }

    pub fn get(&self, site: Site) -> Result<&SiteFeed> {
        let feed = match site {
            Site::Southbury => self.southbury.as_ref(),
            Site::Bridgeport => self.bridgeport.as_ref(),
            Site::Torrington => self.torrington.as_ref(),
        };
        feed.with_context(|| format!("no feed is configured for {site}"))
    }
}

#[must_use]
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteFeed {
    /// URL template with `{date}` and `{next_date}` placeholders.
    url: String,

    /// `chrono` format of the substituted dates.
    #[serde(default = "SiteFeed::default_date_format")]
    date_format: String,
}

impl SiteFeed {
    fn default_date_format() -> String {
        "%Y-%m-%d".to_owned()
    }

    /// The feed covers the window from `on` until the next day.
    pub fn url_on(&self, on: NaiveDate) -> Result<String> {
        let next_date = on
            .checked_add_days(Days::new(1))
            .with_context(|| format!("{on} is the last representable date"))?;
        Ok(self
            .url
            .replace("{date}", &self.format_date(on)?)
            .replace("{next_date}", &self.format_date(next_date)?))
    }

    fn format_date(&self, date: NaiveDate) -> Result<String> {
        let mut formatted = String::new();
        write!(formatted, "{}", date.format(&self.date_format))
            .with_context(|| format!("invalid date format `{}`", self.date_format))?;
        Ok(formatted)
    }
}
