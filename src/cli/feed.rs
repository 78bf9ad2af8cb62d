use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::{
    api::{sites::Sites, solrenview},
    core::{daily::Normalizer, hour_label::HourLabels},
    prelude::*,
};

#[derive(Parser)]
pub struct FeedArgs {
    /// TOML file with the feed URL of every site.
    #[clap(long = "sites", default_value = "sites.toml", env = "AUTOBILL_SITES")]
    pub sites_path: PathBuf,

    /// Timeout of a single day's request, for example: `10s`.
    #[clap(
        long = "fetch-timeout",
        default_value = "10s",
        value_parser = humantime::parse_duration,
        env = "AUTOBILL_FETCH_TIMEOUT",
    )]
    pub fetch_timeout: Duration,

    /// How to read the feed's `12 am` label.
    #[clap(long, value_enum, default_value_t, env = "AUTOBILL_HOUR_LABELS")]
    pub hour_labels: HourLabels,
}

impl FeedArgs {
    pub fn try_new_api(&self) -> Result<solrenview::Api> {
        Ok(solrenview::Api::new(Sites::read_from(&self.sites_path)?, self.fetch_timeout))
    }

    pub const fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.hour_labels)
    }
}
