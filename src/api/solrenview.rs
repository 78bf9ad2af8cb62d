//! Blocking client for the sites' monitoring feeds.

use std::time::Duration;

use chrono::NaiveDate;
use ureq::Agent;

use crate::{
    api::{FeedSource, sites::Sites},
    core::site::Site,
    prelude::*,
};

pub struct Api {
    client: Agent,
    sites: Sites,
}

impl Api {
    pub fn new(sites: Sites, timeout: Duration) -> Self {
        let client = Agent::config_builder().timeout_global(Some(timeout)).build().into();
        Self { client, sites }
    }
}

impl FeedSource for Api {
    #[instrument(skip_all, fields(site = %site, on = %on))]
    fn fetch(&self, site: Site, on: NaiveDate) -> Result<String> {
        let url = self.sites.get(site)?.url_on(on)?;
        debug!(%url, "fetching…");
        let body = self
            .client
            .get(&url)
            .call()
            .with_context(|| format!("failed to request `{url}`"))?
            .body_mut()
            .read_to_string()
            .with_context(|| format!("failed to read the response from `{url}`"))?;
        debug!(n_bytes = body.len(), "fetched");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::core::daily::Normalizer;

    #[test]
    #[ignore = "makes the API request"]
    fn test_fetch_ok() -> Result {
        let api = Api::new(Sites::read_from(Path::new("sites.toml"))?, Duration::from_secs(10));
        let on = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        for site in Site::ALL {
            let body = api.fetch(site, on)?;
            Normalizer::default().normalize(site, on, &body)?;
        }
        Ok(())
    }

    #[test]
    fn test_unconfigured_site_fails_before_the_request() {
        let api = Api::new(Sites::default(), Duration::from_secs(1));
        let on = NaiveDate::from_ymd_opt(2024, 7, 10).unwrap();
        assert!(api.fetch(Site::Southbury, on).is_err());
    }
}
