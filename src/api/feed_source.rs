use chrono::NaiveDate;

use crate::{core::site::Site, prelude::*};

/// Retrieves the raw feed document of a site for a single day.
pub trait FeedSource {
    fn fetch(&self, site: Site, on: NaiveDate) -> Result<String>;
}
