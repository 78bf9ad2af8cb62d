//! Per-site shapes of the daily monitoring feed.

use serde::Deserialize;
use serde_json::Value;
use serde_with::serde_as;

use crate::{core::hour_label::HourLabels, prelude::*, quantity::energy::KilowattHours};

/// Feed of an hourly-split site: hour labels and readings, aligned by position.
#[derive(Deserialize)]
pub struct HourlyFeed {
    categories: Vec<Categories>,
    dataset: Vec<Value>,
}

/// Feed of a daily-total site: only the second data point is used.
#[derive(Deserialize)]
pub struct DailyTotalFeed {
    dataset: Vec<Value>,
}

#[derive(Deserialize)]
struct Categories {
    category: Vec<Category>,
}

#[derive(Deserialize)]
struct Category {
    label: String,
}

#[serde_as]
#[derive(Deserialize)]
struct DataPoint {
    /// Empty and missing values mean no generation.
    #[serde_as(as = "serde_with::NoneAsEmptyString")]
    #[serde(default)]
    value: Option<KilowattHours>,
}

impl DataPoint {
    /// Parse a raw data point into its energy.
    fn energy_of(raw: &Value, index: usize) -> Result<KilowattHours> {
        let point = Self::deserialize(raw)
            .with_context(|| format!("malformed data point #{index}: `{raw}`"))?;
        let energy = point.value.unwrap_or_default();
        ensure!(energy.0.is_finite() && energy.0 >= 0.0, "invalid energy reading: {energy}");
        Ok(energy)
    }
}

/// Raw data points of the first dataset; the other datasets are never read.
fn first_data(dataset: &[Value]) -> Result<&[Value]> {
    dataset
        .first()
        .context("the feed has no dataset")?
        .get("data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .context("the feed's dataset has no data")
}

impl HourlyFeed {
    /// Pair every hour label with its reading.
    pub fn readings(&self, labels: HourLabels) -> Result<Vec<(u32, KilowattHours)>> {
        let categories =
            &self.categories.first().context("the feed has no hour categories")?.category;
        let data = first_data(&self.dataset)?;
        ensure!(
            data.len() >= categories.len(),
            "the feed has {} hour labels but only {} readings",
            categories.len(),
            data.len(),
        );
        categories
            .iter()
            .zip(data)
            .enumerate()
            .map(|(index, (category, raw))| {
                Ok((labels.parse(&category.label)?, DataPoint::energy_of(raw, index)?))
            })
            .collect()
    }
}

impl DailyTotalFeed {
    pub fn total(&self) -> Result<KilowattHours> {
        let raw = first_data(&self.dataset)?.get(1).context("the feed has no daily total")?;
        DataPoint::energy_of(raw, 1)
    }
}
