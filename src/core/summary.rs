use std::fmt::{Display, Formatter};

use crate::core::{
    billing_cycle::CycleTotals,
    site::{Schema, Site},
};

/// Final report of a completed billing cycle.
#[must_use]
pub struct Summary {
    pub site: Site,
    pub totals: CycleTotals,
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Results for {}:", self.site)?;
        let Some(on_peak_percentage) = self.totals.on_peak_percentage() else {
            return write!(f, "Total kWh generated: 0");
        };
        write!(f, "Total kWh generated: {:.1}", self.totals.total().0)?;
        if self.site.schema() == Schema::HourlySplit {
            writeln!(f)?;
            writeln!(
                f,
                "kWh On Peak: {:.1}, kWh Off Peak: {:.1}",
                self.totals.on_peak.0, self.totals.off_peak.0,
            )?;
            write!(f, "Percent Generation On Peak: {:.0}%", on_peak_percentage.round_ties_even())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::energy::KilowattHours;

    #[test]
    fn test_hourly_split_site() {
        let summary = Summary {
            site: Site::Southbury,
            totals: CycleTotals { off_peak: KilowattHours(8.0), on_peak: KilowattHours(30.0) },
        };
        assert_eq!(
            summary.to_string(),
            "Results for Southbury:\n\
             Total kWh generated: 38.0\n\
             kWh On Peak: 30.0, kWh Off Peak: 8.0\n\
             Percent Generation On Peak: 79%",
        );
    }

    #[test]
    fn test_percentage_ties_round_to_even() {
        let summary = Summary {
            site: Site::Southbury,
            totals: CycleTotals { off_peak: KilowattHours(7.0), on_peak: KilowattHours(1.0) },
        };
        assert!(summary.to_string().ends_with("Percent Generation On Peak: 12%"));
        let summary = Summary {
            site: Site::Bridgeport,
            totals: CycleTotals { off_peak: KilowattHours(5.0), on_peak: KilowattHours(3.0) },
        };
        assert!(summary.to_string().ends_with("Percent Generation On Peak: 38%"));
    }

    #[test]
    fn test_daily_total_site() {
        let summary = Summary {
            site: Site::Torrington,
            totals: CycleTotals { off_peak: KilowattHours(1234.56), on_peak: KilowattHours::zero() },
        };
        assert_eq!(summary.to_string(), "Results for Torrington:\nTotal kWh generated: 1234.6");
    }

    #[test]
    fn test_nothing_generated() {
        let summary = Summary { site: Site::Bridgeport, totals: CycleTotals::default() };
        assert_eq!(summary.to_string(), "Results for Bridgeport:\nTotal kWh generated: 0");
    }
}
