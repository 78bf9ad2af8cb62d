use std::ops::Div;

quantity!(KilowattHours, "kWh");

impl KilowattHours {
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

/// Ratio between two energies.
impl Div for KilowattHours {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_from_str_ok() -> anyhow::Result<()> {
        assert_abs_diff_eq!(KilowattHours::from_str("12.5")?.0, 12.5);
        Ok(())
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(KilowattHours::from_str("n/a").is_err());
    }

    #[test]
    fn test_sum() {
        let total: KilowattHours =
            [KilowattHours(1.5), KilowattHours(2.0), KilowattHours::zero()].into_iter().sum();
        assert_eq!(total, KilowattHours(3.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(KilowattHours(3.5).to_string(), "3.5 kWh");
    }

    #[test]
    fn test_ratio() {
        assert_abs_diff_eq!(KilowattHours(30.0) / KilowattHours(40.0), 0.75);
    }
}
