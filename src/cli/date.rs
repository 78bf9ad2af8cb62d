use chrono::{Datelike, NaiveDate};

/// Why a typed-in `MM/DD/YYYY` date was not accepted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum DateInputError {
    #[display("expected a date as MM/DD/YYYY")]
    Malformed,

    #[display("the year must be between 1 CE and 9999 CE")]
    YearOutOfRange,
}

pub fn parse_date(input: &str) -> Result<NaiveDate, DateInputError> {
    if input.len() != 10 {
        return Err(DateInputError::Malformed);
    }
    let date =
        NaiveDate::parse_from_str(input, "%m/%d/%Y").map_err(|_| DateInputError::Malformed)?;
    if (1..=9999).contains(&date.year()) { Ok(date) } else { Err(DateInputError::YearOutOfRange) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_ok() {
        assert_eq!(parse_date("03/09/2024"), Ok(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
        assert_eq!(parse_date("12/31/0001"), Ok(NaiveDate::from_ymd_opt(1, 12, 31).unwrap()));
    }

    #[test]
    fn test_parse_date_malformed() {
        for input in ["", "3/9/2024", "03/09/24", "2024-03-09", "13/01/2024", "02/30/2024", "03-09-2024"] {
            assert_eq!(parse_date(input), Err(DateInputError::Malformed), "{input}");
        }
    }

    #[test]
    fn test_parse_date_year_out_of_range() {
        assert_eq!(parse_date("01/01/0000"), Err(DateInputError::YearOutOfRange));
    }
}
