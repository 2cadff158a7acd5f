//! Birthday property (BDAY, RFC 6350 §6.2.5).
//!
//! Only the date is kept. The year may be missing; month and day are not.

use chrono::NaiveDate;
use contact_card_core::error::{CoreError, CoreResult};

use super::parameter::Parameters;

/// Leap year used to check yearless dates, so that `--02-29` is accepted.
const YEARLESS_CHECK_YEAR: i32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayProperty {
    pub parameters: Parameters,
    pub year: Option<i32>,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
}

impl BirthdayProperty {
    /// Creates a birthday without checking the date.
    #[must_use]
    pub fn new(year: Option<i32>, month: u32, day: u32) -> Self {
        Self {
            parameters: Parameters::new(),
            year,
            month,
            day,
        }
    }

    /// Creates a birthday, rejecting dates that do not exist.
    ///
    /// ## Errors
    /// Returns a validation error if the month/day (and year, when given)
    /// do not form a calendar date.
    pub fn try_new(year: Option<i32>, month: u32, day: u32) -> CoreResult<Self> {
        let birthday = Self::new(year, month, day);
        if !birthday.is_valid() {
            return Err(CoreError::ValidationError(format!(
                "invalid birthday: {}",
                birthday.to_date_string()
            )));
        }
        Ok(birthday)
    }

    /// Returns whether the components form a calendar date.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.year.is_none_or(|y| (0..=9999).contains(&y))
            && NaiveDate::from_ymd_opt(
                self.year.unwrap_or(YEARLESS_CHECK_YEAR),
                self.month,
                self.day,
            )
            .is_some()
    }

    /// Returns the full date when the year is known.
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month, self.day)
    }

    /// Formats as `yyyy-mm-dd`, or `--mm-dd` without a year.
    #[must_use]
    pub fn to_date_string(&self) -> String {
        match self.year {
            Some(year) => format!("{year:04}-{:02}-{:02}", self.month, self.day),
            None => format!("--{:02}-{:02}", self.month, self.day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_string_with_year() {
        let bday = BirthdayProperty::new(Some(1968), 12, 30);
        assert_eq!(bday.to_date_string(), "1968-12-30");
    }

    #[test]
    fn date_string_without_year() {
        let bday = BirthdayProperty::new(None, 10, 8);
        assert_eq!(bday.to_date_string(), "--10-08");
        assert_eq!(bday.to_naive_date(), None);
    }

    #[test]
    fn yearless_leap_day_is_valid() {
        assert!(BirthdayProperty::try_new(None, 2, 29).is_ok());
        assert!(BirthdayProperty::try_new(Some(1999), 2, 29).is_err());
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        let err = BirthdayProperty::try_new(Some(1990), 13, 1).unwrap_err();
        assert!(err.to_string().contains("1990-13-01"));
    }

    #[test]
    fn naive_date_with_year() {
        let bday = BirthdayProperty::new(Some(1990), 6, 15);
        assert_eq!(bday.to_naive_date(), NaiveDate::from_ymd_opt(1990, 6, 15));
    }
}
