use chrono::{Datelike, NaiveDate, Utc};

/// Expands the last two digits of a year into a full year, using a rolling window of 100 years
/// that ends just before `reference_year`.
///
/// With a reference year of 2020, "20" resolves to 1920 and "19" resolves to 2019.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoDigitYear {
    reference_year: i32,
}

impl TwoDigitYear {
    pub fn new(reference_year: i32) -> Self {
        TwoDigitYear { reference_year }
    }

    /// Window ending at the current UTC year.
    pub fn current() -> Self {
        TwoDigitYear::new(Utc::now().year())
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// `None` unless `digits` is exactly two ASCII digits.
    pub fn resolve(&self, digits: &str) -> Option<i32> {
        if digits.len() != 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let two_digits: i32 = digits.parse().ok()?;
        let base = self.reference_year - 100;
        Some(base + (two_digits - base.rem_euclid(100)).rem_euclid(100))
    }
}

impl Default for TwoDigitYear {
    fn default() -> Self {
        TwoDigitYear::current()
    }
}

/// Whether the year, month and day form a real date of the proleptic Gregorian calendar.
pub fn is_calendar_date(year: i32, month: u32, day: u32) -> bool {
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve_against_reference_year() {
        let years = TwoDigitYear::new(2020);
        assert_eq!(years.resolve("20"), Some(1920));
        assert_eq!(years.resolve("19"), Some(2019));
        assert_eq!(years.resolve("00"), Some(2000));
        assert_eq!(years.resolve("99"), Some(1999));
    }

    #[test]
    fn test_resolve_rejects_malformed_digits() {
        let years = TwoDigitYear::new(2020);
        let invalid_inputs = vec!["", "AB", "-1", "1", "123", "1 "];
        for input in invalid_inputs {
            println!("testing for input {input:?}");
            assert_eq!(years.resolve(input), None);
        }
    }

    #[test]
    fn test_resolve_on_century_boundary() {
        let years = TwoDigitYear::new(2000);
        assert_eq!(years.resolve("00"), Some(1900));
        assert_eq!(years.resolve("99"), Some(1999));
    }

    #[test]
    fn test_current_window_contains_current_year_minus_one() {
        let years = TwoDigitYear::current();
        let last_year = years.reference_year() - 1;
        let digits = format!("{:02}", last_year.rem_euclid(100));
        assert_eq!(years.resolve(&digits), Some(last_year));
    }

    #[test]
    fn test_is_calendar_date() {
        assert!(is_calendar_date(2000, 2, 29));
        assert!(!is_calendar_date(1900, 2, 29));
        assert!(!is_calendar_date(2001, 11, 31));
        assert!(!is_calendar_date(2001, 13, 1));
        assert!(!is_calendar_date(2001, 0, 1));
        assert!(!is_calendar_date(2001, 1, 0));
    }
}
