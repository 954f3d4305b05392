use crate::checksum::weighted_digit_sum;
use crate::date::is_calendar_date;
use crate::national_id::{is_numeric_of_length, strip_separators, two_digits_at, NationalIdCodec};
use crate::{Citizen, Sex};

/// Danish CPR number, DDMMYY-CSSS: date of birth, a century digit and a sequence number whose
/// last digit encodes sex.
pub struct DenmarkNationalId;

pub(crate) const DENMARK_NATIONAL_ID_LENGTH: usize = 10;
pub(crate) const MULTIPLIERS: [u32; DENMARK_NATIONAL_ID_LENGTH] = [4, 3, 2, 7, 6, 5, 4, 3, 2, 1];
pub(crate) const CHECKSUM_MODULUS: u32 = 11;

struct CprNumber {
    year: i32,
    month: u32,
    day: u32,
    sex: Sex,
}

/// Century of birth from the 7th digit and the two digit year.
fn century(century_digit: u32, two_digit_year: u32) -> i32 {
    match century_digit {
        0..=3 => 1900,
        4 | 9 if two_digit_year <= 36 => 2000,
        4 | 9 => 1900,
        _ if two_digit_year >= 58 => 1800,
        _ => 2000,
    }
}

impl DenmarkNationalId {
    fn parse(&self, id: &str) -> Option<CprNumber> {
        let id = self.sanitize(id);
        if !is_numeric_of_length(&id, DENMARK_NATIONAL_ID_LENGTH) {
            return None;
        }
        if weighted_digit_sum(&id, &MULTIPLIERS)? % CHECKSUM_MODULUS != 0 {
            return None;
        }

        let day = two_digits_at(&id, 0)?;
        let month = two_digits_at(&id, 2)?;
        let two_digit_year = two_digits_at(&id, 4)?;
        let century_digit = id[6..7].parse::<u32>().ok()?;
        let year = century(century_digit, two_digit_year) + two_digit_year as i32;
        if !is_calendar_date(year, month, day) {
            return None;
        }

        let sex = if two_digits_at(&id, 8)? % 2 == 1 {
            Sex::Male
        } else {
            Sex::Female
        };
        Some(CprNumber {
            year,
            month,
            day,
            sex,
        })
    }
}

impl NationalIdCodec for DenmarkNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, &['-'], false)
    }

    fn is_valid(&self, id: &str) -> bool {
        self.parse(id).is_some()
    }

    fn extract(&self, id: &str) -> Option<Citizen> {
        let number = self.parse(id)?;
        Some(
            Citizen::builder()
                .sex(number.sex)
                .year_of_birth(number.year)
                .month_of_birth(number.month)
                .day_of_birth(number.day)
                .build(),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::national_id::*;
    use crate::{Citizen, Sex};

    #[test]
    fn test_valid_cpr_numbers() {
        let valid_ids = vec![
            " 090792-1395 ",
            "070593-0600",
            "0705930600",
            "150437-3068",
            "160888-1995",
            "040404-7094",
        ];
        for id in valid_ids {
            println!("testing for input {}", id);
            assert!(DenmarkNationalId.is_valid(id));
        }
    }

    #[test]
    fn test_invalid_cpr_numbers() {
        let invalid_ids = vec![
            "123456789",
            "12345678901",
            "123456789A",
            // wrong checksum
            "1234567890",
            "2343212454",
            // impossible dates
            "161301-0001",
            "290201-0001",
            "311101-0001",
            "321201-0001",
            "",
        ];
        for id in invalid_ids {
            println!("testing for input {}", id);
            assert!(!DenmarkNationalId.is_valid(id));
            assert_eq!(DenmarkNationalId.extract(id), None);
        }
    }

    #[test]
    fn test_extract_cpr_numbers() {
        let cases = vec![
            ("090792-1395", Sex::Male, 1992, 7, 9),
            ("070593-0600", Sex::Female, 1993, 5, 7),
            ("150437-3068", Sex::Female, 1937, 4, 15),
            ("160888-1995", Sex::Male, 1988, 8, 16),
            ("040404-7094", Sex::Female, 2004, 4, 4),
        ];
        for (id, sex, year, month, day) in cases {
            println!("testing for input {}", id);
            assert_eq!(
                DenmarkNationalId.extract(id),
                Some(
                    Citizen::builder()
                        .sex(sex)
                        .year_of_birth(year)
                        .month_of_birth(month)
                        .day_of_birth(day)
                        .build()
                )
            );
        }
    }

    #[test]
    fn test_century_bands() {
        assert_eq!(super::century(0, 99), 1900);
        assert_eq!(super::century(3, 10), 1900);
        assert_eq!(super::century(4, 36), 2000);
        assert_eq!(super::century(4, 37), 1900);
        assert_eq!(super::century(9, 0), 2000);
        assert_eq!(super::century(9, 99), 1900);
        assert_eq!(super::century(5, 57), 2000);
        assert_eq!(super::century(8, 58), 1800);
    }
}
