use crate::checksum::weighted_digit_sum;
use crate::date::is_calendar_date;
use crate::error::GenerateError;
use crate::generator::NationalIdGenerator;
use crate::national_id::denmark_national_id::{CHECKSUM_MODULUS, MULTIPLIERS};
use crate::{Citizen, Country, Sex};

/// Generates Danish CPR numbers, `DDMMYY-CFFS`.
///
/// `C` is a century digit that decodes back to the year of birth, `FF` are filler digits chosen
/// so the weighted sum is a multiple of 11 and `S` encodes sex (odd for men).
pub struct DenmarkNationalIdGenerator;

const FIRST_FILLER: usize = 7;
const SECOND_FILLER: usize = 8;

// Years the century digits 3, 4 and 5 decode back to.
const YEARS_OF_BIRTH: std::ops::RangeInclusive<i32> = 1900..=2057;

fn century_digit(year: i32) -> u32 {
    if year < 1999 {
        3
    } else if year < 2036 {
        4
    } else {
        5
    }
}

fn sex_digit(sex: Sex) -> u32 {
    match sex {
        Sex::Female => 2,
        Sex::Male => 3,
    }
}

/// Two filler digits whose weighted contribution is `remainder` modulo 11.
fn filler_digits(remainder: u32) -> Result<(u32, u32), GenerateError> {
    let first_weight = MULTIPLIERS[FIRST_FILLER];
    let second_weight = MULTIPLIERS[SECOND_FILLER];

    let mut target = remainder;
    while target < first_weight.min(second_weight) {
        target += CHECKSUM_MODULUS;
    }

    if target % first_weight == 0 && target / first_weight <= 9 {
        return Ok((target / first_weight, 0));
    }
    if target % second_weight == 0 && target / second_weight <= 9 {
        return Ok((0, target / second_weight));
    }
    for i in 1..=9 {
        for j in 1..=9 {
            if first_weight * i + second_weight * j == target {
                return Ok((i, j));
            }
        }
    }

    Err(GenerateError::NoFillerDigits {
        country: Country::Denmark,
        remainder,
    })
}

impl NationalIdGenerator for DenmarkNationalIdGenerator {
    fn generate(&self, citizen: &Citizen) -> Result<String, GenerateError> {
        let (Some(year), Some(month), Some(day), Some(sex)) = (
            citizen.year_of_birth(),
            citizen.month_of_birth(),
            citizen.day_of_birth(),
            citizen.sex(),
        ) else {
            return Err(GenerateError::InsufficientData(Country::Denmark));
        };
        if !is_calendar_date(year, month, day) {
            return Err(GenerateError::InvalidDateOfBirth { year, month, day });
        }
        if !YEARS_OF_BIRTH.contains(&year) {
            return Err(GenerateError::UnsupportedYearOfBirth {
                country: Country::Denmark,
                year,
            });
        }

        let date_of_birth = format!("{:02}{:02}{:02}", day, month, year.rem_euclid(100));
        let century_digit = century_digit(year);
        let sex_digit = sex_digit(sex);

        let without_fillers = format!("{date_of_birth}{century_digit}00{sex_digit}");
        let sum = weighted_digit_sum(&without_fillers, &MULTIPLIERS).ok_or(
            GenerateError::InvalidDateOfBirth { year, month, day },
        )?;
        let remainder = (CHECKSUM_MODULUS - sum % CHECKSUM_MODULUS) % CHECKSUM_MODULUS;
        let (first, second) = filler_digits(remainder)?;

        Ok(format!("{date_of_birth}-{century_digit}{first}{second}{sex_digit}"))
    }
}
