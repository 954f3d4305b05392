use crate::checksum::parse_digits;
use crate::date::is_calendar_date;
use crate::national_id::{is_numeric_of_length, strip_separators, two_digits_at, NationalIdCodec};
use crate::{Citizen, Sex};

/// Belgian National Register number (Rijksregisternummer): YYMMDD, a 3 digit sequence number
/// and a 2 digit mod 97 check number.
/// See http://www.ibz.rrn.fgov.be/fileadmin/user_upload/nl/rr/instructies/IT-lijst/IT000_Rijksregisternummer.pdf
pub struct BelgiumNationalId;

const BELGIUM_NATIONAL_ID_LENGTH: usize = 11;
const SEPARATORS: &[char] = &['.', '-'];
const CHECKSUM_MODULUS: u64 = 97;
// people born after 1999 have a "2" prepended to the first 9 digits for the checksum
const Y2K_PREFIX: u64 = 2_000_000_000;

struct RegisterNumber {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    sequence_number: u32,
}

fn check_number(value: u64) -> u64 {
    CHECKSUM_MODULUS - value % CHECKSUM_MODULUS
}

impl BelgiumNationalId {
    fn parse(&self, id: &str) -> Option<RegisterNumber> {
        let id = self.sanitize(id);
        if !is_numeric_of_length(&id, BELGIUM_NATIONAL_ID_LENGTH) {
            return None;
        }

        let sequence_number = parse_digits(&id[6..9])? as u32;
        if sequence_number == 0 || sequence_number == 999 {
            return None;
        }

        // YY is ambiguous (15 could be 1915 or 2015), the checksum tells the two apart
        let first_nine = parse_digits(&id[..9])?;
        let actual_check_number = parse_digits(&id[9..])?;
        let century = if check_number(first_nine) == actual_check_number {
            1900
        } else if check_number(Y2K_PREFIX + first_nine) == actual_check_number {
            2000
        } else {
            return None;
        };

        let year = century + two_digits_at(&id, 0)? as i32;
        let month = two_digits_at(&id, 2)?;
        let day = two_digits_at(&id, 4)?;
        if month > 12 || day > 31 {
            return None;
        }
        // "00" stands for an unknown month or day
        if month != 0 && day != 0 && !is_calendar_date(year, month, day) {
            return None;
        }

        Some(RegisterNumber {
            year,
            month: (month != 0).then_some(month),
            day: (day != 0).then_some(day),
            sequence_number,
        })
    }
}

impl NationalIdCodec for BelgiumNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, SEPARATORS, false)
    }

    fn is_valid(&self, id: &str) -> bool {
        self.parse(id).is_some()
    }

    fn extract(&self, id: &str) -> Option<Citizen> {
        let number = self.parse(id)?;
        let sex = if number.sequence_number % 2 == 0 {
            Sex::Female
        } else {
            Sex::Male
        };
        Some(
            Citizen::builder()
                .sex(sex)
                .year_of_birth(number.year)
                .maybe_month_of_birth(number.month)
                .maybe_day_of_birth(number.day)
                .build(),
        )
    }
}
