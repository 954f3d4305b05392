mod omocodia;
mod regions;

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

pub use crate::national_id::italy::omocodia::restore_digits;
pub use crate::national_id::italy::regions::{ItalianRegions, RegionLookup};

use crate::date::{is_calendar_date, TwoDigitYear};
use crate::national_id::{strip_separators, two_digits_at, NationalIdCodec};
use crate::{Citizen, Sex};

const ITALY_NATIONAL_ID_LENGTH: usize = 16;
const MONTH_CODES: &str = "ABCDEHLMPRST";
// women have 40 added to their day of birth
const FEMALE_DAY_OFFSET: u32 = 40;

lazy_static! {
    static ref FISCAL_CODE_PATTERN: Regex =
        Regex::new(r"^[A-Z]{6}[0-9]{2}[ABCDEHLMPRST][0-9]{2}[A-Z][0-9]{3}[A-Z]$").unwrap();
    static ref ODD_CHARACTERS_MAPPING: HashMap<char, u32> = HashMap::from([
        ('0', 1),
        ('1', 0),
        ('2', 5),
        ('3', 7),
        ('4', 9),
        ('5', 13),
        ('6', 15),
        ('7', 17),
        ('8', 19),
        ('9', 21),
        ('A', 1),
        ('B', 0),
        ('C', 5),
        ('D', 7),
        ('E', 9),
        ('F', 13),
        ('G', 15),
        ('H', 17),
        ('I', 19),
        ('J', 21),
        ('K', 2),
        ('L', 4),
        ('M', 18),
        ('N', 20),
        ('O', 11),
        ('P', 3),
        ('Q', 6),
        ('R', 8),
        ('S', 12),
        ('T', 14),
        ('U', 16),
        ('V', 10),
        ('W', 22),
        ('X', 25),
        ('Y', 24),
        ('Z', 23),
    ]);
}

/// Control character over the first 15 characters of a fiscal code.
fn control_character(id: &str) -> Option<char> {
    let mut checksum_value: u32 = 0;
    for (idx, c) in id.chars().take(ITALY_NATIONAL_ID_LENGTH - 1).enumerate() {
        let position = idx + 1;
        if position % 2 == 1 {
            checksum_value += ODD_CHARACTERS_MAPPING.get(&c)?;
        } else if let Some(digit) = c.to_digit(10) {
            checksum_value += digit;
        } else if c.is_ascii_uppercase() {
            // letters are worth their position in the alphabet
            checksum_value += (c as u8 - b'A') as u32;
        } else {
            return None;
        }
    }
    Some((b'A' + (checksum_value % 26) as u8) as char)
}

/// Italian fiscal code (codice fiscale).
///
/// `SSSNNN YY M DD PPPP C`: 3 letters of the surname, 3 of the name, year, month letter, day of
/// birth (plus 40 for women), place of birth code and a control letter. Place of birth names are
/// resolved through a [`RegionLookup`].
pub struct ItalyNationalId {
    years: TwoDigitYear,
    regions: Arc<dyn RegionLookup>,
}

impl ItalyNationalId {
    pub fn new(years: TwoDigitYear, regions: Arc<dyn RegionLookup>) -> Self {
        ItalyNationalId { years, regions }
    }

    /// Decodes a fiscal code, `None` unless it is well formed, its control character matches and
    /// it encodes a real date of birth.
    fn parse(&self, id: &str) -> Option<FiscalCode> {
        let id = restore_digits(&self.sanitize(id));
        if !FISCAL_CODE_PATTERN.is_match(&id) {
            return None;
        }
        let actual = id.chars().last()?;
        if control_character(&id)? != actual {
            return None;
        }

        let year = self.years.resolve(&id[6..8])?;
        let month = MONTH_CODES.find(&id[8..9])? as u32 + 1;
        let encoded_day = two_digits_at(&id, 9)?;
        let (sex, day) = if encoded_day > FEMALE_DAY_OFFSET {
            (Sex::Female, encoded_day - FEMALE_DAY_OFFSET)
        } else {
            (Sex::Male, encoded_day)
        };
        if !is_calendar_date(year, month, day) {
            return None;
        }

        Some(FiscalCode {
            sex,
            year,
            month,
            day,
            place_code: id[11..15].to_string(),
        })
    }
}

struct FiscalCode {
    sex: Sex,
    year: i32,
    month: u32,
    day: u32,
    place_code: String,
}

impl Default for ItalyNationalId {
    fn default() -> Self {
        ItalyNationalId::new(TwoDigitYear::current(), Arc::new(ItalianRegions::new()))
    }
}

impl NationalIdCodec for ItalyNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, &[], true)
    }

    fn is_valid(&self, id: &str) -> bool {
        self.parse(id).is_some()
    }

    fn extract(&self, id: &str) -> Option<Citizen> {
        let code = self.parse(id)?;
        Some(
            Citizen::builder()
                .sex(code.sex)
                .year_of_birth(code.year)
                .month_of_birth(code.month)
                .day_of_birth(code.day)
                .maybe_place_of_birth(self.regions.region_name(&code.place_code))
                .build(),
        )
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use crate::date::TwoDigitYear;
    use crate::national_id::italy::*;
    use crate::national_id::NationalIdCodec;
    use crate::{Citizen, Sex};

    fn codec() -> ItalyNationalId {
        let regions = ItalianRegions::from_entries([
            ("F205", "MILANO (MI)"),
            ("Z404", "STATI UNITI D'AMERICA"),
            ("H227", "REINO (BN)"),
            ("H987", "SAN MARTINO ALFIERI (AT)"),
            ("A065", "AFRICO (RC)"),
        ]);
        ItalyNationalId::new(TwoDigitYear::new(2020), Arc::new(regions))
    }

    #[test]
    fn test_valid_fiscal_codes() {
        let valid_ids = vec![
            "MRTMTT25D09F205Z",
            " MRTMTT25D09F20 5Z ",
            "mrtmtt25d09f205z",
            "MLLSNT82P65Z404U",
            "DLMCTG75B07H227Y",
            "BRSLSE08D50H987B",
            "MRCDRA01A13A065E",
            // omocodia
            "MRCDRALMAMPALSRE",
            "MRTMTT91D08F205J",
            "LKJLDJ00E20D635F",
        ];
        for id in valid_ids {
            println!("testing for input {}", id);
            assert!(codec().is_valid(id));
        }
    }

    #[test]
    fn test_invalid_fiscal_codes() {
        let invalid_ids = vec![
            // wrong control character
            "MECDRE01A11A025E",
            "MRTMTT25D09F205A",
            // F is not a month code
            "MRTMTT25F09F205Z",
            "MRTMTT25D09F205",
            "MRTMTT25D09F205ZZ",
            "MRTMTT25D09F2-5Z",
            "",
        ];
        for id in invalid_ids {
            println!("testing for input {}", id);
            assert!(!codec().is_valid(id));
            assert_eq!(codec().extract(id), None);
        }
    }

    #[test]
    fn test_impossible_dates_of_birth() {
        // all of these have a matching control character
        let invalid_ids = vec![
            // day 0
            "MRTMTT25D00F205F",
            // day 32 for a woman
            "MRTMTT25D72F205Q",
            // between the days of men and women
            "MRTMTT25D35F205U",
            // February 31st
            "MRTMTT25B31F205A",
            // April 31st, for a man and a woman
            "MRTMTT25D31F205H",
            "MRTMTT25D71F205L",
            // February 29th 1925
            "MRTMTT25B69F205Y",
        ];
        for id in invalid_ids {
            println!("testing for input {}", id);
            assert!(!codec().is_valid(id));
            assert_eq!(codec().extract(id), None);
        }
    }

    #[test]
    fn test_extract_fiscal_codes() {
        let cases = vec![
            ("MRTMTT25D09F205Z", Sex::Male, 1925, 4, 9, "MILANO (MI)"),
            ("MLLSNT82P65Z404U", Sex::Female, 1982, 9, 25, "STATI UNITI D'AMERICA"),
            ("DLMCTG75B07H227Y", Sex::Male, 1975, 2, 7, "REINO (BN)"),
            ("BRSLSE08D50H987B", Sex::Female, 2008, 4, 10, "SAN MARTINO ALFIERI (AT)"),
            ("MRCDRA01A13A065E", Sex::Male, 2001, 1, 13, "AFRICO (RC)"),
            ("MRCDRALMAMPALSRE", Sex::Male, 2001, 1, 13, "AFRICO (RC)"),
        ];
        for (id, sex, year, month, day, place) in cases {
            println!("testing for input {}", id);
            assert_eq!(
                codec().extract(id),
                Some(
                    Citizen::builder()
                        .sex(sex)
                        .year_of_birth(year)
                        .month_of_birth(month)
                        .day_of_birth(day)
                        .place_of_birth(place)
                        .build()
                )
            );
        }
    }

    #[test]
    fn test_last_days_of_the_month() {
        let cases = vec![
            ("MRTMTT25A31F205B", Sex::Male, 1925, 1, 31),
            ("MRTMTT25A71F205F", Sex::Female, 1925, 1, 31),
            ("MRTMTT25D41F205I", Sex::Female, 1925, 4, 1),
            ("MRTMTT24B69F205X", Sex::Female, 1924, 2, 29),
        ];
        for (id, sex, year, month, day) in cases {
            println!("testing for input {}", id);
            let citizen = codec().extract(id).unwrap();
            assert_eq!(citizen.sex(), Some(sex));
            assert_eq!(citizen.year_of_birth(), Some(year));
            assert_eq!(citizen.month_of_birth(), Some(month));
            assert_eq!(citizen.day_of_birth(), Some(day));
        }
    }

    #[test]
    fn test_unknown_place_of_birth_is_absent() {
        let codec = ItalyNationalId::new(TwoDigitYear::new(2020), Arc::new(ItalianRegions::new()));
        let citizen = codec.extract("MRTMTT25D09F205Z").unwrap();
        assert_eq!(citizen.place_of_birth(), None);
        assert_eq!(citizen.year_of_birth(), Some(1925));
    }

    #[test]
    fn test_control_character() {
        assert_eq!(super::control_character("MRTMTT25D09F205"), Some('Z'));
        assert_eq!(super::control_character("MRTMTT25D09F2-5"), None);
    }
}
