use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;

use crate::date::{is_calendar_date, TwoDigitYear};
use crate::national_id::{strip_separators, two_digits_at, NationalIdCodec};
use crate::{Citizen, Sex};

/// Mexican CURP (Clave Única de Registro de Población).
///
/// 4 letters derived from the name, YYMMDD, sex (`H`/`M`), a 2 letter state code, 3 consonants
/// from the name, a homonym differentiator and a check digit.
pub struct MexicoNationalId {
    years: TwoDigitYear,
}

const NAME_CODE_LENGTH: usize = 4;
const CHECK_DIGIT_INDEX: usize = 17;
const CHECK_DIGIT_DICTIONARY: &str = "0123456789ABCDEFGHIJKLMN&OPQRSTUVWXYZ";

lazy_static! {
    static ref CURP_PATTERN: Regex =
        Regex::new(r"^[A-Z]{4}[0-9]{6}[HM][A-Z]{2}[B-DF-HJ-NP-TV-Z]{3}[A-Z0-9][0-9]$").unwrap();

    // name codes that are never issued, the registry replaces a letter instead
    static ref INAPPROPRIATE_WORDS: HashSet<&'static str> = HashSet::from([
        "BACA", "BAKA", "BUEI", "BUEY", "CACA", "CACO", "CAGA", "CAGO", "CAKA", "CAKO", "COGE",
        "COGI", "COJA", "COJE", "COJI", "COJO", "COLA", "CULO", "FALO", "FETO", "GETA", "GUEI",
        "GUEY", "JETA", "JOTO", "KACA", "KACO", "KAGA", "KAGO", "KAKA", "KAKO", "KOGE", "KOGI",
        "KOJA", "KOJE", "KOJI", "KOJO", "KOLA", "KULO", "LILO", "LOCA", "LOCO", "LOKA", "LOKO",
        "MAME", "MAMO", "MEAR", "MEAS", "MEON", "MIAR", "MION", "MOCO", "MOKO", "MULA", "MULO",
        "NACA", "NACO", "PEDA", "PEDO", "PENE", "PIPI", "PITO", "POPO", "PUTA", "PUTO", "QULO",
        "RATA", "ROBA", "ROBE", "ROBO", "RUIN", "SENO", "TETA", "VACA", "VAGA", "VAGO", "VAKA",
        "VUEI", "VUEY", "WUEI", "WUEY",
    ]);

    static ref STATES: HashMap<&'static str, &'static str> = HashMap::from([
        ("AS", "AGUASCALIENTES"),
        ("BS", "BAJA CALIFORNIA SUR"),
        ("CL", "COAHUILA"),
        ("CS", "CHIAPAS"),
        ("DF", "DISTRITO FEDERAL"),
        ("GT", "GUANAJUATO"),
        ("HG", "HIDALGO"),
        ("MC", "MÉXICO"),
        ("MS", "MORELOS"),
        ("NL", "NUEVO LEÓN"),
        ("PL", "PUEBLA"),
        ("QR", "QUINTANA ROO"),
        ("SL", "SINALOA"),
        ("TC", "TABASCO"),
        ("TL", "TLAXCALA"),
        ("YN", "YUCATÁN"),
        ("NE", "NACIDO EN EL EXTRANJERO"),
        ("BC", "BAJA CALIFORNIA"),
        ("CC", "CAMPECHE"),
        ("CM", "COLIMA"),
        ("CH", "CHIHUAHUA"),
        ("DG", "DURANGO"),
        ("GR", "GUERRERO"),
        ("JC", "JALISCO"),
        ("MN", "MICHOACÁN"),
        ("NT", "NAYARIT"),
        ("OC", "OAXACA"),
        ("QT", "QUERÉTARO"),
        ("SP", "SAN LUIS POTOSÍ"),
        ("SR", "SONORA"),
        ("TS", "TAMAULIPAS"),
        ("VZ", "VERACRUZ"),
        ("ZS", "ZACATECAS"),
    ]);
}

struct Curp {
    year: i32,
    month: u32,
    day: u32,
    sex: Sex,
}

/// Each of the first 17 characters, weighted from 18 down to 2.
fn check_digit(id: &str) -> Option<u32> {
    let mut sum = 0;
    for (idx, c) in id.chars().take(CHECK_DIGIT_INDEX).enumerate() {
        let value = CHECK_DIGIT_DICTIONARY.find(c)? as u32;
        sum += value * (CHECK_DIGIT_INDEX + 1 - idx) as u32;
    }
    Some((10 - sum % 10) % 10)
}

impl MexicoNationalId {
    pub fn new(years: TwoDigitYear) -> Self {
        MexicoNationalId { years }
    }

    fn parse(&self, id: &str) -> Option<Curp> {
        let id = self.sanitize(id);
        if !CURP_PATTERN.is_match(&id) {
            return None;
        }
        // the pattern guarantees ASCII from here on
        if INAPPROPRIATE_WORDS.contains(&id[..NAME_CODE_LENGTH]) {
            return None;
        }

        let year = self.years.resolve(&id[4..6])?;
        let month = two_digits_at(&id, 6)?;
        let day = two_digits_at(&id, 8)?;
        if !is_calendar_date(year, month, day) {
            return None;
        }

        let actual_check_digit = id[CHECK_DIGIT_INDEX..].parse::<u32>().ok()?;
        if check_digit(&id)? != actual_check_digit {
            return None;
        }

        let sex = match &id[10..11] {
            "M" => Sex::Female,
            _ => Sex::Male,
        };
        Some(Curp {
            year,
            month,
            day,
            sex,
        })
    }
}

impl Default for MexicoNationalId {
    fn default() -> Self {
        MexicoNationalId::new(TwoDigitYear::current())
    }
}

impl NationalIdCodec for MexicoNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, &[], true)
    }

    fn is_valid(&self, id: &str) -> bool {
        self.parse(id).is_some()
    }

    fn extract(&self, id: &str) -> Option<Citizen> {
        let curp = self.parse(id)?;
        let state = self.sanitize(id).get(11..13).and_then(|code| STATES.get(code).copied());
        Some(
            Citizen::builder()
                .sex(curp.sex)
                .year_of_birth(curp.year)
                .month_of_birth(curp.month)
                .day_of_birth(curp.day)
                .maybe_place_of_birth(state)
                .build(),
        )
    }
}
