use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::checksum::parse_digits;
use crate::date::TwoDigitYear;
use crate::national_id::{is_numeric_of_length, strip_separators, two_digits_at, NationalIdCodec};
use crate::{Citizen, Sex};

/// French social security number (NIR / numéro INSEE).
///
/// `S YY MM DD CCC OOO KK`: sex, year and month of birth, department and commune of birth, an
/// order number and a 2 digit control key. Corsican departments use `2A` and `2B`.
pub struct FranceNationalId {
    years: TwoDigitYear,
}

const FRANCE_NATIONAL_ID_LENGTH: usize = 15;
const CONTROL_KEY_LENGTH: usize = 2;
const CONTROL_KEY_MODULUS: u64 = 97;
const DEPARTMENT_START: usize = 5;
// months 31 to 42 are used for people whose registration was pseudo-fictitious
const PSEUDO_FICTITIOUS_MONTH_OFFSET: u32 = 30;

lazy_static! {
    static ref DEPARTMENTS: HashMap<&'static str, &'static str> = HashMap::from([
        ("01", "Ain"),
        ("02", "Aisne"),
        ("03", "Allier"),
        ("04", "Alpes-de-Haute-Provence"),
        ("05", "Hautes-Alpes"),
        ("06", "Alpes-Maritimes"),
        ("07", "Ardèche"),
        ("08", "Ardennes"),
        ("09", "Ariège"),
        ("10", "Aube"),
        ("11", "Aude"),
        ("12", "Aveyron"),
        ("13", "Bouches-du-Rhône"),
        ("14", "Calvados"),
        ("15", "Cantal"),
        ("16", "Charente"),
        ("17", "Charente-Maritime"),
        ("18", "Cher"),
        ("19", "Corrèze"),
        ("2A", "Corse-du-Sud"),
        ("2B", "Haute-Corse"),
        ("21", "Côte-d’Or"),
        ("22", "Côtes-d’Armor"),
        ("23", "Creuse"),
        ("24", "Dordogne"),
        ("25", "Doubs"),
        ("26", "Drôme"),
        ("27", "Eure"),
        ("28", "Eure-et-Loir"),
        ("29", "Finistère"),
        ("30", "Gard"),
        ("31", "Haute-Garonne"),
        ("32", "Gers"),
        ("33", "Gironde"),
        ("34", "Hérault"),
        ("35", "Ille-et-Vilaine"),
        ("36", "Indre"),
        ("37", "Indre-et-Loire"),
        ("38", "Isère"),
        ("39", "Jura"),
        ("40", "Landes"),
        ("41", "Loir-et-Cher"),
        ("42", "Loire"),
        ("43", "Haute-Loire"),
        ("44", "Loire-Atlantique"),
        ("45", "Loiret"),
        ("46", "Lot"),
        ("47", "Lot-et-Garonne"),
        ("48", "Lozère"),
        ("49", "Maine-et-Loire"),
        ("50", "Manche"),
        ("51", "Marne"),
        ("52", "Haute-Marne"),
        ("53", "Mayenne"),
        ("54", "Meurthe-et-Moselle"),
        ("55", "Meuse"),
        ("56", "Morbihan"),
        ("57", "Moselle"),
        ("58", "Nièvre"),
        ("59", "Nord"),
        ("60", "Oise"),
        ("61", "Orne"),
        ("62", "Pas-de-Calais"),
        ("63", "Puy-de-Dôme"),
        ("64", "Pyrénées-Atlantiques"),
        ("65", "Hautes-Pyrénées"),
        ("66", "Pyrénées-Orientales"),
        ("67", "Bas-Rhin"),
        ("68", "Haut-Rhin"),
        ("69", "Rhône"),
        ("70", "Haute-Saône"),
        ("71", "Saône-et-Loire"),
        ("72", "Sarthe"),
        ("73", "Savoie"),
        ("74", "Haute-Savoie"),
        ("75", "Paris"),
        ("76", "Seine-Maritime"),
        ("77", "Seine-et-Marne"),
        ("78", "Yvelines"),
        ("79", "Deux-Sèvres"),
        ("80", "Somme"),
        ("81", "Tarn"),
        ("82", "Tarn-et-Garonne"),
        ("83", "Var"),
        ("84", "Vaucluse"),
        ("85", "Vendée"),
        ("86", "Vienne"),
        ("87", "Haute-Vienne"),
        ("88", "Vosges"),
        ("89", "Yonne"),
        ("90", "Territoire de Belfort"),
        ("91", "Essonne"),
        ("92", "Hauts-de-Seine"),
        ("93", "Seine-Saint-Denis"),
        ("94", "Val-de-Marne"),
        ("95", "Val-d'Oise"),
        ("971", "Guadeloupe"),
        ("972", "Martinique"),
        ("973", "Guyane (française)"),
        ("974", "La Réunion"),
        ("975", "Saint Pierre and Miquelon"),
        ("976", "Mayotte"),
        ("977", "Saint-Barthélemy"),
        ("978", "Saint-Martin"),
        ("984", "Terres australes et antarctiques françaises"),
        ("986", "Wallis-et-Futuna"),
        ("987", "Polynésie française"),
        ("988", "Nouvelle-Calédonie"),
        ("989", "Île de Clipperton"),
    ]);
}

/// Rewrite the Corsican department letters so the id can be read as a number.
// ref: https://xml.insee.fr/schema/nir.html
fn corsica_as_digits(id: &str) -> Option<String> {
    let department = id.get(DEPARTMENT_START..DEPARTMENT_START + 2)?;
    let replacement = match department {
        "2A" => "19",
        "2B" => "18",
        _ => return Some(id.to_string()),
    };
    let mut rewritten = id.to_string();
    rewritten.replace_range(DEPARTMENT_START..DEPARTMENT_START + 2, replacement);
    Some(rewritten)
}

/// Mainland departments have a 2 character code, overseas ones a 3 digit code.
fn department_name(id: &str) -> Option<&'static str> {
    let two_chars = id.get(DEPARTMENT_START..DEPARTMENT_START + 2)?;
    let three_chars = id.get(DEPARTMENT_START..DEPARTMENT_START + 3)?;
    DEPARTMENTS
        .get(two_chars)
        .or_else(|| DEPARTMENTS.get(three_chars))
        .copied()
}

impl FranceNationalId {
    pub fn new(years: TwoDigitYear) -> Self {
        FranceNationalId { years }
    }
}

impl Default for FranceNationalId {
    fn default() -> Self {
        FranceNationalId::new(TwoDigitYear::current())
    }
}

impl NationalIdCodec for FranceNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, &[], true)
    }

    fn is_valid(&self, id: &str) -> bool {
        let id = self.sanitize(id);
        if id.len() != FRANCE_NATIONAL_ID_LENGTH {
            return false;
        }
        let Some(numeric_id) = corsica_as_digits(&id) else {
            return false;
        };
        if !is_numeric_of_length(&numeric_id, FRANCE_NATIONAL_ID_LENGTH) {
            return false;
        }

        let (first_value, control_key) =
            numeric_id.split_at(FRANCE_NATIONAL_ID_LENGTH - CONTROL_KEY_LENGTH);
        match (parse_digits(first_value), parse_digits(control_key)) {
            (Some(first_value), Some(control_key)) => {
                CONTROL_KEY_MODULUS - first_value % CONTROL_KEY_MODULUS == control_key
            }
            _ => false,
        }
    }

    fn extract(&self, id: &str) -> Option<Citizen> {
        if !self.is_valid(id) {
            return None;
        }
        let id = self.sanitize(id);

        // 3 and 4 are issued to foreign-born people, 7 and 8 are temporary numbers
        let sex = match &id[..1] {
            "1" | "3" | "7" => Some(Sex::Male),
            "2" | "4" | "8" => Some(Sex::Female),
            _ => None,
        };
        let month = match two_digits_at(&id, 3)? {
            month @ 1..=12 => Some(month),
            month @ 31..=42 => Some(month - PSEUDO_FICTITIOUS_MONTH_OFFSET),
            _ => None,
        };

        Some(
            Citizen::builder()
                .maybe_sex(sex)
                .year_of_birth(self.years.resolve(&id[1..3])?)
                .maybe_month_of_birth(month)
                .maybe_place_of_birth(department_name(&id))
                .build(),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::date::TwoDigitYear;
    use crate::national_id::*;
    use crate::{Citizen, Sex};

    fn codec() -> FranceNationalId {
        FranceNationalId::new(TwoDigitYear::new(2020))
    }

    #[test]
    fn test_valid_french_ssn() {
        let valid_ids = vec![
            " 2820819398814 09 ",
            "238108021456811",
            "188085870457157",
            "182089740115475",
            "199072A22807010",
            "199072a22807010",
            "257092B84445887",
        ];
        for id in valid_ids {
            println!("testing for input {}", id);
            assert!(codec().is_valid(id));
        }
    }

    #[test]
    fn test_invalid_french_ssn() {
        let invalid_ids = vec![
            "1234567890123456",
            "12345678901234",
            "12345678901234A",
            "103162989566972",
            // Corsica letters are only allowed as the department
            "2A9072122807010",
            "199072A22807011",
            "",
        ];
        for id in invalid_ids {
            println!("testing for input {}", id);
            assert!(!codec().is_valid(id));
            assert_eq!(codec().extract(id), None);
        }
    }

    #[test]
    fn test_extract_french_ssn() {
        let cases = vec![
            ("2820819398814 09", Sex::Female, 1982, Some(8), "Corrèze"),
            ("1350455179061 16", Sex::Male, 1935, Some(4), "Meuse"),
            ("2381080214568 11", Sex::Female, 1938, Some(10), "Somme"),
            ("1880858704571 57", Sex::Male, 1988, Some(8), "Nièvre"),
            ("1030307795669 72", Sex::Male, 2003, Some(3), "Ardèche"),
            ("1820897401154 75", Sex::Male, 1982, Some(8), "La Réunion"),
            ("2041098718061 61", Sex::Female, 2004, Some(10), "Polynésie française"),
            // pseudo-fictitious month
            ("1103442505781 11", Sex::Male, 2010, Some(4), "Loire"),
            // unknown month
            ("2115028242370 20", Sex::Female, 2011, None, "Eure-et-Loir"),
            ("199072A228070 10", Sex::Male, 1999, Some(7), "Corse-du-Sud"),
            ("257092B844458 87", Sex::Female, 1957, Some(9), "Haute-Corse"),
        ];
        for (id, sex, year, month, place) in cases {
            println!("testing for input {}", id);
            assert_eq!(
                codec().extract(id),
                Some(
                    Citizen::builder()
                        .sex(sex)
                        .year_of_birth(year)
                        .maybe_month_of_birth(month)
                        .place_of_birth(place)
                        .build()
                )
            );
        }
    }

    #[test]
    fn test_sex_digit() {
        let cases = vec![
            ("382081939881456", Some(Sex::Male)),
            ("482081939881406", Some(Sex::Female)),
            ("782081939881450", Some(Sex::Male)),
            ("882081939881497", Some(Sex::Female)),
            // no sex is encoded by other digits
            ("582081939881453", None),
            ("082081939881412", None),
        ];
        for (id, sex) in cases {
            println!("testing for input {}", id);
            let citizen = codec().extract(id).unwrap();
            assert_eq!(citizen.sex(), sex);
            assert_eq!(citizen.year_of_birth(), Some(1982));
        }
    }

    #[test]
    fn test_department_lookup() {
        assert_eq!(super::department_name("1820897401154"), Some("La Réunion"));
        assert_eq!(super::department_name("1820875401154"), Some("Paris"));
        assert_eq!(super::department_name("1820800001154"), None);
    }
}
