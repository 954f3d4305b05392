use crate::national_id::{is_numeric_of_length, strip_separators, NationalIdCodec};

/// German tax identification number (Steuerliche Identifikationsnummer).
pub struct GermanyNationalId;

const GERMANY_NATIONAL_ID_LENGTH: usize = 11;
const SEPARATORS: &[char] = &['-', '/'];
const MAX_OCCURRENCES_OF_A_DIGIT: usize = 3;
const MAX_CONSECUTIVE_EQUAL_DIGITS: usize = 2;

// https://www.zfa.deutsche-rentenversicherung-bund.de/de/Inhalt/public/4_ID/47_Pruefziffernberechnung/001_Pruefziffernberechnung.pdf
fn check_digit(identifier: &[u32]) -> u32 {
    let mut remainder_mod_eleven = 10;
    for digit in identifier {
        let mut remainder_mod_ten = (digit + remainder_mod_eleven) % 10;
        if remainder_mod_ten == 0 {
            remainder_mod_ten = 10;
        }
        remainder_mod_eleven = (2 * remainder_mod_ten) % 11;
    }
    match 11 - remainder_mod_eleven {
        10 => 0,
        digit => digit,
    }
}

fn has_too_many_equal_digits(identifier: &[u32]) -> bool {
    let mut occurrences = [0usize; 10];
    for digit in identifier {
        occurrences[*digit as usize] += 1;
    }
    occurrences.iter().any(|count| *count > MAX_OCCURRENCES_OF_A_DIGIT)
}

fn has_a_run_of_equal_digits(identifier: &[u32]) -> bool {
    identifier
        .windows(MAX_CONSECUTIVE_EQUAL_DIGITS + 1)
        .any(|run| run.iter().all(|digit| *digit == run[0]))
}

impl NationalIdCodec for GermanyNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, SEPARATORS, false)
    }

    fn is_valid(&self, id: &str) -> bool {
        let id = self.sanitize(id);
        if !is_numeric_of_length(&id, GERMANY_NATIONAL_ID_LENGTH) {
            return false;
        }
        let digits: Vec<u32> = id.chars().filter_map(|c| c.to_digit(10)).collect();
        let (identifier, actual_check_digit) = digits.split_at(GERMANY_NATIONAL_ID_LENGTH - 1);

        // a leading zero marks test identifiers
        digits[0] != 0
            && check_digit(identifier) == actual_check_digit[0]
            && !has_too_many_equal_digits(identifier)
            && !has_a_run_of_equal_digits(identifier)
    }
}
