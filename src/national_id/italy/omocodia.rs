//! Omocodia: when two people would get the same first 15 characters, the registry differentiates
//! the later ones by replacing digits with letters, starting from the rightmost digit.
//! See http://www.dossier.net/utilities/codice-fiscale/decreto1974_2227.html (art. 6)

const DIGIT_POSITIONS: [usize; 7] = [6, 7, 9, 10, 12, 13, 14];
const DIGIT_SUBSTITUTIONS: &str = "LMNPQRSTUV";

/// Replace the substitution letters at digit positions by the digits they stand for.
///
/// Ids that are not 16 ASCII characters long are returned unchanged.
pub fn restore_digits(id: &str) -> String {
    if id.len() != super::ITALY_NATIONAL_ID_LENGTH || !id.is_ascii() {
        return id.to_string();
    }

    let mut chars: Vec<char> = id.chars().collect();
    for position in DIGIT_POSITIONS {
        if let Some(digit) = DIGIT_SUBSTITUTIONS
            .find(chars[position])
            .and_then(|idx| char::from_digit(idx as u32, 10))
        {
            chars[position] = digit;
        }
    }
    chars.into_iter().collect()
}
