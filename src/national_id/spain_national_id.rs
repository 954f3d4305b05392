use crate::checksum::parse_digits;
use crate::national_id::{strip_separators, NationalIdCodec};

/// Spanish DNI (8 digits) and NIE (X, Y or Z followed by 7 digits), each with a control letter.
pub struct SpainNationalId;

const SPAIN_NATIONAL_ID_LENGTH: usize = 9;
const CONTROL_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// The NIE prefix letter stands for a leading digit.
fn nie_prefix_digit(c: char) -> Option<char> {
    match c {
        'X' => Some('0'),
        'Y' => Some('1'),
        'Z' => Some('2'),
        _ => None,
    }
}

impl NationalIdCodec for SpainNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, &['-'], true)
    }

    fn is_valid(&self, id: &str) -> bool {
        let id = self.sanitize(id);
        if id.len() != SPAIN_NATIONAL_ID_LENGTH {
            return false;
        }
        let mut chars = id.chars();
        let Some(control_letter) = chars.next_back() else {
            return false;
        };

        let number: String = chars
            .enumerate()
            .map(|(idx, c)| match idx {
                0 => nie_prefix_digit(c).unwrap_or(c),
                _ => c,
            })
            .collect();
        let Some(number) = parse_digits(&number) else {
            return false;
        };

        let expected = CONTROL_LETTERS[(number % CONTROL_LETTERS.len() as u64) as usize];
        control_letter == expected as char
    }
}
