use crate::national_id::{is_numeric_of_length, strip_separators, NationalIdCodec};

/// Brazilian CPF (Cadastro de Pessoas Físicas): 9 digits followed by 2 check digits.
pub struct BrazilNationalId;

const BRAZIL_NATIONAL_ID_LENGTH: usize = 11;
const SEPARATORS: &[char] = &['.', '-'];

/// Both CPF check digits, computed over the first 9 digits of `id`.
fn check_digits(id: &str) -> Option<(u32, u32)> {
    let mut v1: u32 = 0;
    let mut v2: u32 = 0;
    // digits are weighted from the rightmost payload digit
    let payload = id.get(..BRAZIL_NATIONAL_ID_LENGTH - 2)?;
    for (digit_idx, c) in payload.chars().rev().enumerate() {
        let x = c.to_digit(10)?;
        v1 += x * (9 - (digit_idx as u32 % 10));
        v2 += x * (9 - ((digit_idx as u32 + 1) % 10));
    }
    v1 = (v1 % 11) % 10;
    v2 += v1 * 9;
    v2 = (v2 % 11) % 10;
    Some((v1, v2))
}

impl NationalIdCodec for BrazilNationalId {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, SEPARATORS, false)
    }

    fn is_valid(&self, id: &str) -> bool {
        let id = self.sanitize(id);
        if !is_numeric_of_length(&id, BRAZIL_NATIONAL_ID_LENGTH) {
            return false;
        }
        let mut actual = id[9..].chars().filter_map(|c| c.to_digit(10));
        match (check_digits(&id), actual.next(), actual.next()) {
            (Some((v1, v2)), Some(actual_v1), Some(actual_v2)) => {
                v1 == actual_v1 && v2 == actual_v2
            }
            _ => false,
        }
    }
}
