use crate::checksum::{CheckDigit, LuhnChecksum};
use crate::national_id::{is_numeric_of_length, strip_separators, NationalIdCodec};

/// Canadian Social Insurance Number, 9 digits protected by a Luhn check digit.
pub struct CanadaNationalId;

const CANADA_NATIONAL_ID_LENGTH: usize = 9;

impl NationalIdCodec for CanadaNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, &['-'], false)
    }

    fn is_valid(&self, id: &str) -> bool {
        let id = self.sanitize(id);
        is_numeric_of_length(&id, CANADA_NATIONAL_ID_LENGTH) && LuhnChecksum::DECIMAL.is_valid(&id)
    }
}

#[cfg(test)]
mod test {
    use crate::national_id::*;

    #[test]
    fn test_canada_sin() {
        let valid_ids = vec!["046 454 286", "046-454-286", "046454286", "130692544"];
        for id in valid_ids {
            println!("testing for input {}", id);
            assert!(CanadaNationalId.is_valid(id));
        }

        let invalid_ids = vec![
            "046 454 287",
            "046 454 28",
            "046 454 2860",
            "O46 454 286",
            "",
        ];
        for id in invalid_ids {
            println!("testing for input {}", id);
            assert!(!CanadaNationalId.is_valid(id));
        }
    }
}
