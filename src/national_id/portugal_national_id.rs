use crate::checksum::{CheckDigit, LuhnChecksum};
use crate::national_id::{strip_separators, NationalIdCodec};

/// Portuguese Citizen Card number: 9 digit civil id, 2 letters for the version of the card and a
/// final check digit, validated as a whole with Luhn over base 36 numerals.
pub struct PortugalNationalId;

const PORTUGAL_NATIONAL_ID_LENGTH: usize = 12;
const BASE_36: LuhnChecksum = LuhnChecksum::with_radix(36);

impl NationalIdCodec for PortugalNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, &[], true)
    }

    fn is_valid(&self, id: &str) -> bool {
        let id = self.sanitize(id);
        id.len() == PORTUGAL_NATIONAL_ID_LENGTH && BASE_36.is_valid(&id)
    }
}

#[cfg(test)]
mod test {
    use crate::national_id::*;

    #[test]
    fn test_portugal_citizen_card() {
        let valid_ids = vec![
            " 11084129 8 ZX8 ",
            "154203556ZX9",
            "154203556zx9",
            "176539174ZZ5",
            "174886721ZX1",
            "148984754ZY5",
        ];
        for id in valid_ids {
            println!("testing for input {}", id);
            assert!(PortugalNationalId.is_valid(id));
        }

        let invalid_ids = vec![
            "154A03556ZX9",
            "154203556ZX8",
            "154203556ZX",
            "154203556-ZX9",
            "",
        ];
        for id in invalid_ids {
            println!("testing for input {}", id);
            assert!(!PortugalNationalId.is_valid(id));
        }
    }
}
