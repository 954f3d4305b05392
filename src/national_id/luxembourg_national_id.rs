use crate::checksum::{CheckDigit, LuhnChecksum, VerhoeffChecksum};
use crate::national_id::{is_numeric_of_length, strip_separators, NationalIdCodec};

pub struct LuxembourgNationalId;

const LUXEMBOURG_NATIONAL_ID_LENGTH: usize = 13;

impl NationalIdCodec for LuxembourgNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, &['-'], false)
    }

    fn is_valid(&self, id: &str) -> bool {
        /*
         * Luxembourg uses a 13-digit identification code,
         * consisting of the birth date formatted as YYYYMMDD followed by a number XXX
         * ensuring persons born on the same date have a unique national ID,
         * then a Luhn check digit of YYYYMMDDXXX
         * and finally a Verhoeff check digit of YYYYMMDDXXX.
         */
        let id = self.sanitize(id);
        if !is_numeric_of_length(&id, LUXEMBOURG_NATIONAL_ID_LENGTH) {
            return false;
        }

        let (payload, check_digits) = id.split_at(LUXEMBOURG_NATIONAL_ID_LENGTH - 2);
        let mut check_digits = check_digits.chars().filter_map(|c| c.to_digit(10));
        let luhn_digit = check_digits.next();
        let verhoeff_digit = check_digits.next();

        luhn_digit.is_some()
            && LuhnChecksum::DECIMAL.compute_check_digit(payload) == luhn_digit
            && verhoeff_digit.is_some()
            && VerhoeffChecksum.compute_check_digit(payload) == verhoeff_digit
    }
}
