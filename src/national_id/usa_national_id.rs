use crate::checksum::parse_digits;
use crate::national_id::{is_numeric_of_length, strip_separators, NationalIdCodec};

/// US Social Security Number, AAA-GG-SSSS.
pub struct UsaNationalId;

const USA_NATIONAL_ID_LENGTH: usize = 9;

// numbers that were used in advertising and are known to be void
const BLACKLISTED_IDS: &[&str] = &["078051120", "219099999", "457555462"];

impl NationalIdCodec for UsaNationalId {
    fn sanitize(&self, raw: &str) -> String {
        strip_separators(raw, &['-'], false)
    }

    fn is_valid(&self, id: &str) -> bool {
        let id = self.sanitize(id);
        if !is_numeric_of_length(&id, USA_NATIONAL_ID_LENGTH)
            || BLACKLISTED_IDS.contains(&id.as_str())
        {
            return false;
        }

        let (Some(area), Some(group), Some(serial)) = (
            parse_digits(&id[..3]),
            parse_digits(&id[3..5]),
            parse_digits(&id[5..]),
        ) else {
            return false;
        };
        area != 0 && area != 666 && area < 900 && group != 0 && serial != 0
    }
}
