mod luhn_checksum;
mod verhoeff_checksum;

pub use crate::checksum::luhn_checksum::LuhnChecksum;
pub use crate::checksum::verhoeff_checksum::VerhoeffChecksum;

/// A check digit scheme over a string of numerals.
pub trait CheckDigit: Send + Sync {
    /// Whether `input` (payload followed by its check digit) is valid.
    fn is_valid(&self, input: &str) -> bool;

    /// The check digit that makes `payload` valid once appended to it.
    /// `None` when `payload` is empty or contains characters outside the scheme's alphabet.
    fn compute_check_digit(&self, payload: &str) -> Option<u32>;
}

/// Parse a run of ASCII digits into an integer, `None` if any character is not a digit.
pub(crate) fn parse_digits(input: &str) -> Option<u64> {
    if input.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    for c in input.chars() {
        let digit = c.to_digit(10)?;
        value = value.checked_mul(10)?.checked_add(digit as u64)?;
    }
    Some(value)
}

/// Weighted sum of the leading digits of `input`, one weight per digit.
pub(crate) fn weighted_digit_sum(input: &str, weights: &[u32]) -> Option<u32> {
    let mut sum = 0;
    for (c, weight) in input.chars().zip(weights) {
        sum += c.to_digit(10)? * weight;
    }
    Some(sum)
}
