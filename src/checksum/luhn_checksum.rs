use crate::checksum::CheckDigit;

const DEFAULT_RADIX: u32 = 10;

/// Luhn checksum, and its Luhn mod N generalisation for alphanumeric alphabets.
///
/// Characters are mapped to their value in `radix` (so `Z` is 35 in base 36). Every second value
/// starting from the right is doubled, and reduced by 9 when the doubled value has two digits.
/// The input is valid when the sum is a multiple of 10.
/// See https://en.wikipedia.org/wiki/Luhn_algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuhnChecksum {
    radix: u32,
}

impl LuhnChecksum {
    pub const DECIMAL: LuhnChecksum = LuhnChecksum {
        radix: DEFAULT_RADIX,
    };

    /// Luhn mod `radix`, for use in constants. See [`LuhnChecksum::try_with_radix`] for radixes
    /// that are not known in advance.
    ///
    /// # Panics
    ///
    /// If `radix` is not in `2..=36`.
    pub const fn with_radix(radix: u32) -> Self {
        match LuhnChecksum::try_with_radix(radix) {
            Some(checksum) => checksum,
            None => panic!("radix must be in 2..=36"),
        }
    }

    /// `None` if `radix` is not in `2..=36`.
    pub const fn try_with_radix(radix: u32) -> Option<Self> {
        if radix >= 2 && radix <= 36 {
            Some(LuhnChecksum { radix })
        } else {
            None
        }
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    fn sum<I>(&self, chars: I) -> Option<u32>
    where
        I: DoubleEndedIterator<Item = char>,
    {
        let mut sum: u32 = 0;
        let mut is_doubled = false;
        let mut count = 0;

        for c in chars.rev() {
            let mut value = c.to_digit(self.radix)?;
            if is_doubled {
                value *= 2;
                if value > 9 {
                    value -= 9;
                }
            }
            sum += value;
            is_doubled = !is_doubled;
            count += 1;
        }

        if count == 0 {
            return None;
        }
        Some(sum)
    }
}

impl Default for LuhnChecksum {
    fn default() -> Self {
        LuhnChecksum::DECIMAL
    }
}

impl CheckDigit for LuhnChecksum {
    fn is_valid(&self, input: &str) -> bool {
        match self.sum(input.chars()) {
            Some(sum) => sum % 10 == 0,
            None => false,
        }
    }

    fn compute_check_digit(&self, payload: &str) -> Option<u32> {
        if payload.is_empty() {
            return None;
        }
        // the placeholder takes the check digit's position so the doubling lines up
        let sum = self.sum(payload.chars().chain(std::iter::once('0')))?;
        Some((sum * 9) % 10)
    }
}
