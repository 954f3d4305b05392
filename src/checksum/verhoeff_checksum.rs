use crate::checksum::CheckDigit;

/// See https://en.wikipedia.org/wiki/Verhoeff_algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerhoeffChecksum;

const MULT_TABLE: [[usize; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const PERM_TABLE: [[usize; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

const INVERSE_TABLE: [usize; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

impl VerhoeffChecksum {
    fn running_value<I>(chars: I) -> Option<usize>
    where
        I: DoubleEndedIterator<Item = char>,
    {
        let mut c = 0;
        let mut i = 0;

        for char in chars.rev() {
            let digit = char.to_digit(10)? as usize;
            c = MULT_TABLE[c][PERM_TABLE[i % 8][digit]];
            i += 1;
        }

        if i == 0 {
            return None;
        }
        Some(c)
    }
}

impl CheckDigit for VerhoeffChecksum {
    fn is_valid(&self, input: &str) -> bool {
        VerhoeffChecksum::running_value(input.chars()) == Some(0)
    }

    fn compute_check_digit(&self, payload: &str) -> Option<u32> {
        if payload.is_empty() {
            return None;
        }
        let c = VerhoeffChecksum::running_value(payload.chars().chain(std::iter::once('0')))?;
        Some(INVERSE_TABLE[c] as u32)
    }
}
