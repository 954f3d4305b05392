use crate::Country;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("year, month and day of birth and sex are required to generate a national id for {0}")]
    InsufficientData(Country),

    #[error("{year:04}-{month:02}-{day:02} is not a valid date of birth")]
    InvalidDateOfBirth { year: i32, month: u32, day: u32 },

    #[error("year of birth {year} cannot be encoded in a national id for {country}")]
    UnsupportedYearOfBirth { country: Country, year: i32 },

    /// The generator could not satisfy its own checksum. This is a defect in the generator,
    /// not a problem with the input.
    #[error("no filler digits satisfy the {country} checksum for remainder {remainder}")]
    NoFillerDigits { country: Country, remainder: u32 },

    #[error("national ids cannot be generated for {0}")]
    Unsupported(Country),
}

#[derive(Debug, Error)]
pub enum RegionTableError {
    #[error("failed to read the region table")]
    Io(#[from] std::io::Error),

    #[error("malformed region entry on line {0}")]
    MalformedLine(usize),
}
