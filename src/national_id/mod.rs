mod belgium_national_id;
mod brazil_national_id;
mod canada_national_id;
pub(crate) mod denmark_national_id;
mod france_national_id;
mod germany_national_id;
pub mod italy;
mod luxembourg_national_id;
mod mexico_national_id;
mod portugal_national_id;
mod spain_national_id;
mod usa_national_id;

pub use crate::national_id::belgium_national_id::BelgiumNationalId;
pub use crate::national_id::brazil_national_id::BrazilNationalId;
pub use crate::national_id::canada_national_id::CanadaNationalId;
pub use crate::national_id::denmark_national_id::DenmarkNationalId;
pub use crate::national_id::france_national_id::FranceNationalId;
pub use crate::national_id::germany_national_id::GermanyNationalId;
pub use crate::national_id::italy::ItalyNationalId;
pub use crate::national_id::luxembourg_national_id::LuxembourgNationalId;
pub use crate::national_id::mexico_national_id::MexicoNationalId;
pub use crate::national_id::portugal_national_id::PortugalNationalId;
pub use crate::national_id::spain_national_id::SpainNationalId;
pub use crate::national_id::usa_national_id::UsaNationalId;

use crate::Citizen;

/// Validation and decoding for the national id of one country.
///
/// `is_valid` and `extract` accept raw input and sanitize it first; since sanitizing is
/// idempotent, passing an already sanitized id gives the same result.
pub trait NationalIdCodec: Send + Sync {
    /// Strip the separators users type between groups of characters and normalize case.
    fn sanitize(&self, raw: &str) -> String;

    fn is_valid(&self, id: &str) -> bool;

    /// The demographic data encoded in `id`, or `None` if `id` is invalid or the country
    /// does not encode any.
    fn extract(&self, _id: &str) -> Option<Citizen> {
        None
    }
}

/// Remove whitespace and `separators` from `raw`, uppercasing ASCII letters if asked to.
fn strip_separators(raw: &str, separators: &[char], uppercase: bool) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && !separators.contains(c))
        .map(|c| if uppercase { c.to_ascii_uppercase() } else { c })
        .collect()
}

/// Whether `id` has exactly `len` characters, all ASCII digits.
fn is_numeric_of_length(id: &str, len: usize) -> bool {
    id.len() == len && id.chars().all(|c| c.is_ascii_digit())
}

/// Two ASCII digits at `start` as a number. Callers have already checked the characters.
fn two_digits_at(id: &str, start: usize) -> Option<u32> {
    id.get(start..start + 2)?.parse().ok()
}
