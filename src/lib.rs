// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod citizen;
mod config;
mod country;
mod date;
mod error;
mod generator;
mod national_id;
mod national_ids;
mod observability;

// This is the public API of the national ids library
pub use checksum::{CheckDigit, LuhnChecksum, VerhoeffChecksum};
pub use citizen::{Citizen, CitizenBuilder, Sex};
pub use config::NationalIdsConfig;
pub use country::Country;
pub use date::TwoDigitYear;
pub use error::{GenerateError, RegionTableError};
pub use generator::{DenmarkNationalIdGenerator, NationalIdGenerator};
pub use national_id::italy::{ItalianRegions, RegionLookup};
pub use national_id::{
    BelgiumNationalId, BrazilNationalId, CanadaNationalId, DenmarkNationalId, FranceNationalId,
    GermanyNationalId, ItalyNationalId, LuxembourgNationalId, MexicoNationalId, NationalIdCodec,
    PortugalNationalId, SpainNationalId, UsaNationalId,
};
pub use national_ids::{NationalIds, NationalIdsBuilder};
pub use observability::labels::Labels;
