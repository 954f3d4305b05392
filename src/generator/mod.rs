mod denmark_national_id_generator;

pub use crate::generator::denmark_national_id_generator::DenmarkNationalIdGenerator;

use crate::error::GenerateError;
use crate::Citizen;

/// Builds a valid national id for a citizen.
pub trait NationalIdGenerator: Send + Sync {
    fn generate(&self, citizen: &Citizen) -> Result<String, GenerateError>;
}
