pub mod metrics;

use std::sync::Arc;

use rayon::prelude::*;

use crate::config::NationalIdsConfig;
use crate::date::TwoDigitYear;
use crate::error::GenerateError;
use crate::generator::{DenmarkNationalIdGenerator, NationalIdGenerator};
use crate::national_id::italy::{ItalianRegions, RegionLookup};
use crate::national_id::*;
use crate::national_ids::metrics::Metrics;
use crate::observability::labels::Labels;
use crate::{Citizen, Country};

/// Entry point dispatching to the codec of each [`Country`].
///
/// Every operation accepts either `&str` or `Option<&str>`; an absent id is never valid and never
/// decodes.
pub struct NationalIds {
    france: FranceNationalId,
    italy: ItalyNationalId,
    mexico: MexicoNationalId,
    metrics: Metrics,
}

impl NationalIds {
    pub fn builder() -> NationalIdsBuilder {
        NationalIdsBuilder::new()
    }

    pub fn codec(&self, country: Country) -> &dyn NationalIdCodec {
        match country {
            Country::Belgium => &BelgiumNationalId,
            Country::Brazil => &BrazilNationalId,
            Country::Canada => &CanadaNationalId,
            Country::Denmark => &DenmarkNationalId,
            Country::France => &self.france,
            Country::Germany => &GermanyNationalId,
            Country::Italy => &self.italy,
            Country::Luxembourg => &LuxembourgNationalId,
            Country::Mexico => &self.mexico,
            Country::Portugal => &PortugalNationalId,
            Country::Spain => &SpainNationalId,
            Country::Usa => &UsaNationalId,
        }
    }

    pub fn generator(&self, country: Country) -> Option<&dyn NationalIdGenerator> {
        match country {
            Country::Denmark => Some(&DenmarkNationalIdGenerator),
            _ => None,
        }
    }

    pub fn sanitize<'a>(&self, country: Country, id: impl Into<Option<&'a str>>) -> Option<String> {
        id.into().map(|id| self.codec(country).sanitize(id))
    }

    pub fn is_valid<'a>(&self, country: Country, id: impl Into<Option<&'a str>>) -> bool {
        let valid = match id.into() {
            Some(id) => self.codec(country).is_valid(id),
            None => false,
        };

        let metrics = self.metrics.country(country);
        if valid {
            metrics.valid.increment(1);
        } else {
            metrics.invalid.increment(1);
        }
        valid
    }

    pub fn extract<'a>(&self, country: Country, id: impl Into<Option<&'a str>>) -> Option<Citizen> {
        let citizen = id.into().and_then(|id| self.codec(country).extract(id));

        let metrics = self.metrics.country(country);
        if citizen.is_some() {
            metrics.decoded.increment(1);
        } else {
            metrics.empty.increment(1);
        }
        citizen
    }

    pub fn generate(&self, country: Country, citizen: &Citizen) -> Result<String, GenerateError> {
        let generated = match self.generator(country) {
            Some(generator) => generator.generate(citizen),
            None => Err(GenerateError::Unsupported(country)),
        };

        let metrics = self.metrics.country(country);
        match generated {
            Ok(_) => metrics.generated.increment(1),
            Err(_) => metrics.generation_errors.increment(1),
        }
        generated
    }

    /// Validates `ids` in parallel. The result is in the same order as `ids`.
    pub fn validate_batch(&self, country: Country, ids: &[&str]) -> Vec<bool> {
        ids.par_iter().map(|id| self.is_valid(country, *id)).collect()
    }
}

impl Default for NationalIds {
    fn default() -> Self {
        NationalIds::builder().build()
    }
}

pub struct NationalIdsBuilder {
    reference_year: Option<i32>,
    labels: Labels,
    italy_regions: Arc<dyn RegionLookup>,
}

impl NationalIdsBuilder {
    pub fn new() -> Self {
        NationalIdsBuilder {
            reference_year: None,
            labels: Labels::empty(),
            italy_regions: Arc::new(ItalianRegions::new()),
        }
    }

    pub fn from_config(config: &NationalIdsConfig) -> Self {
        let builder = NationalIdsBuilder::new().labels(Labels::from(&config.labels));
        match config.reference_year {
            Some(reference_year) => builder.reference_year(reference_year),
            None => builder,
        }
    }

    /// Two digit years resolve into the 100 years before `reference_year`. Defaults to the
    /// current year.
    pub fn reference_year(mut self, reference_year: i32) -> Self {
        self.reference_year = Some(reference_year);
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Place of birth names for Italian fiscal codes. Without it, Italian ids decode with no
    /// place of birth.
    pub fn italy_regions(mut self, regions: Arc<dyn RegionLookup>) -> Self {
        self.italy_regions = regions;
        self
    }

    pub fn build(self) -> NationalIds {
        let years = match self.reference_year {
            Some(reference_year) => TwoDigitYear::new(reference_year),
            None => TwoDigitYear::current(),
        };
        NationalIds {
            france: FranceNationalId::new(years),
            italy: ItalyNationalId::new(years, self.italy_regions),
            mexico: MexicoNationalId::new(years),
            metrics: Metrics::new(&self.labels),
        }
    }
}

impl Default for NationalIdsBuilder {
    fn default() -> Self {
        NationalIdsBuilder::new()
    }
}
