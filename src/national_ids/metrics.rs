use metrics::{counter, Counter};
use strum::IntoEnumIterator;

use crate::observability::labels::Labels;
use crate::Country;

const COUNTRY: &str = "country";
const OUTCOME: &str = "outcome";

pub struct CountryMetrics {
    pub valid: Counter,
    pub invalid: Counter,
    pub decoded: Counter,
    pub empty: Counter,
    pub generated: Counter,
    pub generation_errors: Counter,
}

impl CountryMetrics {
    fn new(labels: &Labels, country: Country) -> Self {
        let with_outcome = |outcome: &'static str| {
            labels.clone_with_labels(&[(COUNTRY, country.code()), (OUTCOME, outcome)])
        };
        CountryMetrics {
            valid: counter!("national_id.validations", with_outcome("valid")),
            invalid: counter!("national_id.validations", with_outcome("invalid")),
            decoded: counter!("national_id.extractions", with_outcome("decoded")),
            empty: counter!("national_id.extractions", with_outcome("empty")),
            generated: counter!("national_id.generations", with_outcome("ok")),
            generation_errors: counter!("national_id.generations", with_outcome("error")),
        }
    }
}

/// Counters for every country, registered up front so they can be incremented from any thread.
pub struct Metrics {
    by_country: Vec<CountryMetrics>,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            by_country: Country::iter()
                .map(|country| CountryMetrics::new(labels, country))
                .collect(),
        }
    }

    pub fn country(&self, country: Country) -> &CountryMetrics {
        // `Country::iter` yields variants in declaration order
        &self.by_country[country as usize]
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Metrics::new(&Labels::empty())
    }
}
