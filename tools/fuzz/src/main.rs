use afl::fuzz;
use national_ids::{Country, NationalIds};
use strum::IntoEnumIterator;

#[cfg(not(feature = "manual_test"))]
fn main() {
    let national_ids = NationalIds::builder().reference_year(2020).build();
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(&national_ids, data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let national_ids = NationalIds::builder().reference_year(2020).build();
    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&national_ids, &input);
}

fn run_raw_fuzz(national_ids: &NationalIds, bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    for country in Country::iter() {
        run_fuzz(national_ids, country, input);
    }
    Some(())
}

fn run_fuzz(national_ids: &NationalIds, country: Country, input: &str) {
    let sanitized = national_ids.sanitize(country, input).unwrap();
    let sanitized_twice = national_ids.sanitize(country, sanitized.as_str()).unwrap();
    assert_eq!(sanitized, sanitized_twice, "sanitizing is not idempotent");

    let valid = national_ids.is_valid(country, input);
    assert_eq!(valid, national_ids.is_valid(country, sanitized.as_str()));

    if let Some(citizen) = national_ids.extract(country, input) {
        assert!(valid, "{country} decoded an invalid id: {input:?}");
        if let Ok(generated) = national_ids.generate(country, &citizen) {
            assert!(national_ids.is_valid(country, generated.as_str()));
        }
    }
}
