use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Sex {
    Male,
    Female,
}

/// Demographic data decoded from (or used to generate) a national id.
///
/// Every field is optional: countries encode different subsets, and some encode an explicit
/// "unknown" for the month or day of birth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Citizen {
    sex: Option<Sex>,
    year_of_birth: Option<i32>,
    month_of_birth: Option<u32>,
    day_of_birth: Option<u32>,
    place_of_birth: Option<String>,
}

impl Citizen {
    pub fn builder() -> CitizenBuilder {
        CitizenBuilder::default()
    }

    pub fn sex(&self) -> Option<Sex> {
        self.sex
    }

    pub fn year_of_birth(&self) -> Option<i32> {
        self.year_of_birth
    }

    pub fn month_of_birth(&self) -> Option<u32> {
        self.month_of_birth
    }

    pub fn day_of_birth(&self) -> Option<u32> {
        self.day_of_birth
    }

    pub fn place_of_birth(&self) -> Option<&str> {
        self.place_of_birth.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CitizenBuilder {
    inner: Citizen,
}

impl CitizenBuilder {
    pub fn sex(&self, sex: Sex) -> Self {
        self.mutate_clone(|x| x.sex = Some(sex))
    }

    pub fn year_of_birth(&self, year: i32) -> Self {
        self.mutate_clone(|x| x.year_of_birth = Some(year))
    }

    pub fn month_of_birth(&self, month: u32) -> Self {
        self.mutate_clone(|x| x.month_of_birth = Some(month))
    }

    pub fn day_of_birth(&self, day: u32) -> Self {
        self.mutate_clone(|x| x.day_of_birth = Some(day))
    }

    pub fn place_of_birth(&self, place: impl Into<String>) -> Self {
        let place = place.into();
        self.mutate_clone(|x| x.place_of_birth = Some(place))
    }

    /// Optional setters, for decoders where a field may be missing.
    pub fn maybe_month_of_birth(&self, month: Option<u32>) -> Self {
        self.mutate_clone(|x| x.month_of_birth = month)
    }

    pub fn maybe_day_of_birth(&self, day: Option<u32>) -> Self {
        self.mutate_clone(|x| x.day_of_birth = day)
    }

    pub fn maybe_place_of_birth(&self, place: Option<&str>) -> Self {
        self.mutate_clone(|x| x.place_of_birth = place.map(str::to_owned))
    }

    pub fn maybe_sex(&self, sex: Option<Sex>) -> Self {
        self.mutate_clone(|x| x.sex = sex)
    }

    pub fn build(&self) -> Citizen {
        self.inner.clone()
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Citizen)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone.inner);
        clone
    }
}
