use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Countries with a national id codec, identified by their ISO 3166-1 alpha-2 code.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Country {
    #[serde(rename = "BE")]
    #[strum(serialize = "BE")]
    Belgium,
    #[serde(rename = "BR")]
    #[strum(serialize = "BR")]
    Brazil,
    #[serde(rename = "CA")]
    #[strum(serialize = "CA")]
    Canada,
    #[serde(rename = "DK")]
    #[strum(serialize = "DK")]
    Denmark,
    #[serde(rename = "FR")]
    #[strum(serialize = "FR")]
    France,
    #[serde(rename = "DE")]
    #[strum(serialize = "DE")]
    Germany,
    #[serde(rename = "IT")]
    #[strum(serialize = "IT")]
    Italy,
    #[serde(rename = "LU")]
    #[strum(serialize = "LU")]
    Luxembourg,
    #[serde(rename = "MX")]
    #[strum(serialize = "MX")]
    Mexico,
    #[serde(rename = "PT")]
    #[strum(serialize = "PT")]
    Portugal,
    #[serde(rename = "ES")]
    #[strum(serialize = "ES")]
    Spain,
    #[serde(rename = "US")]
    #[strum(serialize = "US")]
    Usa,
}

impl Country {
    /// The ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Whether national ids can be generated for this country.
    pub fn has_generator(&self) -> bool {
        matches!(self, Country::Denmark)
    }
}
