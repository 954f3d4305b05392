use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;

/// Serializable settings for [`crate::NationalIds`].
#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NationalIdsConfig {
    /// Two digit years resolve into the 100 years before this one. Defaults to the current year.
    #[serde(default)]
    pub reference_year: Option<i32>,

    /// Labels attached to every metric.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl NationalIdsConfig {
    pub fn reference_year(&self, reference_year: i32) -> Self {
        self.mutate_clone(|x| x.reference_year = Some(reference_year))
    }

    pub fn label(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.mutate_clone(|x| {
            x.labels.insert(key, value);
        })
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
