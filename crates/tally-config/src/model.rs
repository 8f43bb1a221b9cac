use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tally_core::CatalogLabels;
use tally_domain::TimeFrame;

/// Stores user-configurable dashboard preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub default_time_frame: TimeFrame,
    /// Translation overrides keyed by label key (`mon`, `jan`, `month_weeks`, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub label_overrides: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency_symbol: Self::default_currency_symbol(),
            default_time_frame: TimeFrame::default(),
            label_overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    /// Label lookup honoring the configured overrides, English otherwise.
    pub fn labels(&self) -> CatalogLabels {
        CatalogLabels::new(self.label_overrides.clone())
    }
}
