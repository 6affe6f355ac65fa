//! Static address reference data: countries, states, and the military
//! base subsets backing the enumerated fields.
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use crate::constants::{USA_LABEL, USA_VALUE};

const DEFAULT_ADDRESS_DATA: &str = include_str!("../assets/data/address.json");

/// A selectable entry for an enumerated address field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Validation failures for address reference data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("address data JSON is invalid: {0}")]
    Parse(String),
    #[error("{list} list must not be empty")]
    EmptyList { list: &'static str },
    #[error("country list must include the United States entry")]
    MissingUnitedStates,
}

/// Reference lists consumed by the policy evaluator and the rendering
/// engine's select widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AddressCatalog {
    /// Full country list, United States first.
    #[serde(default)]
    pub countries: Vec<Choice>,
    /// The 50 states plus the District of Columbia.
    #[serde(default)]
    pub states: Vec<Choice>,
    /// Armed Forces "state" entries offered for military base addresses.
    #[serde(default)]
    pub military_states: Vec<Choice>,
    /// APO/FPO/DPO city values offered for military base addresses.
    #[serde(default)]
    pub military_cities: Vec<String>,
}

impl AddressCatalog {
    /// Parse and validate a catalog supplied by the host platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or a required list
    /// is missing or empty.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every list the evaluator relies on is usable.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first empty list, or the missing
    /// United States country entry.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.countries.is_empty() {
            return Err(CatalogError::EmptyList { list: "country" });
        }
        if self.states.is_empty() {
            return Err(CatalogError::EmptyList { list: "state" });
        }
        if self.military_states.is_empty() {
            return Err(CatalogError::EmptyList { list: "military state" });
        }
        if self.military_cities.is_empty() {
            return Err(CatalogError::EmptyList { list: "military city" });
        }
        if !self.countries.iter().any(|entry| entry.label == USA_LABEL) {
            return Err(CatalogError::MissingUnitedStates);
        }
        Ok(())
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_ADDRESS_DATA).unwrap_or_default()
    }

    /// Shared built-in catalog used when the host supplies no override.
    #[must_use]
    pub fn default_catalog() -> &'static Self {
        static CATALOG: OnceLock<AddressCatalog> = OnceLock::new();
        CATALOG.get_or_init(Self::load_from_static)
    }

    /// City choices offered while a military base address is active.
    #[must_use]
    pub fn military_city_choices(&self) -> Vec<Choice> {
        self.military_cities
            .iter()
            .map(|city| Choice::new(city.clone(), city.clone()))
            .collect()
    }

    /// The forced singleton country list for a military base address.
    #[must_use]
    pub fn united_states_only(&self) -> Vec<Choice> {
        self.countries
            .iter()
            .find(|entry| entry.label == USA_LABEL)
            .cloned()
            .map_or_else(|| vec![Choice::new(USA_VALUE, USA_LABEL)], |entry| vec![entry])
    }
}
