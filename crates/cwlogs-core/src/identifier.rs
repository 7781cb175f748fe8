use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Composite key naming one resource instance.
///
/// Each entry maps a property path (e.g. `/properties/FilterName`) to its
/// value. Entries are kept sorted, so two identifiers built from the same
/// fields in a different order serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimaryIdentifier {
    entries: BTreeMap<String, String>,
}

impl PrimaryIdentifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `/properties/<name>` entry. Absent values are skipped so that an
    /// identifier for a model without a name never matches one that has it.
    pub fn with(mut self, property: &str, value: Option<&str>) -> Self {
        if let Some(v) = value {
            self.entries
                .insert(format!("/properties/{property}"), v.to_string());
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .get(&format!("/properties/{property}"))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Same key set, same value per key.
    pub fn similar(&self, other: &PrimaryIdentifier) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Display for PrimaryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let json = serde_json::to_string(&self.entries).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
