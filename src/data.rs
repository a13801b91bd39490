// Pet Lookup Catalog Data
// Loads and validates the pet catalog from JSON

use crate::distance::normalize;
use crate::types::{CatalogEntry, CatalogError, Value};
use crate::vocab::ValueKey;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Embedded sample catalog (JSON array of pet records)
pub const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

/// A record as it appears in the catalog source
///
/// Value fields are kept loosely typed here and checked in `into_entry`;
/// fields outside the key vocabulary are dropped.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,

    #[serde(default)]
    rarity: Option<String>,

    #[serde(flatten)]
    fields: serde_json::Map<String, serde_json::Value>,
}

impl RawEntry {
    fn into_entry(self) -> Result<CatalogEntry, CatalogError> {
        let mut values = BTreeMap::new();

        for key in ValueKey::ALL {
            let value = match self.fields.get(key.code()) {
                None | Some(serde_json::Value::Null) => continue,
                Some(serde_json::Value::Number(n)) => Value::Number(n.clone()),
                Some(serde_json::Value::String(s)) => Value::Text(s.clone()),
                Some(_) => {
                    return Err(CatalogError::InvalidValue {
                        name: self.name,
                        key,
                    })
                }
            };
            values.insert(key, value);
        }

        Ok(CatalogEntry {
            name: self.name,
            rarity: self.rarity.unwrap_or_default(),
            values,
        })
    }
}

/// Immutable snapshot of the pet catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog from entries, rejecting blank or duplicate names
    ///
    /// Names are compared case-insensitively after trimming.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for (index, entry) in entries.iter().enumerate() {
            let name = normalize(&entry.name);
            if name.is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if !seen.insert(name) {
                return Err(CatalogError::DuplicateName {
                    name: entry.name.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Parse a JSON array of pet records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(RawEntry::into_entry)
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Self::new(entries)?;
        info!(entries = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Read and parse a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// The embedded sample catalog
    pub fn sample() -> Result<Self, CatalogError> {
        Self::from_json_str(SAMPLE_CATALOG)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summary of what the catalog holds
    pub fn info(&self) -> CatalogInfo {
        let mut key_counts = BTreeMap::new();
        for entry in &self.entries {
            for key in entry.values.keys() {
                *key_counts.entry(*key).or_insert(0) += 1;
            }
        }

        CatalogInfo {
            entries: self.entries.len(),
            key_counts,
        }
    }
}

/// Information about a loaded catalog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogInfo {
    /// Number of pets
    pub entries: usize,
    /// How many pets carry each value key
    pub key_counts: BTreeMap<ValueKey, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_loads() {
        let catalog = Catalog::sample().unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.entries()[0].name, "Shadow Dragon");
    }

    #[test]
    fn test_parse_keeps_only_vocabulary_keys() {
        let catalog = Catalog::from_json_str(
            r#"[{"id": 7, "name": "Owl", "rarity": "legendary", "image": "owl.png", "rfd": 500, "d": 0}]"#,
        )
        .unwrap();

        let owl = catalog.get(0).unwrap();
        assert_eq!(owl.rarity, "legendary");
        assert_eq!(owl.values.len(), 2);
        assert_eq!(owl.value(ValueKey::Rfd), Some(&Value::from(500)));
        assert_eq!(owl.value(ValueKey::D), Some(&Value::from(0)));
    }

    #[test]
    fn test_null_means_absent() {
        let catalog = Catalog::from_json_str(r#"[{"name": "Owl", "n": null, "m": "O/C"}]"#).unwrap();
        let owl = catalog.get(0).unwrap();
        assert_eq!(owl.value(ValueKey::N), None);
        assert_eq!(owl.value(ValueKey::M), Some(&Value::from("O/C")));
        assert_eq!(owl.rarity, "");
    }

    #[test]
    fn test_invalid_value_rejected() {
        let err = Catalog::from_json_str(r#"[{"name": "Owl", "rd": true}]"#).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidValue { key: ValueKey::Rd, .. }
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Catalog::from_json_str(r#"[{"name": "Owl"}, {"name": " owl "}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Catalog::from_json_str(r#"[{"name": "Owl"}, {"name": "  "}]"#).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName { index: 1 }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Catalog::from_path("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_info_counts_keys() {
        let catalog = Catalog::from_json_str(
            r#"[{"name": "Owl", "d": 1, "rfd": 5}, {"name": "Crow", "d": 2}]"#,
        )
        .unwrap();
        let info = catalog.info();
        assert_eq!(info.entries, 2);
        assert_eq!(info.key_counts.get(&ValueKey::D), Some(&2));
        assert_eq!(info.key_counts.get(&ValueKey::Rfd), Some(&1));
        assert_eq!(info.key_counts.get(&ValueKey::M), None);
    }
}
