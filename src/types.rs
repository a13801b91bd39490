// Pet Lookup Type Definitions
// Catalog records, parsed queries, lookup results and load errors

use crate::vocab::{Modifier, ValueKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A catalog value: numeric where the source has a number, text otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// One pet in the catalog
///
/// A key missing from `values` means the variant does not exist for this
/// pet, which is distinct from a key present with value `0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub rarity: String,
    pub values: BTreeMap<ValueKey, Value>,
}

impl CatalogEntry {
    /// Create an entry with no values
    pub fn new(name: impl Into<String>, rarity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rarity: rarity.into(),
            values: BTreeMap::new(),
        }
    }

    /// Set a value
    pub fn with_value(mut self, key: ValueKey, value: impl Into<Value>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    /// Get the value for a key if the variant exists
    pub fn value(&self, key: ValueKey) -> Option<&Value> {
        self.values.get(&key)
    }
}

/// Duplicate-free modifiers in the order they were first typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifierSet(Vec<Modifier>);

impl ModifierSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a modifier; a repeat is ignored
    pub fn insert(&mut self, modifier: Modifier) -> bool {
        if self.0.contains(&modifier) {
            return false;
        }
        self.0.push(modifier);
        true
    }

    pub fn remove(&mut self, modifier: Modifier) -> bool {
        let before = self.0.len();
        self.0.retain(|m| *m != modifier);
        self.0.len() != before
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Modifier] {
        &self.0
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut set = ModifierSet::new();
        for modifier in iter {
            set.insert(modifier);
        }
        set
    }
}

/// Parsed query: the name portion and the recognized modifiers
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Non-modifier tokens, lowercased and single-space joined
    pub name: String,

    /// Modifier words as typed, in order (duplicates kept)
    pub modifier_words: Vec<String>,

    /// Modifiers recognized from `modifier_words`
    pub modifiers: ModifierSet,
}

/// Outcome for one field of a per-modifier fallback
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum FieldOutcome {
    Available(Value),
    Unavailable,
}

/// One requested modifier in a per-field fallback
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartialField {
    pub modifier: Modifier,

    /// The modifier's own key; `None` for words that select no variant
    pub key: Option<ValueKey>,

    pub outcome: FieldOutcome,
}

/// Structured result of a lookup, handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueResult {
    /// No catalog entry within the acceptance threshold
    NotFound {
        /// Raw query text as supplied
        query: String,
        /// Name portion that failed to match
        name: String,
    },

    /// No modifiers: every variant present on the entry
    AllValues {
        name: String,
        rarity: String,
        values: BTreeMap<ValueKey, Value>,
    },

    /// A full modifier combination matched one key
    SingleValue {
        name: String,
        rarity: String,
        key: ValueKey,
        value: Value,
    },

    /// No combination matched: each modifier looked up on its own
    PartialValues {
        name: String,
        rarity: String,
        fields: Vec<PartialField>,
    },
}

impl ValueResult {
    pub fn is_found(&self) -> bool {
        !matches!(self, ValueResult::NotFound { .. })
    }

    /// Matched pet name, if any
    pub fn pet_name(&self) -> Option<&str> {
        match self {
            ValueResult::NotFound { .. } => None,
            ValueResult::AllValues { name, .. }
            | ValueResult::SingleValue { name, .. }
            | ValueResult::PartialValues { name, .. } => Some(name),
        }
    }

    /// Display message for a failed match
    pub fn not_found_message(&self) -> Option<String> {
        match self {
            ValueResult::NotFound { name, .. } => {
                Some(format!("No pet found matching \"{}\"", name))
            }
            _ => None,
        }
    }
}

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog entry #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("Duplicate pet name '{name}' in catalog")]
    DuplicateName { name: String },

    #[error("Invalid value for field '{key}' of '{name}': expected number or string")]
    InvalidValue { name: String, key: ValueKey },
}
