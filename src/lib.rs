//! # Pet Lookup: Typo-Tolerant Pet Value Search
//!
//! Resolves a free-text query such as `"shadw dragon neon fly"` to a catalog
//! pet and the valuation variant the modifier words select.
//!
//! ## Query Syntax
//!
//! - Any word that is not a modifier is part of the pet name
//! - Modifier words: `regular`, `ride`, `fly`, `neon`, `mega`, `rare`
//! - Modifiers may appear anywhere and in any order
//! - Pet names tolerate up to 3 single-character edits by default
//!
//! ## Result Shapes
//!
//! 1. **AllValues** - no modifiers: every variant the pet has
//! 2. **SingleValue** - the modifier combination names one variant
//! 3. **PartialValues** - no such combination: each modifier looked up alone
//! 4. **NotFound** - no pet name within the acceptance threshold
//!
//! ## Example Usage
//!
//! ```
//! use pet_lookup::{Catalog, PetLookup, ValueKey, ValueResult};
//!
//! let catalog = Catalog::sample()?;
//! let lookup = PetLookup::with_catalog(catalog);
//!
//! match lookup.lookup("fly owl ride") {
//!     ValueResult::SingleValue { key, .. } => assert_eq!(key, ValueKey::Rfd),
//!     other => panic!("unexpected {:?}", other),
//! }
//!
//! assert!(!lookup.lookup("giraffe").is_found());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Edit Distance** - Levenshtein distance between normalized names
//! - **Name Matcher** - Closest catalog name within the threshold
//! - **Query Parser** - Splits input into name and modifier words
//! - **Modifier Rules** - `mega` outranks `neon`
//! - **Combination Resolver** - Tries every modifier ordering against the key table
//! - **PetLookup API** - Main entry point combining all components

pub mod combination;
pub mod config;
pub mod data;
pub mod distance;
pub mod matcher;
pub mod query;
pub mod rules;
pub mod search;
pub mod types;
pub mod vocab;

// Re-export main types and functions for convenience
pub use combination::resolve_value;
pub use config::LookupConfig;
pub use data::{Catalog, CatalogInfo};
pub use distance::edit_distance;
pub use matcher::{NameMatch, NameMatcher};
pub use query::parse_query;
pub use rules::resolve_conflicts;
pub use search::PetLookup;
pub use types::{
    CatalogEntry, CatalogError, FieldOutcome, ModifierSet, ParsedQuery, PartialField, Value,
    ValueResult,
};
pub use vocab::{Modifier, ValueKey};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
