// Pet Lookup Engine
// Main API that orchestrates all components

use crate::combination::resolve_value;
use crate::config::LookupConfig;
use crate::data::Catalog;
use crate::matcher::NameMatcher;
use crate::query::{parse_query, strip_modifiers};
use crate::rules::resolve_conflicts;
use crate::types::{CatalogEntry, ValueResult};
use rayon::prelude::*;
use tracing::debug;

/// Main pet lookup engine
///
/// Combines all components:
/// - Query parsing (name portion and modifier words)
/// - Modifier precedence rules
/// - Fuzzy name matching
/// - Combination resolution (value key selection)
///
/// Holds only the immutable catalog snapshot, so one engine can be
/// shared across threads and every query is independent.
pub struct PetLookup {
    /// Catalog snapshot
    catalog: Catalog,

    /// Name matcher over the catalog names
    matcher: NameMatcher,

    config: LookupConfig,
}

impl PetLookup {
    /// Create an engine over a loaded catalog
    pub fn new(catalog: Catalog, config: LookupConfig) -> Self {
        let matcher = NameMatcher::with_max_distance(catalog.entries(), config.max_distance);
        Self {
            catalog,
            matcher,
            config,
        }
    }

    /// Create an engine over a catalog with default settings
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(catalog, LookupConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Resolve a free-text query to a structured result
    ///
    /// # Arguments
    /// * `raw_input` - Typed or transcribed text (e.g., "shadow dragon neon fly")
    ///
    /// # Returns
    /// A `ValueResult`; failure to match is `ValueResult::NotFound`, never an error
    pub fn lookup(&self, raw_input: &str) -> ValueResult {
        // Step 1: Split into name and modifiers
        let parsed = parse_query(raw_input);
        debug!(query_name = %parsed.name, modifiers = ?parsed.modifier_words, "parsed query");

        // Step 2: Drop lower tiers shadowed by higher ones
        let modifiers = resolve_conflicts(&parsed.modifiers);

        // Step 3: Find the pet; a blank name never matches
        let entry = if parsed.name.is_empty() {
            None
        } else {
            self.resolve_entry(&parsed.name)
        };

        let Some(entry) = entry else {
            debug!(query_name = %parsed.name, "no pet within threshold");
            return ValueResult::NotFound {
                query: raw_input.to_string(),
                name: parsed.name,
            };
        };

        // Step 4: Pick the value(s)
        resolve_value(entry, &modifiers)
    }

    /// Resolve many queries in parallel, preserving input order
    pub fn lookup_batch<S>(&self, queries: &[S]) -> Vec<ValueResult>
    where
        S: AsRef<str> + Sync,
    {
        queries.par_iter().map(|q| self.lookup(q.as_ref())).collect()
    }

    /// Completion for a partially typed query
    ///
    /// Modifier words are ignored; returns the lowercased name of the
    /// closest pet within the threshold.
    pub fn suggest(&self, partial_input: &str) -> Option<String> {
        let name = strip_modifiers(partial_input);
        if name.is_empty() {
            return None;
        }
        self.resolve_entry(&name)
            .map(|entry| entry.name.to_lowercase())
    }

    /// Closest catalog entry for a name within the threshold
    pub fn resolve_entry(&self, name: &str) -> Option<&CatalogEntry> {
        let found = self.matcher.resolve(name)?;
        debug!(query_name = %name, index = found.index, distance = found.distance, "name matched");
        self.catalog.get(found.index)
    }

    /// Get statistics about the current catalog
    ///
    /// # Returns
    /// (pet count, number of distinct value keys present)
    pub fn stats(&self) -> (usize, usize) {
        let info = self.catalog.info();
        (info.entries, info.key_counts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldOutcome, Value};
    use crate::vocab::ValueKey;

    fn create_lookup() -> PetLookup {
        let catalog = Catalog::from_json_str(
            r#"[
                {"name": "Shadow Dragon", "rarity": "legendary", "d": 1200, "rfd": 1400, "rfn": 5600, "m": 19000},
                {"name": "Owl", "rarity": "legendary", "d": 120, "rfd": 500},
                {"name": "Crow", "rarity": "legendary", "rd": 100, "n": 300}
            ]"#,
        )
        .unwrap();
        PetLookup::with_catalog(catalog)
    }

    #[test]
    fn test_lookup_all_values() {
        let lookup = create_lookup();
        match lookup.lookup("owl") {
            ValueResult::AllValues { name, values, .. } => {
                assert_eq!(name, "Owl");
                assert_eq!(values.keys().copied().collect::<Vec<_>>(), vec![ValueKey::D, ValueKey::Rfd]);
            }
            other => panic!("expected AllValues, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_with_typo_and_modifiers() {
        let lookup = create_lookup();
        match lookup.lookup("shadw dragon neon fly ride") {
            ValueResult::SingleValue { name, key, value, .. } => {
                assert_eq!(name, "Shadow Dragon");
                assert_eq!(key, ValueKey::Rfn);
                assert_eq!(value, Value::from(5600));
            }
            other => panic!("expected SingleValue, got {:?}", other),
        }
    }

    #[test]
    fn test_mega_shadows_neon() {
        let lookup = create_lookup();
        match lookup.lookup("neon mega shadow dragon") {
            ValueResult::SingleValue { key, .. } => assert_eq!(key, ValueKey::M),
            other => panic!("expected SingleValue, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_fallback() {
        let lookup = create_lookup();
        match lookup.lookup("crow ride neon") {
            ValueResult::PartialValues { fields, .. } => {
                assert_eq!(fields[0].outcome, FieldOutcome::Available(Value::from(100)));
                assert_eq!(fields[1].outcome, FieldOutcome::Available(Value::from(300)));
            }
            other => panic!("expected PartialValues, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_carries_query() {
        let lookup = create_lookup();
        let result = lookup.lookup("Giraffe neon");
        assert_eq!(
            result,
            ValueResult::NotFound {
                query: "Giraffe neon".to_string(),
                name: "giraffe".to_string(),
            }
        );
    }

    #[test]
    fn test_blank_name_not_found() {
        let lookup = create_lookup();
        assert!(!lookup.lookup("   ").is_found());
        assert!(!lookup.lookup("neon fly").is_found());
    }

    #[test]
    fn test_suggest() {
        let lookup = create_lookup();
        assert_eq!(lookup.suggest("neon shadow drag"), Some("shadow dragon".to_string()));
        assert_eq!(lookup.suggest("zzzzzzzz"), None);
        assert_eq!(lookup.suggest("fly"), None);
    }

    #[test]
    fn test_batch_preserves_order() {
        let lookup = create_lookup();
        let results = lookup.lookup_batch(&["owl", "crow", "nothing here"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].pet_name(), Some("Owl"));
        assert_eq!(results[1].pet_name(), Some("Crow"));
        assert!(!results[2].is_found());
    }

    #[test]
    fn test_stats() {
        let lookup = create_lookup();
        let (pets, keys) = lookup.stats();
        assert_eq!(pets, 3);
        // d, rd, rfd, n, rfn, m
        assert_eq!(keys, 6);
    }

    #[test]
    fn test_custom_threshold() {
        let catalog = Catalog::from_json_str(r#"[{"name": "Owl", "d": 1}]"#).unwrap();
        let lookup = PetLookup::new(catalog, LookupConfig::default().with_max_distance(0));
        assert!(lookup.lookup("owl").is_found());
        assert!(!lookup.lookup("owls").is_found());
    }
}
