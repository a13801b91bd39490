// Pet Lookup Name Matcher
// Picks the catalog entry whose name is closest to the query name

use crate::config::DEFAULT_MAX_DISTANCE;
use crate::distance::{edit_distance, normalize};
use crate::types::CatalogEntry;
use tracing::trace;

/// Best candidate found for a query name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMatch {
    /// Position of the entry in catalog order
    pub index: usize,

    /// Edit distance between the normalized names
    pub distance: usize,
}

/// Fuzzy name matcher over a fixed list of catalog names
///
/// Names are normalized once at construction; the matcher keeps no other
/// state, so one instance serves any number of queries.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    /// Normalized names, in catalog order
    names: Vec<String>,

    /// Acceptance threshold
    max_distance: usize,
}

impl NameMatcher {
    /// Index the names of `entries` with the default threshold
    pub fn new(entries: &[CatalogEntry]) -> Self {
        Self::with_max_distance(entries, DEFAULT_MAX_DISTANCE)
    }

    /// Index the names of `entries` with a custom threshold
    pub fn with_max_distance(entries: &[CatalogEntry], max_distance: usize) -> Self {
        Self {
            names: entries.iter().map(|e| normalize(&e.name)).collect(),
            max_distance,
        }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Closest entry regardless of threshold
    ///
    /// Ties go to the entry that comes first in catalog order. Returns
    /// `None` only for an empty catalog.
    pub fn closest(&self, query_name: &str) -> Option<NameMatch> {
        let query = normalize(query_name);
        let mut best: Option<NameMatch> = None;

        for (index, name) in self.names.iter().enumerate() {
            let distance = edit_distance(&query, name);
            trace!(query = %query, candidate = %name, distance, "name distance");

            // Strict comparison keeps the earliest entry on ties
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(NameMatch { index, distance });
                if distance == 0 {
                    break;
                }
            }
        }

        best
    }

    /// Closest entry within the acceptance threshold
    ///
    /// # Example
    /// ```
    /// # use pet_lookup::matcher::NameMatcher;
    /// # use pet_lookup::types::CatalogEntry;
    /// let entries = vec![
    ///     CatalogEntry::new("Shadow Dragon", "legendary"),
    ///     CatalogEntry::new("Frost Dragon", "legendary"),
    /// ];
    /// let matcher = NameMatcher::new(&entries);
    /// assert_eq!(matcher.resolve("shadw dragon").map(|m| m.index), Some(0));
    /// assert_eq!(matcher.resolve("turtle"), None);
    /// ```
    pub fn resolve(&self, query_name: &str) -> Option<NameMatch> {
        self.closest(query_name)
            .filter(|m| m.distance <= self.max_distance)
    }
}

/// Resolve a query name directly against a catalog slice
pub fn resolve<'a>(
    query_name: &str,
    catalog: &'a [CatalogEntry],
    max_distance: usize,
) -> Option<&'a CatalogEntry> {
    NameMatcher::with_max_distance(catalog, max_distance)
        .resolve(query_name)
        .map(|m| &catalog[m.index])
}
