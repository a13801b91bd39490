// Pet Lookup Configuration
// Tunable parameters for name resolution

use serde::{Deserialize, Serialize};

/// Largest edit distance at which a name still counts as a match
pub const DEFAULT_MAX_DISTANCE: usize = 3;

/// Lookup engine settings
///
/// Missing fields take their defaults when deserialized, so a host can
/// embed this in its own configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Acceptance threshold for fuzzy name matching
    pub max_distance: usize,
}

impl LookupConfig {
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}
