// Pet Lookup Modifier Rules
// Precedence rules applied to the parsed modifier set

use crate::types::ModifierSet;
use crate::vocab::Modifier;

/// Apply tier precedence to a modifier set
///
/// `mega` outranks `neon`: when both are present `neon` is dropped. All
/// other modifiers, and their order, pass through unchanged. Applying this
/// twice gives the same result as applying it once.
pub fn resolve_conflicts(modifiers: &ModifierSet) -> ModifierSet {
    let mut resolved = modifiers.clone();
    if resolved.contains(Modifier::Mega) {
        resolved.remove(Modifier::Neon);
    }
    resolved
}

/// Whether a set holds two mutually exclusive tiers
pub fn has_tier_conflict(modifiers: &ModifierSet) -> bool {
    modifiers.contains(Modifier::Mega) && modifiers.contains(Modifier::Neon)
}
