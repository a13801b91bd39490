// Pet Lookup Combination Resolver
// Turns a matched entry plus modifiers into the value(s) to report

use crate::types::{CatalogEntry, FieldOutcome, ModifierSet, PartialField, ValueResult};
use crate::vocab::{Modifier, ValueKey};
use tracing::debug;

/// Every ordering of `modifiers`, in lexicographic order of positions
///
/// There are six distinct modifiers, so at most 720 orderings.
pub fn permutations(modifiers: &[Modifier]) -> Vec<Vec<Modifier>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(modifiers.len());
    permute(modifiers.to_vec(), &mut current, &mut result);
    result
}

fn permute(remaining: Vec<Modifier>, current: &mut Vec<Modifier>, out: &mut Vec<Vec<Modifier>>) {
    if remaining.is_empty() {
        out.push(current.clone());
        return;
    }

    for i in 0..remaining.len() {
        let mut rest = remaining.clone();
        let picked = rest.remove(i);
        current.push(picked);
        permute(rest, current, out);
        current.pop();
    }
}

/// The first permutation whose key exists on `entry`
///
/// Permutations are tried in enumeration order so the typed order decides
/// which key wins if more than one could match.
pub fn find_combination(entry: &CatalogEntry, modifiers: &ModifierSet) -> Option<ValueKey> {
    let valuation: Vec<Modifier> = modifiers.iter().filter(Modifier::is_valuation).collect();

    for ordering in permutations(&valuation) {
        if let Some(key) = ValueKey::for_combination(&ordering) {
            debug!(pet = %entry.name, ordering = ?ordering, key = %key, "candidate key");
            if entry.value(key).is_some() {
                return Some(key);
            }
        }
    }

    None
}

/// Look up each modifier's own field independently
pub fn partial_fields(entry: &CatalogEntry, modifiers: &ModifierSet) -> Vec<PartialField> {
    modifiers
        .iter()
        .map(|modifier| {
            let key = modifier.single_key();
            let outcome = match key.and_then(|k| entry.value(k)) {
                Some(value) => FieldOutcome::Available(value.clone()),
                None => FieldOutcome::Unavailable,
            };
            PartialField {
                modifier,
                key,
                outcome,
            }
        })
        .collect()
}

/// Resolve the value(s) to report for a matched entry
///
/// - no modifiers: every value present on the entry
/// - a full combination key present on the entry: that single value
/// - otherwise: each modifier's own field, marked unavailable when absent
///
/// `modifiers` should already have passed through
/// [`resolve_conflicts`](crate::rules::resolve_conflicts).
pub fn resolve_value(entry: &CatalogEntry, modifiers: &ModifierSet) -> ValueResult {
    if modifiers.is_empty() {
        return ValueResult::AllValues {
            name: entry.name.clone(),
            rarity: entry.rarity.clone(),
            values: entry.values.clone(),
        };
    }

    if let Some(key) = find_combination(entry, modifiers) {
        debug!(pet = %entry.name, key = %key, "combination matched");
        if let Some(value) = entry.value(key) {
            return ValueResult::SingleValue {
                name: entry.name.clone(),
                rarity: entry.rarity.clone(),
                key,
                value: value.clone(),
            };
        }
    }

    debug!(pet = %entry.name, "no combination matched, reporting fields individually");
    ValueResult::PartialValues {
        name: entry.name.clone(),
        rarity: entry.rarity.clone(),
        fields: partial_fields(entry, modifiers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;
    use Modifier::*;

    fn set(modifiers: &[Modifier]) -> ModifierSet {
        modifiers.iter().copied().collect()
    }

    fn owl() -> CatalogEntry {
        CatalogEntry::new("Owl", "legendary")
            .with_value(ValueKey::D, 120)
            .with_value(ValueKey::Rd, 140)
            .with_value(ValueKey::Fd, 150)
            .with_value(ValueKey::Rfd, 500)
    }

    #[test]
    fn test_permutation_count() {
        assert_eq!(permutations(&[]).len(), 1);
        assert_eq!(permutations(&[Ride]).len(), 1);
        assert_eq!(permutations(&[Ride, Fly, Neon]).len(), 6);
    }

    #[test]
    fn test_permutation_order() {
        assert_eq!(
            permutations(&[Fly, Ride]),
            vec![vec![Fly, Ride], vec![Ride, Fly]]
        );
    }

    #[test]
    fn test_no_modifiers_returns_all() {
        match resolve_value(&owl(), &ModifierSet::new()) {
            ValueResult::AllValues { name, values, .. } => {
                assert_eq!(name, "Owl");
                assert_eq!(values.len(), 4);
                assert!(!values.contains_key(&ValueKey::N));
            }
            other => panic!("expected AllValues, got {:?}", other),
        }
    }

    #[test]
    fn test_combination_independent_of_order() {
        for typed in [set(&[Fly, Ride]), set(&[Ride, Fly])] {
            let result = resolve_value(&owl(), &typed);
            assert_eq!(
                result,
                ValueResult::SingleValue {
                    name: "Owl".to_string(),
                    rarity: "legendary".to_string(),
                    key: ValueKey::Rfd,
                    value: Value::from(500),
                }
            );
        }
    }

    #[test]
    fn test_single_modifier() {
        match resolve_value(&owl(), &set(&[Fly])) {
            ValueResult::SingleValue { key, value, .. } => {
                assert_eq!(key, ValueKey::Fd);
                assert_eq!(value, Value::from(150));
            }
            other => panic!("expected SingleValue, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_combination_falls_back_per_field() {
        let entry = CatalogEntry::new("Crow", "rare")
            .with_value(ValueKey::N, 300)
            .with_value(ValueKey::Rd, 100);

        match resolve_value(&entry, &set(&[Ride, Neon])) {
            ValueResult::PartialValues { fields, rarity, .. } => {
                assert_eq!(rarity, "rare");
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].key, Some(ValueKey::Rd));
                assert_eq!(fields[0].outcome, FieldOutcome::Available(Value::from(100)));
                assert_eq!(fields[1].key, Some(ValueKey::N));
                assert_eq!(fields[1].outcome, FieldOutcome::Available(Value::from(300)));
            }
            other => panic!("expected PartialValues, got {:?}", other),
        }
    }

    #[test]
    fn test_absent_field_marked_unavailable() {
        match resolve_value(&owl(), &set(&[Neon, Fly])) {
            ValueResult::PartialValues { fields, .. } => {
                assert_eq!(fields[0].modifier, Neon);
                assert_eq!(fields[0].outcome, FieldOutcome::Unavailable);
                assert_eq!(fields[1].outcome, FieldOutcome::Available(Value::from(150)));
            }
            other => panic!("expected PartialValues, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_value_is_present() {
        let entry = CatalogEntry::new("Egg", "common").with_value(ValueKey::Rfd, 0);
        match resolve_value(&entry, &set(&[Ride, Fly])) {
            ValueResult::SingleValue { value, .. } => assert_eq!(value, Value::from(0)),
            other => panic!("expected SingleValue, got {:?}", other),
        }
    }

    #[test]
    fn test_rare_contributes_nothing_to_key() {
        match resolve_value(&owl(), &set(&[Rare, Ride])) {
            ValueResult::SingleValue { key, .. } => assert_eq!(key, ValueKey::Rd),
            other => panic!("expected SingleValue, got {:?}", other),
        }
    }

    #[test]
    fn test_rare_alone_is_unavailable_field() {
        match resolve_value(&owl(), &set(&[Rare])) {
            ValueResult::PartialValues { fields, .. } => {
                assert_eq!(fields.len(), 1);
                assert_eq!(fields[0].key, None);
                assert_eq!(fields[0].outcome, FieldOutcome::Unavailable);
            }
            other => panic!("expected PartialValues, got {:?}", other),
        }
    }

    #[test]
    fn test_three_way_combination() {
        let entry = CatalogEntry::new("Shadow Dragon", "legendary").with_value(ValueKey::Rfn, 2400);
        assert_eq!(
            find_combination(&entry, &set(&[Fly, Neon, Ride])),
            Some(ValueKey::Rfn)
        );
    }

    #[test]
    fn test_unlisted_combination_never_invents_key() {
        let entry = owl();
        assert_eq!(find_combination(&entry, &set(&[Regular, Ride])), None);
    }
}
