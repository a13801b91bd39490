// Pet Lookup Query Parser
// Splits free-text input into a pet name and modifier words

use crate::types::{ModifierSet, ParsedQuery};
use crate::vocab::Modifier;

/// Parse a raw query into its name portion and modifiers
///
/// Input is lowercased and split on whitespace runs. Every token that is a
/// modifier word goes to the modifier list, everything else joins the name
/// in its original relative order. A token that is a modifier word is
/// always treated as a modifier, even when it could belong to a pet name.
///
/// # Examples
/// ```
/// # use pet_lookup::query::parse_query;
/// # use pet_lookup::vocab::Modifier;
/// let parsed = parse_query("  Shadow   NEON dragon fly ");
/// assert_eq!(parsed.name, "shadow dragon");
/// assert_eq!(parsed.modifier_words, vec!["neon", "fly"]);
/// assert_eq!(parsed.modifiers.as_slice(), &[Modifier::Neon, Modifier::Fly]);
/// ```
pub fn parse_query(raw_input: &str) -> ParsedQuery {
    let lowered = raw_input.to_lowercase();

    let mut name_tokens: Vec<&str> = Vec::new();
    let mut modifier_words = Vec::new();
    let mut modifiers = ModifierSet::new();

    for token in lowered.split_whitespace() {
        match Modifier::from_word(token) {
            Some(modifier) => {
                modifier_words.push(token.to_string());
                modifiers.insert(modifier);
            }
            None => name_tokens.push(token),
        }
    }

    ParsedQuery {
        name: name_tokens.join(" "),
        modifier_words,
        modifiers,
    }
}

/// Remove modifier words from an input, keeping only the name portion
///
/// Used for live suggestions while the user is still typing.
pub fn strip_modifiers(raw_input: &str) -> String {
    parse_query(raw_input).name
}
