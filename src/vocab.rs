// Pet Lookup Vocabulary
// Modifier words and the closed set of value key codes they select

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A qualifier word recognized in a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Regular,
    Ride,
    Fly,
    Neon,
    Mega,
    /// Recognized so it is stripped from the name, but selects no variant
    Rare,
}

impl Modifier {
    /// Every recognized modifier, in vocabulary order
    pub const ALL: [Modifier; 6] = [
        Modifier::Regular,
        Modifier::Ride,
        Modifier::Fly,
        Modifier::Neon,
        Modifier::Mega,
        Modifier::Rare,
    ];

    /// The word as typed in a query
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Regular => "regular",
            Modifier::Ride => "ride",
            Modifier::Fly => "fly",
            Modifier::Neon => "neon",
            Modifier::Mega => "mega",
            Modifier::Rare => "rare",
        }
    }

    /// Match a single query token (case-insensitive)
    pub fn from_word(word: &str) -> Option<Self> {
        let word = word.trim().to_lowercase();
        Self::ALL.into_iter().find(|m| m.as_str() == word)
    }

    /// Whether this modifier takes part in building a value key
    pub fn is_valuation(&self) -> bool {
        !matches!(self, Modifier::Rare)
    }

    /// The key this modifier selects on its own, if any
    ///
    /// Used by the per-field fallback when no full combination exists.
    pub fn single_key(&self) -> Option<ValueKey> {
        ValueKey::for_combination(&[*self])
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = UnknownWord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_word(s).ok_or_else(|| UnknownWord(s.to_string()))
    }
}

/// Canonical shorthand code for one valuation variant
///
/// Codes concatenate `r` (rideable), `f` (flyable) and a tier letter
/// (`d` regular, `n` neon, `m` mega) in that order. The declaration order
/// here is the catalog's field order and drives `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueKey {
    #[serde(rename = "d")]
    D,
    #[serde(rename = "rd")]
    Rd,
    #[serde(rename = "fd")]
    Fd,
    #[serde(rename = "rfd")]
    Rfd,
    #[serde(rename = "n")]
    N,
    #[serde(rename = "rn")]
    Rn,
    #[serde(rename = "fn")]
    Fn,
    #[serde(rename = "rfn")]
    Rfn,
    #[serde(rename = "m")]
    M,
    #[serde(rename = "rm")]
    Rm,
    #[serde(rename = "fm")]
    Fm,
    #[serde(rename = "rfm")]
    Rfm,
}

use Modifier::{Fly, Mega, Neon, Regular, Ride};

/// Modifier word sequences that name a variant, and the key each selects.
///
/// Only these exact sequences resolve; anything else has no key.
const COMBINATIONS: &[(&[Modifier], ValueKey)] = &[
    (&[Regular], ValueKey::D),
    (&[Ride], ValueKey::Rd),
    (&[Fly], ValueKey::Fd),
    (&[Ride, Fly], ValueKey::Rfd),
    (&[Neon], ValueKey::N),
    (&[Neon, Ride], ValueKey::Rn),
    (&[Neon, Fly], ValueKey::Fn),
    (&[Neon, Ride, Fly], ValueKey::Rfn),
    (&[Mega], ValueKey::M),
    (&[Mega, Ride], ValueKey::Rm),
    (&[Mega, Fly], ValueKey::Fm),
    (&[Mega, Ride, Fly], ValueKey::Rfm),
];

impl ValueKey {
    /// All 12 keys in catalog field order
    pub const ALL: [ValueKey; 12] = [
        ValueKey::D,
        ValueKey::Rd,
        ValueKey::Fd,
        ValueKey::Rfd,
        ValueKey::N,
        ValueKey::Rn,
        ValueKey::Fn,
        ValueKey::Rfn,
        ValueKey::M,
        ValueKey::Rm,
        ValueKey::Fm,
        ValueKey::Rfm,
    ];

    /// The wire code (e.g. "rfn")
    pub fn code(&self) -> &'static str {
        match self {
            ValueKey::D => "d",
            ValueKey::Rd => "rd",
            ValueKey::Fd => "fd",
            ValueKey::Rfd => "rfd",
            ValueKey::N => "n",
            ValueKey::Rn => "rn",
            ValueKey::Fn => "fn",
            ValueKey::Rfn => "rfn",
            ValueKey::M => "m",
            ValueKey::Rm => "rm",
            ValueKey::Fm => "fm",
            ValueKey::Rfm => "rfm",
        }
    }

    /// Parse a wire code; unknown codes return `None`
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    /// Human label used when rendering a full value sheet
    pub fn label(&self) -> &'static str {
        match self {
            ValueKey::D => "Regular",
            ValueKey::Rd => "Rideable",
            ValueKey::Fd => "Flyable",
            ValueKey::Rfd => "Rideable & Flyable",
            ValueKey::N => "Neon",
            ValueKey::Rn => "Neon Rideable",
            ValueKey::Fn => "Neon Flyable",
            ValueKey::Rfn => "Neon Rideable & Flyable",
            ValueKey::M => "Mega",
            ValueKey::Rm => "Mega Rideable",
            ValueKey::Fm => "Mega Flyable",
            ValueKey::Rfm => "Mega Rideable & Flyable",
        }
    }

    /// Look up the key named by an ordered modifier sequence
    ///
    /// `rare` contributes nothing to the sequence and is skipped. The
    /// remaining words must match a known combination exactly, in order.
    ///
    /// # Examples
    /// ```
    /// # use pet_lookup::vocab::{Modifier, ValueKey};
    /// assert_eq!(
    ///     ValueKey::for_combination(&[Modifier::Ride, Modifier::Fly]),
    ///     Some(ValueKey::Rfd)
    /// );
    /// assert_eq!(ValueKey::for_combination(&[Modifier::Fly, Modifier::Ride]), None);
    /// ```
    pub fn for_combination(sequence: &[Modifier]) -> Option<Self> {
        let words: Vec<Modifier> = sequence
            .iter()
            .copied()
            .filter(Modifier::is_valuation)
            .collect();

        COMBINATIONS
            .iter()
            .find(|(combo, _)| *combo == words.as_slice())
            .map(|(_, key)| *key)
    }
}

impl std::fmt::Display for ValueKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ValueKey {
    type Err = UnknownWord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownWord(s.to_string()))
    }
}

/// A word outside the modifier or key vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vocabulary word '{0}'")]
pub struct UnknownWord(pub String);
