//! Name normalization and comparison
//!
//! Every case-insensitive lookup in the crate goes through this module so folders, files
//! and labels collate identically. Names are normalized to NFC before case folding so that
//! composed and decomposed spellings of the same name compare equal.

use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Case-insensitive lookup key for an entity name.
///
/// Two names produce the same key exactly when [`names_equal`] holds for them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(name: &str) -> Self {
        NameKey(fold(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NameKey {
    fn from(name: &str) -> Self {
        NameKey::new(name)
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn fold(name: &str) -> String {
    name.nfc().collect::<String>().to_lowercase()
}

/// True when the name is empty or whitespace-only.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Case-insensitive equality.
pub fn names_equal(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

/// Case-insensitive prefix match.
pub fn name_starts_with(name: &str, prefix: &str) -> bool {
    fold(name).starts_with(&fold(prefix))
}
