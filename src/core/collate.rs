//! Locale-aware ordering of country names.
//!
//! Names are compared first on their ASCII transliteration, case-folded, so
//! accented letters sort next to their base letters ("Åland Islands" among the
//! A's). Ties fall back to the case-folded original and then the raw text,
//! which keeps the order total.

use deunicode::deunicode;

/// Sort key whose natural ordering is the collation order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    folded: String,
    raw: String,
}

impl CollationKey {
    pub fn new(name: &str) -> Self {
        Self {
            primary: deunicode(name).to_lowercase(),
            folded: name.to_lowercase(),
            raw: name.to_string(),
        }
    }
}
