//! Word module - normalized word values
//!
//! Every ingestion boundary (theme pools, selections, persisted records)
//! runs the same normalization: trim, NFKD compatibility decomposition
//! (folds diacritics and full-width forms), drop combining marks, then
//! uppercase. Two words equal after normalization are the same word.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold arbitrary input text into canonical word form
pub fn normalize(text: &str) -> String {
    text.trim()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
        .collect()
}

/// A normalized word; its identity is its normalized text
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word {
    text: String,
}

impl Word {
    pub fn new(text: &str) -> Self {
        Self {
            text: normalize(text),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in letters, not bytes
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
