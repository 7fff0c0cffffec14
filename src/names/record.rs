//! The structured name record.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::parser::{NameParser, NotAName};

/// A person name split into surname/given-name with hiragana readings.
///
/// Records are immutable once built. Foreign names keep the whole katakana
/// token in `last` and leave `first`/`kana_first` empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameRecord {
    last: String,
    first: String,
    kana_last: String,
    kana_first: String,
    is_foreign: bool,
}

impl NameRecord {
    /// Classify raw text into a record.
    pub fn from_text(text: &str) -> Result<Self, NotAName> {
        NameParser::shared().classify(text)
    }

    /// Build a record from already-segmented fields without re-deriving
    /// anything. Used when reloading cached lists.
    pub fn from_fields(
        last: impl Into<String>,
        first: impl Into<String>,
        kana_last: impl Into<String>,
        kana_first: impl Into<String>,
        is_foreign: bool,
    ) -> Self {
        Self {
            last: last.into(),
            first: first.into(),
            kana_last: kana_last.into(),
            kana_first: kana_first.into(),
            is_foreign,
        }
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn kana_last(&self) -> &str {
        &self.kana_last
    }

    pub fn kana_first(&self) -> &str {
        &self.kana_first
    }

    pub fn is_foreign(&self) -> bool {
        self.is_foreign
    }

    /// Full orthographic form, `last + first`.
    pub fn orthography(&self) -> String {
        format!("{}{}", self.last, self.first)
    }

    /// Full reading, `kana_last + kana_first`.
    pub fn kana(&self) -> String {
        format!("{}{}", self.kana_last, self.kana_first)
    }

    /// True when the surname is written in kana only.
    pub fn has_only_kana_last(&self) -> bool {
        NameParser::shared().is_all_kana(&self.last)
    }

    /// True when the given name is written in kana only.
    pub fn has_only_kana_first(&self) -> bool {
        NameParser::shared().is_all_kana(&self.first)
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}({} {})",
            self.last, self.first, self.kana_last, self.kana_first
        )
    }
}

/// Ordered list of records. Order matters for deduplication and inserts.
pub type NameList = Vec<NameRecord>;
