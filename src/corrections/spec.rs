//! Correction rule files.
//!
//! Two files feed the engine:
//! - the replace file maps a full name to the raw text that replaces it
//! - the add file maps an anchor full name to raw texts inserted after it
//!
//! Both are plain key/value documents (JSON, TOML or YAML by extension) and
//! keep the key order of the file.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use super::CorrectionError;

/// A key/value mapping that remembers the order keys appeared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedRules<V>(Vec<(String, V)>);

impl<V> OrderedRules<V> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for OrderedRules<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedRules<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedRules<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RulesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for RulesVisitor<V> {
            type Value = OrderedRules<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of full names to correction entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedRules(entries))
            }
        }

        deserializer.deserialize_map(RulesVisitor(PhantomData))
    }
}

/// Raw correction rules as written by the corrections author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectionSpec {
    /// Full name -> raw text of the replacement.
    pub replace: OrderedRules<String>,
    /// Anchor full name -> raw texts to insert after the anchor.
    pub add: OrderedRules<Vec<String>>,
}

impl CorrectionSpec {
    /// Load both rule files. A `None` path means no rules of that kind.
    pub fn load(replace: Option<&Path>, add: Option<&Path>) -> Result<Self, CorrectionError> {
        Ok(Self {
            replace: match replace {
                Some(path) => load_rules(path)?,
                None => OrderedRules::default(),
            },
            add: match add {
                Some(path) => load_rules(path)?,
                None => OrderedRules::default(),
            },
        })
    }

    pub fn is_empty(&self) -> bool {
        self.replace.is_empty() && self.add.is_empty()
    }
}

/// Read one rule file, picking the format from the file extension.
pub fn load_rules<T: DeserializeOwned>(path: &Path) -> Result<T, CorrectionError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CorrectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rules(path, &contents)
}

fn parse_rules<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T, CorrectionError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let parsed = match ext {
        "toml" => toml::from_str(contents).map_err(|e| e.to_string()),
        "yaml" | "yml" => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        _ => serde_json::from_str(contents).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| CorrectionError::Format {
        path: path.to_path_buf(),
        message,
    })
}
