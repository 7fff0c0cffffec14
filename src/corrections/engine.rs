//! Two-phase rewrite of a name list: replace, then insert.

use tracing::{debug, info};

use super::{CorrectionError, CorrectionSpec};
use crate::names::{NameList, NameParser, NameRecord};

/// Correction rules with every raw text already classified.
#[derive(Debug, Clone, Default)]
pub struct CorrectionEngine {
    replace: Vec<(String, NameRecord)>,
    add: Vec<(String, Vec<NameRecord>)>,
}

impl CorrectionEngine {
    /// Classify every text in `spec`. A text that is not a name fails the
    /// whole engine.
    pub fn new(spec: &CorrectionSpec) -> Result<Self, CorrectionError> {
        let parser = NameParser::shared();

        let replace = spec
            .replace
            .iter()
            .map(|(key, text)| {
                let record = parser
                    .classify(text)
                    .map_err(|source| CorrectionError::Unparseable {
                        rule: key.to_string(),
                        source,
                    })?;
                Ok((key.to_string(), record))
            })
            .collect::<Result<Vec<_>, CorrectionError>>()?;

        let add = spec
            .add
            .iter()
            .map(|(anchor, texts)| {
                let records = texts
                    .iter()
                    .map(|text| {
                        parser
                            .classify(text)
                            .map_err(|source| CorrectionError::Unparseable {
                                rule: anchor.to_string(),
                                source,
                            })
                    })
                    .collect::<Result<Vec<_>, CorrectionError>>()?;
                Ok((anchor.to_string(), records))
            })
            .collect::<Result<Vec<_>, CorrectionError>>()?;

        Ok(Self { replace, add })
    }

    pub fn replace_rules(&self) -> usize {
        self.replace.len()
    }

    pub fn add_rules(&self) -> usize {
        self.add.len()
    }

    /// Run the replace phase, then the insert phase.
    pub fn apply(&self, names: NameList) -> NameList {
        let replaced = self.apply_replace(names);
        self.apply_add(replaced)
    }

    /// Swap every record whose full name matches a replace key, keeping
    /// its position. Keys are applied in order, so a later key can match a
    /// record produced by an earlier one.
    pub fn apply_replace(&self, names: NameList) -> NameList {
        self.replace.iter().fold(names, |names, (key, replacement)| {
            let mut hits = 0usize;
            let next: NameList = names
                .into_iter()
                .map(|record| {
                    if record.orthography() == *key {
                        hits += 1;
                        replacement.clone()
                    } else {
                        record
                    }
                })
                .collect();
            if hits > 0 {
                debug!("Replaced {} record(s) named {} with {}", hits, key, replacement);
            }
            next
        })
    }

    /// Splice each insert group right after the first record whose full
    /// name matches its anchor. Rules whose anchor is absent are skipped.
    pub fn apply_add(&self, names: NameList) -> NameList {
        self.add.iter().fold(names, |names, (anchor, inserted)| {
            let Some(pos) = names.iter().position(|r| r.orthography() == *anchor) else {
                info!("Insert anchor {} not found, skipping rule", anchor);
                return names;
            };

            let mut rest = names;
            let tail = rest.split_off(pos + 1);
            let mut next = rest;
            next.reserve(inserted.len() + tail.len());
            next.extend(inserted.iter().cloned());
            next.extend(tail);
            debug!("Inserted {} record(s) after {}", inserted.len(), anchor);
            next
        })
    }
}
