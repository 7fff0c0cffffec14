//! Per-dictionary pipeline: cache, corrections, entries, output.

use tracing::{debug, info};

use super::{BuildError, DictionaryLists, DictionaryWriter, WriteReport};
use crate::cache::NameCache;
use crate::corrections::CorrectionEngine;
use crate::names::{NameList, NameParser};
use crate::scrapers::{DictionarySource, NameSource};

/// Builds dictionaries one at a time from a name source.
pub struct DictionaryBuilder<S> {
    source: S,
    cache: NameCache,
    corrections: CorrectionEngine,
    writer: DictionaryWriter,
    refresh: bool,
}

impl<S: NameSource> DictionaryBuilder<S> {
    pub fn new(
        source: S,
        cache: NameCache,
        corrections: CorrectionEngine,
        writer: DictionaryWriter,
    ) -> Self {
        Self {
            source,
            cache,
            corrections,
            writer,
            refresh: false,
        }
    }

    /// Ignore existing cache entries and refetch every dictionary.
    pub fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Raw (uncorrected) names for `dict`, from the cache when possible.
    pub async fn raw_names(&self, dict: &DictionarySource) -> Result<NameList, BuildError> {
        if !self.refresh {
            if let Some(names) = self.cache.load(&dict.name)? {
                return Ok(names);
            }
        }

        let candidates = self.source.fetch_candidates(dict).await?;
        let parser = NameParser::shared();
        let names: NameList = candidates
            .iter()
            .filter(|text| parser.is_name(text))
            .filter_map(|text| parser.classify(text).ok())
            .collect();
        debug!(
            "{}: {} of {} candidates are names",
            dict.name,
            names.len(),
            candidates.len()
        );

        self.cache.store(&dict.name, &names)?;
        Ok(names)
    }

    /// Raw names with corrections applied.
    pub async fn corrected_names(&self, dict: &DictionarySource) -> Result<NameList, BuildError> {
        let raw = self.raw_names(dict).await?;
        Ok(self.corrections.apply(raw))
    }

    /// The three deduplicated blocks for `dict`, without writing them.
    pub async fn assemble(&self, dict: &DictionarySource) -> Result<DictionaryLists, BuildError> {
        let names = self.corrected_names(dict).await?;
        Ok(DictionaryLists::from_names(&names))
    }

    /// Build `dict` and write it to the output directory.
    pub async fn build(&self, dict: &DictionarySource) -> Result<WriteReport, BuildError> {
        let lists = self.assemble(dict).await?;
        let report = self
            .writer
            .write(&dict.name, &lists)
            .map_err(|source| BuildError::Write {
                path: self.writer.path_for(&dict.name),
                source,
            })?;
        info!(
            "Wrote {}: {} full, {} surname, {} given",
            report.path.display(),
            report.full,
            report.last,
            report.first
        );
        Ok(report)
    }
}
