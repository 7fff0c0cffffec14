//! Dictionary assembly and output.

mod builder;
mod entries;
mod writer;

pub use builder::DictionaryBuilder;
pub use entries::{
    dedup_preserving_order, entry_line, DictionaryLists, LABEL_FIRST, LABEL_FULL, LABEL_LAST,
};
pub use writer::{DictionaryWriter, WriteReport};

use std::path::PathBuf;

use thiserror::Error;

use crate::cache::CacheError;
use crate::scrapers::ScrapeError;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
    #[error("failed to write dictionary {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
