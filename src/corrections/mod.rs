//! Manual corrections applied to scraped name lists.

mod engine;
mod spec;

pub use engine::CorrectionEngine;
pub use spec::{load_rules, CorrectionSpec, OrderedRules};

use std::path::PathBuf;

use thiserror::Error;

use crate::names::NotAName;

#[derive(Debug, Error)]
pub enum CorrectionError {
    #[error("failed to read corrections file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse corrections file {path}: {message}")]
    Format { path: PathBuf, message: String },
    #[error("correction for {rule} does not parse: {source}")]
    Unparseable {
        rule: String,
        #[source]
        source: NotAName,
    },
}
