//! On-disk cache of scraped name lists.
//!
//! Each dictionary gets one JSON file under the cache directory. An entry
//! that exists is always used; nothing expires on its own.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::names::NameList;

const CACHE_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt cache entry {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode cache entry: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to persist cache entry {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },
}

impl CacheError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        CacheError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Raw name lists keyed by dictionary id.
#[derive(Debug, Clone)]
pub struct NameCache {
    dir: PathBuf,
}

impl NameCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the entry for `id`.
    pub fn entry_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, CACHE_EXTENSION))
    }

    /// Load the stored list for `id`, or `None` on a miss.
    pub fn load(&self, id: &str) -> Result<Option<NameList>, CacheError> {
        let path = self.entry_path(id);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Cache miss for {}", id);
                return Ok(None);
            }
            Err(e) => return Err(CacheError::io(&path, e)),
        };

        let names: NameList = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| CacheError::Decode {
                path: path.clone(),
                source,
            })?;
        info!("Loaded {} cached names for {}", names.len(), id);
        Ok(Some(names))
    }

    /// Store `names` under `id`, replacing any existing entry.
    pub fn store(&self, id: &str, names: &NameList) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir).map_err(|e| CacheError::io(&self.dir, e))?;

        let path = self.entry_path(id);
        let temp_file = NamedTempFile::new_in(&self.dir).map_err(|e| CacheError::io(&self.dir, e))?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            serde_json::to_writer(&mut writer, names)?;
            writer.flush().map_err(|e| CacheError::io(&path, e))?;
        }
        temp_file
            .persist(&path)
            .map_err(|source| CacheError::Persist {
                path: path.clone(),
                source,
            })?;

        info!("Cached {} names for {} at {}", names.len(), id, path.display());
        Ok(())
    }

    /// Remove the entry for `id`. Returns whether an entry existed.
    pub fn remove(&self, id: &str) -> Result<bool, CacheError> {
        let path = self.entry_path(id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CacheError::io(&path, e)),
        }
    }

    /// Ids of all cached entries, sorted.
    pub fn entries(&self) -> Result<Vec<String>, CacheError> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CacheError::io(&self.dir, e)),
        };

        let mut ids = Vec::new();
        for entry in read_dir {
            let path = entry.map_err(|e| CacheError::io(&self.dir, e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(CACHE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Remove every entry. Returns the number removed.
    pub fn clear(&self) -> Result<usize, CacheError> {
        let mut removed = 0;
        for id in self.entries()? {
            if self.remove(&id)? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
