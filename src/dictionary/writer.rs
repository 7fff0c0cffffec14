//! Writing dictionary files to disk.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::DictionaryLists;

/// Dictionary file extension.
const DICTIONARY_EXTENSION: &str = "txt";

/// What was written for one dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub full: usize,
    pub last: usize,
    pub first: usize,
}

/// Writes CRLF-terminated dictionary files into one directory.
#[derive(Debug, Clone)]
pub struct DictionaryWriter {
    output_dir: PathBuf,
}

impl DictionaryWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Destination for dictionary `id`.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", id, DICTIONARY_EXTENSION))
    }

    /// Write full names, then surnames, then given names.
    pub fn write(&self, id: &str, lists: &DictionaryLists) -> std::io::Result<WriteReport> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.path_for(id);
        let mut writer = BufWriter::new(File::create(&path)?);
        for line in lists.lines() {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\r\n")?;
        }
        writer.flush()?;

        Ok(WriteReport {
            path,
            full: lists.full.len(),
            last: lists.last.len(),
            first: lists.first.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_crlf_blocks() {
        let dir = TempDir::new().unwrap();
        let writer = DictionaryWriter::new(dir.path().join("dic"));
        let lists = DictionaryLists {
            full: vec!["あまみはるか\t天海春香\t人名".into(), "ろぜ\tロゼ\t人名".into()],
            last: vec!["あまみ\t天海\t姓".into()],
            first: vec!["はるか\t春香\t名".into()],
        };

        let report = writer.write("765pro", &lists).unwrap();
        assert_eq!(report.path, dir.path().join("dic").join("765pro.txt"));
        assert_eq!((report.full, report.last, report.first), (2, 1, 1));

        let written = fs::read_to_string(&report.path).unwrap();
        assert_eq!(
            written,
            "あまみはるか\t天海春香\t人名\r\nろぜ\tロゼ\t人名\r\nあまみ\t天海\t姓\r\nはるか\t春香\t名\r\n"
        );
    }

    #[test]
    fn test_write_empty_dictionary() {
        let dir = TempDir::new().unwrap();
        let writer = DictionaryWriter::new(dir.path());
        let report = writer.write("empty", &DictionaryLists::default()).unwrap();
        assert_eq!(fs::read_to_string(report.path).unwrap(), "");
    }
}
