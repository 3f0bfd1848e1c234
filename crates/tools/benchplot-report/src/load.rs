//! Loading benchmark result files.
//!
//! A result file is a JSON array of record objects. The whole file is read
//! and parsed at once.

use std::io;
use std::path::{Path, PathBuf};

use crate::record::BenchmarkRecord;

/// Failure to load a result file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The input path does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The input exists but could not be read.
    #[error("reading {}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The content is not a JSON array of records.
    #[error("parsing benchmark results: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and parse a result file.
///
/// Existence is checked before anything is read, so a missing file is
/// always reported as [`LoadError::NotFound`].
pub fn load_records(path: &Path) -> Result<Vec<BenchmarkRecord>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&text)
}

/// Parse the content of a result file.
pub fn parse_records(text: &str) -> Result<Vec<BenchmarkRecord>, LoadError> {
    Ok(serde_json::from_str(text)?)
}
