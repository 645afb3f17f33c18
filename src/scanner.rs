/// Directory scanning shared by preview and organization.
///
/// A scan is one non-recursive pass over the immediate entries of a
/// directory: every regular file is classified, directories and other
/// non-file entries are ignored, and nothing is cached between calls. Both
/// the preview and the executor scan fresh so they always see the current
/// state of the directory.
use crate::file_category::{Classification, Classifier};
use std::fs;
use std::path::{Path, PathBuf};

/// A regular file found during a scan, with its classification.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// The file's name.
    pub name: String,
    /// The full path to the file.
    pub path: PathBuf,
    /// Whether the file should be moved, and where.
    pub classification: Classification,
}

/// The result of scanning a directory once.
///
/// Files appear in filesystem-enumeration order, which is not guaranteed to
/// be sorted. Every regular file in the directory is present exactly once,
/// either as eligible or as skipped.
#[derive(Debug, Default)]
pub struct DirectoryScan {
    /// All regular files found, in enumeration order.
    pub files: Vec<ScannedFile>,
}

impl DirectoryScan {
    /// Iterates over the eligible files, in scan order.
    pub fn eligible(&self) -> impl Iterator<Item = &ScannedFile> {
        self.files.iter().filter(|f| !f.classification.is_skip())
    }

    /// Number of files excluded by the skip rules.
    pub fn skipped_count(&self) -> usize {
        self.files.iter().filter(|f| f.classification.is_skip()).count()
    }

    /// Number of files that would be moved.
    pub fn eligible_count(&self) -> usize {
        self.files.len() - self.skipped_count()
    }
}

/// Error raised when a directory cannot be enumerated at all.
///
/// Per-entry problems never surface here; only total inability to read the
/// directory aborts an operation.
#[derive(Debug)]
pub enum ScanError {
    /// The directory could not be read.
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "Cannot read directory {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// Scans directories and classifies their files.
pub struct DirectoryScanner;

impl DirectoryScanner {
    /// Enumerates the regular files directly inside `path` and classifies
    /// each one.
    ///
    /// Entries that vanish or error during enumeration are dropped silently;
    /// they can no longer be part of the run. Subdirectories are never
    /// descended into or classified.
    pub fn scan(path: &Path, classifier: &Classifier) -> Result<DirectoryScan, ScanError> {
        let entries = fs::read_dir(path).map_err(|e| ScanError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries.flatten() {
            if let Ok(file_type) = entry.file_type()
                && file_type.is_file()
            {
                let name = entry.file_name().to_string_lossy().to_string();
                let classification = classifier.classify(&name);
                files.push(ScannedFile {
                    name,
                    path: entry.path(),
                    classification,
                });
            }
        }

        Ok(DirectoryScan { files })
    }
}
