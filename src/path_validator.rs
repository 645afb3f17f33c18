/// Target-directory validation.
///
/// Every operation runs against a directory the user typed or picked, so the
/// raw input is checked once up front: it must name an existing, readable,
/// writable directory. Validation is a pure check that creates nothing; the
/// returned path is canonicalized so later joins are unambiguous.
use std::fs;
use std::path::{Path, PathBuf};

/// Reasons a raw path cannot become a target directory.
#[derive(Debug)]
pub enum PathValidationError {
    /// The input was empty or whitespace-only.
    EmptyInput,
    /// The path does not exist.
    NotFound(PathBuf),
    /// The path exists but is not a directory.
    NotADirectory(PathBuf),
    /// The directory could not be read.
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The directory is read-only, so files could never be moved out of it.
    ReadOnly(PathBuf),
}

impl std::fmt::Display for PathValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "No path was provided"),
            Self::NotFound(path) => write!(f, "Path does not exist: {}", path.display()),
            Self::NotADirectory(path) => {
                write!(f, "Path is not a directory: {}", path.display())
            }
            Self::Unreadable { path, source } => {
                write!(f, "Cannot access {}: {}", path.display(), source)
            }
            Self::ReadOnly(path) => {
                write!(f, "Directory is read-only: {}", path.display())
            }
        }
    }
}

impl std::error::Error for PathValidationError {}

/// Validates raw path input into an absolute target directory.
pub struct PathValidator;

impl PathValidator {
    /// Checks that `raw` names an existing, accessible directory and returns
    /// its canonical absolute path.
    ///
    /// Empty or whitespace-only input is rejected before the filesystem is
    /// touched. No directories are created.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortdir::path_validator::PathValidator;
    ///
    /// assert!(PathValidator::validate("   ").is_err());
    /// assert!(PathValidator::validate("/no/such/directory").is_err());
    /// ```
    pub fn validate(raw: &str) -> Result<PathBuf, PathValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PathValidationError::EmptyInput);
        }

        let path = Path::new(trimmed);
        if !path.exists() {
            return Err(PathValidationError::NotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(PathValidationError::NotADirectory(path.to_path_buf()));
        }

        let metadata = fs::metadata(path).map_err(|e| PathValidationError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        if metadata.permissions().readonly() {
            return Err(PathValidationError::ReadOnly(path.to_path_buf()));
        }

        // Probe readability; an unreadable directory fails here rather than
        // halfway through a scan.
        fs::read_dir(path).map_err(|e| PathValidationError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;

        fs::canonicalize(path).map_err(|e| PathValidationError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            PathValidator::validate(""),
            Err(PathValidationError::EmptyInput)
        ));
        assert!(matches!(
            PathValidator::validate("   \t "),
            Err(PathValidationError::EmptyInput)
        ));
    }

    #[test]
    fn test_missing_path_is_rejected() {
        assert!(matches!(
            PathValidator::validate("/no/such/directory"),
            Err(PathValidationError::NotFound(_))
        ));
    }

    #[test]
    fn test_file_is_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, "content").expect("Failed to write file");

        let result = PathValidator::validate(&file_path.to_string_lossy());
        assert!(matches!(result, Err(PathValidationError::NotADirectory(_))));
    }

    #[test]
    fn test_valid_directory_is_canonicalized() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let validated = PathValidator::validate(&temp_dir.path().to_string_lossy())
            .expect("directory should validate");
        assert!(validated.is_absolute());
        assert!(validated.is_dir());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let padded = format!("  {}  ", temp_dir.path().display());

        let validated = PathValidator::validate(&padded).expect("directory should validate");
        assert!(validated.is_dir());
    }
}
