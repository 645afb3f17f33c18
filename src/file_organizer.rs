/// File organization: moving files into category subdirectories.
///
/// The executor re-scans the directory fresh on every call rather than
/// trusting a previously built preview, so files added or removed in the
/// meantime are picked up (or dropped) naturally. Each eligible file is
/// processed independently: its category folder is created on demand and the
/// file is moved, with any failure recorded in that file's outcome while the
/// batch continues. Only a directory that cannot be read at all aborts the
/// whole run.
use crate::file_category::{Category, Classification, Classifier};
use crate::report::{MoveError, MoveOutcome, OrganizeReport};
use crate::scanner::{DirectoryScanner, ScanError};
use std::fs;
use std::path::Path;

/// Executes organization runs.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Organizes the files directly inside `base_path` into category
    /// subfolders.
    ///
    /// Returns a report with one outcome per eligible file, in the order the
    /// files were processed, plus aggregate statistics. A directory where
    /// nothing is eligible comes back as a report with zero outcomes and no
    /// filesystem changes.
    ///
    /// # Errors
    ///
    /// Fails only if the directory itself cannot be enumerated. Per-file
    /// failures are captured inside the report.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sortdir::file_category::Classifier;
    /// use sortdir::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let report = FileOrganizer::organize(Path::new("/home/user/Downloads"), &Classifier::default())?;
    /// println!(
    ///     "{} moved, {} errors, {} skipped",
    ///     report.stats.moved, report.stats.errored, report.stats.skipped
    /// );
    /// # Ok::<(), sortdir::scanner::ScanError>(())
    /// ```
    pub fn organize(base_path: &Path, classifier: &Classifier) -> Result<OrganizeReport, ScanError> {
        let scan = DirectoryScanner::scan(base_path, classifier)?;
        let skipped = scan.skipped_count();

        let mut outcomes = Vec::new();
        for file in scan.files {
            let Classification::Move(category) = file.classification else {
                continue;
            };

            let outcome = match Self::move_into_category(base_path, &file.path, category) {
                Ok(()) => MoveOutcome::moved(file.name, category),
                Err(error) => MoveOutcome::failed(file.name, category, error),
            };
            outcomes.push(outcome);
        }

        Ok(OrganizeReport::new(outcomes, skipped))
    }

    /// Moves one file into its category folder under `base_path`.
    ///
    /// The folder is created if missing; creating an existing folder is a
    /// no-op. A same-name file already present at the destination is a
    /// conflict: the source file is left where it is.
    fn move_into_category(
        base_path: &Path,
        file_path: &Path,
        category: Category,
    ) -> Result<(), MoveError> {
        let category_path = base_path.join(category.dir_name());
        fs::create_dir_all(&category_path).map_err(|e| MoveError::DirectoryCreationFailed {
            path: category_path.clone(),
            source: e,
        })?;

        let file_name = file_path.file_name().ok_or_else(|| MoveError::MoveFailed {
            from: file_path.to_path_buf(),
            to: category_path.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "file has no name component",
            ),
        })?;

        let destination = category_path.join(file_name);
        if destination.exists() {
            return Err(MoveError::DestinationConflict { destination });
        }

        fs::rename(file_path, &destination).map_err(|e| MoveError::MoveFailed {
            from: file_path.to_path_buf(),
            to: destination.clone(),
            source: e,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("Failed to create file");
    }

    #[test]
    fn test_organize_moves_file_and_creates_folder() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "photo.jpg");

        let report = FileOrganizer::organize(temp_dir.path(), &Classifier::default())
            .expect("organize should succeed");

        assert_eq!(report.stats.moved, 1);
        assert!(temp_dir.path().join("Images").is_dir());
        assert!(temp_dir.path().join("Images/photo.jpg").is_file());
        assert!(!temp_dir.path().join("photo.jpg").exists());
    }

    #[test]
    fn test_organize_uses_existing_folder() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("Images")).expect("Failed to create folder");
        touch(temp_dir.path(), "photo.jpg");

        let report = FileOrganizer::organize(temp_dir.path(), &Classifier::default())
            .expect("organize should succeed");

        assert_eq!(report.stats.moved, 1);
        assert!(temp_dir.path().join("Images/photo.jpg").is_file());
    }

    #[test]
    fn test_conflict_is_recorded_and_file_kept() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("Documents")).expect("Failed to create folder");
        touch(&temp_dir.path().join("Documents"), "report.pdf");
        touch(temp_dir.path(), "report.pdf");

        let report = FileOrganizer::organize(temp_dir.path(), &Classifier::default())
            .expect("organize should succeed");

        assert_eq!(report.stats.moved, 0);
        assert_eq!(report.stats.errored, 1);
        let outcome = &report.outcomes[0];
        assert!(!outcome.succeeded());
        assert!(matches!(
            outcome.error,
            Some(MoveError::DestinationConflict { .. })
        ));
        // The source file must survive a conflict untouched.
        assert!(temp_dir.path().join("report.pdf").is_file());
        assert!(temp_dir.path().join("Documents/report.pdf").is_file());
    }

    #[test]
    fn test_conflict_does_not_abort_the_batch() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::create_dir(temp_dir.path().join("Documents")).expect("Failed to create folder");
        touch(&temp_dir.path().join("Documents"), "report.pdf");
        touch(temp_dir.path(), "report.pdf");
        touch(temp_dir.path(), "photo.jpg");

        let report = FileOrganizer::organize(temp_dir.path(), &Classifier::default())
            .expect("organize should succeed");

        assert_eq!(report.stats.moved, 1);
        assert_eq!(report.stats.errored, 1);
        assert!(temp_dir.path().join("Images/photo.jpg").is_file());
    }

    #[test]
    fn test_organize_missing_directory_fails() {
        let result = FileOrganizer::organize(Path::new("/no/such/directory"), &Classifier::default());
        assert!(result.is_err());
    }
}
