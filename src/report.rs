/// Per-file outcomes and aggregate statistics for an organization run.
///
/// File-scoped failures are values, not exceptions: each attempted move
/// produces exactly one [`MoveOutcome`] carrying either success or a typed
/// failure, and the batch always runs to completion. Skipped files never
/// produce outcomes; they are only counted.
use crate::file_category::Category;
use serde::Serialize;
use std::path::PathBuf;

/// Ways a single file move can fail.
///
/// Each variant is scoped to one file and never aborts the batch.
#[derive(Debug)]
pub enum MoveError {
    /// A file with the same name already exists in the destination folder.
    /// The source file is left untouched.
    DestinationConflict { destination: PathBuf },
    /// The destination category folder could not be created.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The move itself failed (permissions, file vanished mid-run, disk
    /// full, ...).
    MoveFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DestinationConflict { destination } => {
                write!(
                    f,
                    "A file with the same name already exists at {}",
                    destination.display()
                )
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::MoveFailed { from, to, source } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    from.display(),
                    to.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// The recorded result of one attempted file move.
#[derive(Debug)]
pub struct MoveOutcome {
    /// The name of the file that was processed.
    pub file_name: String,
    /// The category the file was assigned to.
    pub category: Category,
    /// The failure, if the move did not succeed.
    pub error: Option<MoveError>,
}

impl MoveOutcome {
    /// Records a successful move.
    pub fn moved(file_name: String, category: Category) -> Self {
        Self {
            file_name,
            category,
            error: None,
        }
    }

    /// Records a failed move.
    pub fn failed(file_name: String, category: Category, error: MoveError) -> Self {
        Self {
            file_name,
            category,
            error: Some(error),
        }
    }

    /// Returns true if the file was moved.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate counts for one organization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrganizeStats {
    /// Files moved into a category folder.
    pub moved: usize,
    /// Files whose move was attempted and failed.
    pub errored: usize,
    /// Files excluded by the skip rules.
    pub skipped: usize,
}

impl OrganizeStats {
    /// Tallies outcomes and the skipped count into aggregate statistics.
    ///
    /// Pure counting, no filesystem access. `moved + errored` always equals
    /// the number of outcomes.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortdir::report::OrganizeStats;
    ///
    /// let stats = OrganizeStats::tally(&[], 3);
    /// assert_eq!(stats.moved, 0);
    /// assert_eq!(stats.errored, 0);
    /// assert_eq!(stats.skipped, 3);
    /// ```
    pub fn tally(outcomes: &[MoveOutcome], skipped: usize) -> Self {
        let moved = outcomes.iter().filter(|o| o.succeeded()).count();
        Self {
            moved,
            errored: outcomes.len() - moved,
            skipped,
        }
    }
}

/// Everything one organization run produced: stats plus per-file outcomes in
/// processing order.
///
/// Reports are handed to the caller and never persisted by the engine.
#[derive(Debug)]
pub struct OrganizeReport {
    /// When the run happened, RFC 3339.
    pub timestamp: String,
    /// Aggregate counts.
    pub stats: OrganizeStats,
    /// One outcome per eligible file, in the order files were processed.
    pub outcomes: Vec<MoveOutcome>,
}

impl OrganizeReport {
    /// Assembles a report from outcomes and the skipped count, stamping the
    /// current time.
    pub fn new(outcomes: Vec<MoveOutcome>, skipped: usize) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            stats: OrganizeStats::tally(&outcomes, skipped),
            outcomes,
        }
    }

    /// Returns true if every attempted move succeeded.
    pub fn is_complete_success(&self) -> bool {
        self.stats.errored == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn conflict(name: &str, category: Category) -> MoveOutcome {
        MoveOutcome::failed(
            name.to_string(),
            category,
            MoveError::DestinationConflict {
                destination: Path::new("/target").join(category.dir_name()).join(name),
            },
        )
    }

    #[test]
    fn test_tally_counts_each_bucket() {
        let outcomes = vec![
            MoveOutcome::moved("a.jpg".to_string(), Category::Images),
            MoveOutcome::moved("b.txt".to_string(), Category::Documents),
            conflict("c.pdf", Category::Documents),
        ];

        let stats = OrganizeStats::tally(&outcomes, 2);
        assert_eq!(stats.moved, 2);
        assert_eq!(stats.errored, 1);
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.moved + stats.errored, outcomes.len());
    }

    #[test]
    fn test_tally_empty_outcomes() {
        let stats = OrganizeStats::tally(&[], 5);
        assert_eq!(
            stats,
            OrganizeStats {
                moved: 0,
                errored: 0,
                skipped: 5
            }
        );
    }

    #[test]
    fn test_outcome_success_flag() {
        let ok = MoveOutcome::moved("a.jpg".to_string(), Category::Images);
        assert!(ok.succeeded());

        let failed = conflict("a.jpg", Category::Images);
        assert!(!failed.succeeded());
        assert!(failed.error.is_some());
    }

    #[test]
    fn test_move_error_messages_are_human_readable() {
        let error = MoveError::DestinationConflict {
            destination: PathBuf::from("/target/Documents/report.pdf"),
        };
        let message = error.to_string();
        assert!(message.contains("already exists"));
        assert!(message.contains("report.pdf"));
    }

    #[test]
    fn test_report_preserves_outcome_order() {
        let outcomes = vec![
            MoveOutcome::moved("first.jpg".to_string(), Category::Images),
            MoveOutcome::moved("second.txt".to_string(), Category::Documents),
        ];
        let report = OrganizeReport::new(outcomes, 0);

        assert_eq!(report.outcomes[0].file_name, "first.jpg");
        assert_eq!(report.outcomes[1].file_name, "second.txt");
        assert!(report.is_complete_success());
        assert!(!report.timestamp.is_empty());
    }
}
