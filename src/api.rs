//! Boundary operations for presentation layers.
//!
//! A frontend (a CLI, a webview bridge, any JSON consumer) drives the engine
//! through a handful of operations: suggest a starting path, set the target
//! path, preview, refresh, and organize. Every operation returns a
//! serializable response with a `success` flag and a display message instead
//! of propagating errors, so the presentation layer only ever renders.
//!
//! The active target directory is an explicit [`Session`] owned by the
//! caller; the engine holds no global state between calls.

use crate::file_category::Classifier;
use crate::file_organizer::FileOrganizer;
use crate::path_validator::{PathValidationError, PathValidator};
use crate::preview::PreviewBuilder;
use crate::report::OrganizeStats;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A validated target directory, held for the duration of a user session.
///
/// Opening a session is the only way to set the path, and re-opening is the
/// only way to change it.
#[derive(Debug, Clone)]
pub struct Session {
    target: PathBuf,
}

impl Session {
    /// Validates `raw` and opens a session on the resulting directory.
    ///
    /// # Errors
    ///
    /// Fails if the input is empty or does not name an existing, accessible
    /// directory.
    pub fn open(raw: &str) -> Result<Self, PathValidationError> {
        PathValidator::validate(raw).map(|target| Self { target })
    }

    /// The absolute directory this session operates on.
    pub fn target(&self) -> &Path {
        &self.target
    }
}

/// Suggests a starting directory: the user's documents folder, falling back
/// to the home directory, then to the current directory.
pub fn default_start_path() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Response to a set-path request.
#[derive(Debug, Serialize)]
pub struct SetPathResponse {
    pub success: bool,
    pub message: String,
    /// The canonical absolute path, when validation succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Validates a raw path and reports the result.
///
/// On success the caller should open (or keep) a [`Session`] on the returned
/// path.
pub fn set_path(raw: &str) -> SetPathResponse {
    match Session::open(raw) {
        Ok(session) => SetPathResponse {
            success: true,
            message: "Path set".to_string(),
            path: Some(session.target().display().to_string()),
        },
        Err(e) => SetPathResponse {
            success: false,
            message: e.to_string(),
            path: None,
        },
    }
}

/// Response to a preview or refresh request.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub success: bool,
    pub message: String,
    /// Category name to filenames, sorted by category for stable output.
    /// Filenames keep scan order.
    pub preview: BTreeMap<String, Vec<String>>,
    /// Number of files the skip rules excluded.
    pub skipped: usize,
}

/// Builds a preview of `path` and reports the plan.
pub fn preview(path: &Path, classifier: &Classifier) -> PreviewResponse {
    match PreviewBuilder::preview(path, classifier) {
        Ok(result) => {
            let eligible = result.eligible_count();
            let preview = result
                .groups
                .into_iter()
                .map(|group| (group.category.dir_name().to_string(), group.files))
                .collect();
            PreviewResponse {
                success: true,
                message: format!("{} files to move, {} skipped", eligible, result.skipped),
                preview,
                skipped: result.skipped,
            }
        }
        Err(e) => PreviewResponse {
            success: false,
            message: e.to_string(),
            preview: BTreeMap::new(),
            skipped: 0,
        },
    }
}

/// Re-runs the preview on a session's target, picking up files added or
/// removed since the last look.
pub fn refresh(session: &Session, classifier: &Classifier) -> PreviewResponse {
    preview(session.target(), classifier)
}

/// One per-file entry in an organize response.
#[derive(Debug, Serialize)]
pub struct OutcomeEntry {
    pub filename: String,
    pub category: String,
    pub success: bool,
    /// Human-readable failure reason, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Response to an organize request.
#[derive(Debug, Serialize)]
pub struct OrganizeResponse {
    pub success: bool,
    pub message: String,
    /// When the run happened, RFC 3339. Absent if the run never started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub stats: OrganizeStats,
    /// Per-file outcomes in processing order.
    pub outcomes: Vec<OutcomeEntry>,
}

/// Organizes the session's target directory and reports every outcome.
///
/// Per-file failures appear as unsuccessful entries in `outcomes`; only a
/// directory that cannot be read at all yields `success: false`.
pub fn organize(session: &Session, classifier: &Classifier) -> OrganizeResponse {
    match FileOrganizer::organize(session.target(), classifier) {
        Ok(report) => {
            let outcomes: Vec<OutcomeEntry> = report
                .outcomes
                .iter()
                .map(|outcome| OutcomeEntry {
                    filename: outcome.file_name.clone(),
                    category: outcome.category.dir_name().to_string(),
                    success: outcome.succeeded(),
                    reason: outcome.error.as_ref().map(|e| e.to_string()),
                })
                .collect();
            OrganizeResponse {
                success: true,
                message: format!(
                    "{} files moved, {} errors, {} skipped",
                    report.stats.moved, report.stats.errored, report.stats.skipped
                ),
                timestamp: Some(report.timestamp),
                stats: report.stats,
                outcomes,
            }
        }
        Err(e) => OrganizeResponse {
            success: false,
            message: e.to_string(),
            timestamp: None,
            stats: OrganizeStats {
                moved: 0,
                errored: 0,
                skipped: 0,
            },
            outcomes: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_set_path_rejects_bad_input() {
        let response = set_path("");
        assert!(!response.success);
        assert!(response.path.is_none());

        let response = set_path("/no/such/directory");
        assert!(!response.success);
    }

    #[test]
    fn test_set_path_accepts_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");

        let response = set_path(&temp_dir.path().to_string_lossy());
        assert!(response.success);
        let path = response.path.expect("path should be present");
        assert!(Path::new(&path).is_absolute());
    }

    #[test]
    fn test_default_start_path_is_usable() {
        let suggested = default_start_path();
        assert!(!suggested.as_os_str().is_empty());
    }

    #[test]
    fn test_preview_response_maps_categories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        File::create(temp_dir.path().join("photo.jpg")).expect("Failed to create file");
        File::create(temp_dir.path().join("tool.exe")).expect("Failed to create file");

        let response = preview(temp_dir.path(), &Classifier::default());
        assert!(response.success);
        assert_eq!(response.preview["Images"], vec!["photo.jpg"]);
        assert_eq!(response.skipped, 1);
    }

    #[test]
    fn test_preview_response_on_unreadable_path() {
        let response = preview(Path::new("/no/such/directory"), &Classifier::default());
        assert!(!response.success);
        assert!(response.preview.is_empty());
    }

    #[test]
    fn test_organize_response_reports_outcomes() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        File::create(temp_dir.path().join("photo.jpg")).expect("Failed to create file");

        let session =
            Session::open(&temp_dir.path().to_string_lossy()).expect("session should open");
        let response = organize(&session, &Classifier::default());

        assert!(response.success);
        assert_eq!(response.stats.moved, 1);
        assert_eq!(response.outcomes.len(), 1);
        assert!(response.outcomes[0].success);
        assert!(response.outcomes[0].reason.is_none());
        assert_eq!(response.outcomes[0].category, "Images");
        assert!(response.timestamp.is_some());
    }

    #[test]
    fn test_responses_serialize_to_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        File::create(temp_dir.path().join("notes.txt")).expect("Failed to create file");

        let response = preview(temp_dir.path(), &Classifier::default());
        let json = serde_json::to_string(&response).expect("serialization should succeed");
        assert!(json.contains("\"Documents\""));
        assert!(json.contains("notes.txt"));
    }
}
