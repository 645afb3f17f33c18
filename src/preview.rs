/// Non-destructive organization previews.
///
/// A preview answers "what would happen" without touching anything: the
/// directory is scanned once, eligible files are grouped by category, and
/// excluded files are counted. Previews are recomputed from scratch on every
/// call; nothing is cached, so a preview always reflects the directory as it
/// is right now.
use crate::file_category::{Category, Classification, Classifier};
use crate::scanner::{DirectoryScanner, ScanError};
use std::path::Path;

/// The files one category would receive, in scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    /// The destination category.
    pub category: Category,
    /// Names of the files that would be moved there.
    pub files: Vec<String>,
}

/// The plan a preview produced.
///
/// Categories appear in the order they were first encountered, and only if
/// they would receive at least one file. Every regular file in the directory
/// is either listed under exactly one category or counted as skipped.
#[derive(Debug, Default)]
pub struct PreviewResult {
    /// Non-empty category groups, in first-seen order.
    pub groups: Vec<CategoryGroup>,
    /// Number of files the skip rules excluded.
    pub skipped: usize,
}

impl PreviewResult {
    /// Total number of files that would be moved.
    pub fn eligible_count(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }

    /// Returns true if nothing would be moved.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the group for a category, if any file would go there.
    pub fn group(&self, category: Category) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.category == category)
    }
}

/// Builds organization previews.
pub struct PreviewBuilder;

impl PreviewBuilder {
    /// Scans `path` and groups its eligible files by category.
    ///
    /// # Errors
    ///
    /// Fails only if the directory itself cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sortdir::file_category::Classifier;
    /// use sortdir::preview::PreviewBuilder;
    /// use std::path::Path;
    ///
    /// let preview = PreviewBuilder::preview(Path::new("/home/user/Downloads"), &Classifier::default())?;
    /// for group in &preview.groups {
    ///     println!("{}: {} files", group.category.dir_name(), group.files.len());
    /// }
    /// println!("{} skipped", preview.skipped);
    /// # Ok::<(), sortdir::scanner::ScanError>(())
    /// ```
    pub fn preview(path: &Path, classifier: &Classifier) -> Result<PreviewResult, ScanError> {
        let scan = DirectoryScanner::scan(path, classifier)?;

        let mut result = PreviewResult::default();
        for file in scan.files {
            match file.classification {
                Classification::Move(category) => {
                    match result.groups.iter_mut().find(|g| g.category == category) {
                        Some(group) => group.files.push(file.name),
                        None => result.groups.push(CategoryGroup {
                            category,
                            files: vec![file.name],
                        }),
                    }
                }
                Classification::Skip(_) => result.skipped += 1,
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).expect("Failed to create file");
    }

    #[test]
    fn test_preview_empty_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let preview = PreviewBuilder::preview(temp_dir.path(), &Classifier::default())
            .expect("preview should succeed");

        assert!(preview.is_empty());
        assert_eq!(preview.skipped, 0);
    }

    #[test]
    fn test_preview_groups_by_category() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "photo.jpg");
        touch(temp_dir.path(), "selfie.png");
        touch(temp_dir.path(), "notes.txt");

        let preview = PreviewBuilder::preview(temp_dir.path(), &Classifier::default())
            .expect("preview should succeed");

        let images = preview.group(Category::Images).expect("Images group");
        assert_eq!(images.files.len(), 2);
        let documents = preview.group(Category::Documents).expect("Documents group");
        assert_eq!(documents.files, vec!["notes.txt"]);
    }

    #[test]
    fn test_preview_counts_skipped_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "setup.exe");
        touch(temp_dir.path(), "archive.zip");
        touch(temp_dir.path(), ".hidden_config");

        let preview = PreviewBuilder::preview(temp_dir.path(), &Classifier::default())
            .expect("preview should succeed");

        assert!(preview.is_empty());
        assert_eq!(preview.skipped, 3);
    }

    #[test]
    fn test_preview_omits_empty_categories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "photo.jpg");

        let preview = PreviewBuilder::preview(temp_dir.path(), &Classifier::default())
            .expect("preview should succeed");

        assert_eq!(preview.groups.len(), 1);
        assert!(preview.group(Category::Videos).is_none());
    }

    #[test]
    fn test_preview_accounts_for_every_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "photo.jpg");
        touch(temp_dir.path(), "notes.txt");
        touch(temp_dir.path(), "song.mp3");
        touch(temp_dir.path(), "tool.exe");

        let preview = PreviewBuilder::preview(temp_dir.path(), &Classifier::default())
            .expect("preview should succeed");

        let total_regular_files = fs::read_dir(temp_dir.path())
            .expect("Failed to read directory")
            .flatten()
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .count();

        assert_eq!(preview.eligible_count() + preview.skipped, total_regular_files);
    }

    #[test]
    fn test_preview_does_not_modify_the_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        touch(temp_dir.path(), "photo.jpg");

        PreviewBuilder::preview(temp_dir.path(), &Classifier::default())
            .expect("preview should succeed");

        assert!(temp_dir.path().join("photo.jpg").exists());
        let dirs = fs::read_dir(temp_dir.path())
            .expect("Failed to read directory")
            .flatten()
            .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .count();
        assert_eq!(dirs, 0, "Preview must not create folders");
    }
}
