/// File classification for directory organization.
///
/// This module decides, from a filename alone, whether a file should be moved
/// and into which category folder. Classification is driven by a declarative
/// extension table plus an exclusion policy; file contents are never read, so
/// the same name always classifies the same way.
///
/// # Examples
///
/// ```
/// use sortdir::file_category::{Category, Classification, Classifier};
///
/// let classifier = Classifier::default();
/// assert_eq!(classifier.classify("photo.jpg"), Classification::Move(Category::Images));
/// assert_eq!(classifier.classify("notes.txt"), Classification::Move(Category::Documents));
/// assert!(classifier.classify("setup.exe").is_skip());
/// ```
use crate::config::ExclusionPolicy;
use std::collections::HashMap;
use std::path::Path;

/// A file category. The destination subfolder carries the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Image files (PNG, JPG, GIF, etc.)
    Images,
    /// Text and office documents (PDF, DOCX, TXT, etc.)
    Documents,
    /// Spreadsheet files (XLSX, CSV, ODS, etc.)
    Spreadsheets,
    /// Presentation files (PPTX, ODP, etc.)
    Presentations,
    /// Video files (MP4, MKV, AVI, etc.)
    Videos,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Music,
    /// Everything eligible that matches no other category.
    Others,
}

impl Category {
    /// Returns the destination folder name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortdir::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "Images");
    /// assert_eq!(Category::Others.dir_name(), "Others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "Images",
            Category::Documents => "Documents",
            Category::Spreadsheets => "Spreadsheets",
            Category::Presentations => "Presentations",
            Category::Videos => "Videos",
            Category::Music => "Music",
            Category::Others => "Others",
        }
    }

    /// Returns a human-readable description of this category.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Images => "Image files",
            Category::Documents => "Document files",
            Category::Spreadsheets => "Spreadsheet files",
            Category::Presentations => "Presentation files",
            Category::Videos => "Video files",
            Category::Music => "Audio files",
            Category::Others => "Other files",
        }
    }
}

/// Why a file was excluded from organization.
///
/// Skipping is policy, not failure: skipped files are counted and reported
/// but never surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Hidden file (name starts with ".").
    Hidden,
    /// Operating-system metadata or an Office temporary file.
    SystemFile,
    /// Archive, executable, or other blocked extension.
    BlockedExtension,
    /// Matched a user-configured skip rule.
    ConfigRule,
}

impl SkipReason {
    /// Returns a short human-readable description of the reason.
    pub fn description(&self) -> &'static str {
        match self {
            SkipReason::Hidden => "hidden file",
            SkipReason::SystemFile => "system file",
            SkipReason::BlockedExtension => "archive or executable",
            SkipReason::ConfigRule => "excluded by configuration",
        }
    }
}

/// The outcome of classifying a single filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The file is eligible and belongs to this category.
    Move(Category),
    /// The file must not be moved.
    Skip(SkipReason),
}

impl Classification {
    /// Returns the category if the file is eligible.
    pub fn category(&self) -> Option<Category> {
        match self {
            Classification::Move(category) => Some(*category),
            Classification::Skip(_) => None,
        }
    }

    /// Returns true if the file is excluded from organization.
    pub fn is_skip(&self) -> bool {
        matches!(self, Classification::Skip(_))
    }
}

/// The fixed extension-to-category table.
///
/// Kept as plain data so the classification policy can be read and tested at
/// a glance. Lookups are case-insensitive.
const EXTENSION_TABLE: &[(&str, Category)] = &[
    // Images
    ("jpg", Category::Images),
    ("jpeg", Category::Images),
    ("png", Category::Images),
    ("gif", Category::Images),
    ("bmp", Category::Images),
    ("svg", Category::Images),
    ("webp", Category::Images),
    ("ico", Category::Images),
    ("tiff", Category::Images),
    ("heic", Category::Images),
    // Documents
    ("pdf", Category::Documents),
    ("doc", Category::Documents),
    ("docx", Category::Documents),
    ("txt", Category::Documents),
    ("md", Category::Documents),
    ("rtf", Category::Documents),
    ("odt", Category::Documents),
    // Spreadsheets
    ("xls", Category::Spreadsheets),
    ("xlsx", Category::Spreadsheets),
    ("csv", Category::Spreadsheets),
    ("ods", Category::Spreadsheets),
    // Presentations
    ("ppt", Category::Presentations),
    ("pptx", Category::Presentations),
    ("odp", Category::Presentations),
    // Videos
    ("mp4", Category::Videos),
    ("avi", Category::Videos),
    ("mkv", Category::Videos),
    ("mov", Category::Videos),
    ("wmv", Category::Videos),
    ("flv", Category::Videos),
    ("webm", Category::Videos),
    ("3gp", Category::Videos),
    // Music
    ("mp3", Category::Music),
    ("wav", Category::Music),
    ("flac", Category::Music),
    ("aac", Category::Music),
    ("ogg", Category::Music),
    ("m4a", Category::Music),
    ("wma", Category::Music),
];

/// Classifies filenames into categories, applying the exclusion policy first.
///
/// Exclusion always wins: a name matched by any skip rule is skipped even if
/// its extension appears in the category table.
#[derive(Debug, Clone)]
pub struct Classifier {
    extension_map: HashMap<&'static str, Category>,
    exclusions: ExclusionPolicy,
}

impl Classifier {
    /// Creates a classifier with the standard category table and the given
    /// exclusion policy.
    pub fn new(exclusions: ExclusionPolicy) -> Self {
        Self {
            extension_map: EXTENSION_TABLE.iter().copied().collect(),
            exclusions,
        }
    }

    /// Classifies a single filename.
    ///
    /// Eligible files with an extension not present in the table (or with no
    /// extension at all) fall into [`Category::Others`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sortdir::file_category::{Category, Classification, Classifier, SkipReason};
    ///
    /// let classifier = Classifier::default();
    /// assert_eq!(classifier.classify("movie.MP4"), Classification::Move(Category::Videos));
    /// assert_eq!(classifier.classify("mystery.xyz"), Classification::Move(Category::Others));
    /// assert_eq!(classifier.classify(".profile"), Classification::Skip(SkipReason::Hidden));
    /// ```
    pub fn classify(&self, file_name: &str) -> Classification {
        if let Some(reason) = self.exclusions.skip_reason(file_name) {
            return Classification::Skip(reason);
        }

        let category = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.extension_to_category(ext))
            .unwrap_or(Category::Others);

        Classification::Move(category)
    }

    /// Maps a file extension to its category, if the table knows it.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortdir::file_category::{Category, Classifier};
    ///
    /// let classifier = Classifier::default();
    /// assert_eq!(classifier.extension_to_category("pdf"), Some(Category::Documents));
    /// assert_eq!(classifier.extension_to_category("PNG"), Some(Category::Images));
    /// assert_eq!(classifier.extension_to_category("xyz"), None);
    /// ```
    pub fn extension_to_category(&self, ext: &str) -> Option<Category> {
        self.extension_map.get(ext.to_lowercase().as_str()).copied()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ExclusionPolicy::builtin())
    }
}
