//! Skip-rule configuration.
//!
//! The exclusion policy that keeps hidden files, system files, archives, and
//! executables out of an organization run is built in and always active. A
//! TOML configuration file can extend it with additional rules:
//!
//! ```toml
//! [skip]
//! filenames = ["inbox.lock"]
//! extensions = ["bak", "tmp"]
//! patterns = ["draft-*.pdf"]
//! regex = ['^scratch_\d+']
//! ```
//!
//! Rules only ever add exclusions; the built-in policy cannot be relaxed.
//! Glob and regex patterns are compiled once, when the configuration is
//! loaded, so matching individual filenames stays cheap.

use crate::file_category::SkipReason;
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Windows metadata files that must never be moved, compared case-insensitively.
const SYSTEM_FILENAMES: &[&str] = &[
    "desktop.ini",
    "thumbs.db",
    "pagefile.sys",
    "hiberfil.sys",
    "$recycle.bin",
    "system volume information",
];

/// Extensions excluded from organization: archives, executables, and
/// system/binary formats.
const BLOCKED_EXTENSIONS: &[&str] = &[
    "zip", "rar", "7z", "tar", "gz", "bz2", "xz", // archives
    "exe", "msi", "bat", "cmd", "com", "scr", // executables
    "dll", "sys", "ini", "log", // system
];

/// Errors that can occur during configuration loading and compilation.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    ConfigNotFound(PathBuf),
    /// Invalid TOML syntax or structure.
    ConfigInvalid(String),
    /// Invalid glob pattern provided.
    InvalidGlobPattern(String),
    /// Invalid regex pattern provided with the actual error reason.
    InvalidRegexPattern {
        /// The regex pattern that failed to compile.
        pattern: String,
        /// The reason why the pattern is invalid.
        reason: String,
    },
    /// IO error while reading configuration.
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigNotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::ConfigInvalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::InvalidGlobPattern(pattern) => {
                write!(f, "Invalid glob pattern '{}'", pattern)
            }
            ConfigError::InvalidRegexPattern { pattern, reason } => {
                write!(f, "Invalid regex pattern '{}': {}", pattern, reason)
            }
            ConfigError::IoError(msg) => write!(f, "IO error reading configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// User-supplied skip rules, deserialized from a TOML configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkipConfig {
    /// Extra exclusion rules, merged on top of the built-in policy.
    #[serde(default)]
    pub skip: SkipRules,
}

/// The rule lists a configuration file may provide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkipRules {
    /// Exact filenames to exclude (case-insensitive).
    #[serde(default)]
    pub filenames: Vec<String>,

    /// File extensions to exclude (e.g. "bak", "tmp").
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Glob patterns matched against the filename (e.g. "draft-*.pdf").
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Regex patterns matched against the filename.
    #[serde(default)]
    pub regex: Vec<String>,
}

impl SkipConfig {
    /// Load configuration from a file, with fallback to the built-in policy.
    ///
    /// Attempts to load configuration in the following order:
    /// 1. If `config_path` is provided, load from that file
    /// 2. Look for `.sortdir.toml` in the current directory
    /// 3. Look for `sortdir/config.toml` in the user configuration directory
    /// 4. Fall back to no extra rules
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is explicitly provided but
    /// cannot be read or parsed.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(".sortdir.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("sortdir").join("config.toml");
            if user_config.exists() {
                return Self::load_from_file(&user_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ConfigInvalid(e.to_string()))
    }

    /// Compile the rules into an [`ExclusionPolicy`] ready for matching.
    ///
    /// # Errors
    ///
    /// Returns an error if any glob or regex pattern is invalid.
    pub fn compile(self) -> Result<ExclusionPolicy, ConfigError> {
        ExclusionPolicy::with_rules(self.skip)
    }
}

/// The compiled exclusion policy: built-in rules plus any user extensions.
///
/// Deciding whether a filename is excluded is the first step of
/// classification, so all patterns are pre-compiled and all name sets are
/// lowercased up front.
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    system_filenames: HashSet<String>,
    blocked_extensions: HashSet<String>,
    extra_filenames: HashSet<String>,
    extra_extensions: HashSet<String>,
    extra_patterns: Vec<Pattern>,
    extra_regexes: Vec<Regex>,
}

impl ExclusionPolicy {
    /// Creates the policy with only the built-in rules active.
    pub fn builtin() -> Self {
        Self {
            system_filenames: SYSTEM_FILENAMES.iter().map(|s| s.to_string()).collect(),
            blocked_extensions: BLOCKED_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            extra_filenames: HashSet::new(),
            extra_extensions: HashSet::new(),
            extra_patterns: Vec::new(),
            extra_regexes: Vec::new(),
        }
    }

    /// Creates the policy with the built-in rules plus user extensions.
    fn with_rules(rules: SkipRules) -> Result<Self, ConfigError> {
        let extra_patterns = rules
            .patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|_| ConfigError::InvalidGlobPattern(pattern.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let extra_regexes = rules
            .regex
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::InvalidRegexPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut policy = Self::builtin();
        policy.extra_filenames = rules
            .filenames
            .iter()
            .map(|name| name.to_lowercase())
            .collect();
        policy.extra_extensions = rules
            .extensions
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect();
        policy.extra_patterns = extra_patterns;
        policy.extra_regexes = extra_regexes;
        Ok(policy)
    }

    /// Returns the reason a filename is excluded, or `None` if it is eligible.
    ///
    /// Checks run in a fixed order with early termination:
    /// 1. Hidden files (leading ".")
    /// 2. Office temporary files (leading "~$") and system filenames
    /// 3. Blocked extensions
    /// 4. User-configured filenames, extensions, globs, and regexes
    pub fn skip_reason(&self, file_name: &str) -> Option<SkipReason> {
        if file_name.starts_with('.') {
            return Some(SkipReason::Hidden);
        }

        let name_lower = file_name.to_lowercase();
        if file_name.starts_with("~$") || self.system_filenames.contains(&name_lower) {
            return Some(SkipReason::SystemFile);
        }

        let extension = Path::new(file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase());
        if let Some(ref ext) = extension
            && self.blocked_extensions.contains(ext)
        {
            return Some(SkipReason::BlockedExtension);
        }

        if self.extra_filenames.contains(&name_lower) {
            return Some(SkipReason::ConfigRule);
        }
        if let Some(ref ext) = extension
            && self.extra_extensions.contains(ext)
        {
            return Some(SkipReason::ConfigRule);
        }
        if self.extra_patterns.iter().any(|p| p.matches(file_name)) {
            return Some(SkipReason::ConfigRule);
        }
        if self.extra_regexes.iter().any(|r| r.is_match(file_name)) {
            return Some(SkipReason::ConfigRule);
        }

        None
    }
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self::builtin()
    }
}
