//! Error types for skill registry operations.

use std::path::PathBuf;

/// Result type for skill registry operations.
pub type Result<T> = std::result::Result<T, SkillError>;

/// Errors that can occur during skill discovery and file access.
///
/// Only [`SkillError::Configuration`] is fatal: it means the skills root
/// directory itself is unusable and there is nothing to serve. Every other
/// variant is either a per-skill diagnostic recorded during a scan
/// ([`Parse`](Self::Parse), [`Validation`](Self::Validation)) or a
/// per-request failure reported to the caller while the server keeps
/// serving.
#[derive(thiserror::Error, Debug)]
pub enum SkillError {
    /// The skills root directory is missing or not a directory.
    ///
    /// Surfaced before serving any requests; the process should not start
    /// without a usable root.
    #[error("invalid skills directory {path}: {reason}")]
    Configuration {
        /// The configured root path
        path: PathBuf,
        /// Why the root is unusable
        reason: String,
    },

    /// A `SKILL.md` file has missing or malformed YAML frontmatter.
    ///
    /// Non-fatal during a scan: the candidate is skipped and recorded in
    /// the [`ScanReport`](crate::ScanReport) diagnostics.
    #[error("failed to parse {path}: {reason}")]
    Parse {
        /// Path of the definition file that failed to parse
        path: PathBuf,
        /// Description of the parse failure
        reason: String,
    },

    /// Frontmatter parsed but failed schema validation.
    ///
    /// Covers missing `name`/`description` keys, names that do not match
    /// `^[a-z0-9-]{1,64}$`, reserved names, empty descriptions, and
    /// duplicate names within one scan. Non-fatal, skill excluded.
    #[error("invalid skill definition {path}: {reason}")]
    Validation {
        /// Path of the definition file that failed validation
        path: PathBuf,
        /// Description of the validation failure
        reason: String,
    },

    /// The requested skill name is not in the index.
    #[error("skill not found: {name}")]
    SkillNotFound {
        /// The requested skill name
        name: String,
    },

    /// A requested relative path resolves outside its skill's directory.
    ///
    /// # Security
    ///
    /// Carries only the skill name and the path as requested, never the
    /// resolved out-of-bounds path, so error messages cannot leak
    /// filesystem layout beyond the skill root.
    #[error("path '{requested}' escapes the directory of skill '{skill}'")]
    PathTraversal {
        /// The skill whose directory was escaped
        skill: String,
        /// The relative path as requested by the caller
        requested: String,
    },

    /// A path stayed within the skill directory but no file exists there.
    ///
    /// Also reported when the resolved path is a directory rather than a
    /// regular file.
    #[error("file not found in skill '{skill}': {requested}")]
    FileNotFound {
        /// The skill that was queried
        skill: String,
        /// The relative path as requested by the caller
        requested: String,
    },

    /// I/O error during file or directory operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
