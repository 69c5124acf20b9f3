//! Type definitions for discovered skills and operation results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the definition file that marks a directory as a skill.
pub const SKILL_FILE_NAME: &str = "SKILL.md";

/// One discovered skill.
///
/// Produced by a scan; immutable afterwards. The `root_path` uniquely
/// determines the skill's file scope: every file access for this skill is
/// contained within it.
///
/// # Examples
///
/// ```no_run
/// use skill_registry::SkillIndex;
///
/// # fn example() -> skill_registry::Result<()> {
/// let index = SkillIndex::scan("./skills")?;
/// if let Some(skill) = index.get("pdf-extraction") {
///     println!("{} lives at {}", skill.name, skill.root_path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    /// Skill name from frontmatter (`^[a-z0-9-]{1,64}$`)
    pub name: String,

    /// Non-empty description from frontmatter
    pub description: String,

    /// Absolute path to the skill's directory
    pub root_path: PathBuf,

    /// Absolute path to `root_path/SKILL.md`
    pub definition_file_path: PathBuf,
}

/// Lightweight listing entry for one skill (no file content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkillSummary {
    /// Skill name
    pub name: String,

    /// Skill description
    pub description: String,

    /// Location of the skill directory
    pub path: String,
}

/// Selects what a detail or file request returns.
///
/// Serialized as `"content"`, `"file_path"`, or `"both"`; unrecognized
/// values are rejected when the request parameters are decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    /// Return only the file's full text
    Content,

    /// Return only the file's absolute path
    FilePath,

    /// Return both content and path (the default)
    #[default]
    Both,
}

/// Result of a skill detail request.
///
/// `content` and `file_path` are populated according to the requested
/// [`ReturnType`]; the recursive file listing is always included so the
/// caller can discover supporting files.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SkillDetails {
    /// Full text of `SKILL.md`, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Absolute path to `SKILL.md`, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Relative paths of all files under the skill directory, sorted
    pub files: Vec<String>,
}

/// Result of a related-file request.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct RelatedFile {
    /// Full text of the file, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Absolute path to the file, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}
