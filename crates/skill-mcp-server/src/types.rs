//! Type definitions for the MCP tool surface.
//!
//! This module defines all parameter and result types for the three tools:
//! - `get_available_skills`: ordered overview of every discovered skill
//! - `get_skill_details`: definition file content plus file listing
//! - `get_skill_related_file`: contained access to a supporting file

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use skill_registry::{ReturnType, SkillSummary};

// ============================================================================
// get_available_skills types
// ============================================================================

/// Result of listing the available skills.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AvailableSkillsResult {
    /// Number of skills in the index
    pub total_skills: usize,

    /// Skill summaries, ordered lexicographically by name
    pub skills: Vec<SkillSummary>,
}

// ============================================================================
// get_skill_details types
// ============================================================================

/// Parameters for fetching one skill's details.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSkillDetailsParams {
    /// The skill name, as returned by `get_available_skills`
    pub skill_name: String,

    /// What to return for the definition file: "content", "file_path",
    /// or "both" (default)
    #[serde(default)]
    pub return_type: ReturnType,
}

/// Result of a skill detail request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SkillDetailsResult {
    /// The skill name
    pub skill_name: String,

    /// Full text of the SKILL.md file, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Absolute path to the SKILL.md file, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,

    /// Relative paths of all files in the skill directory, sorted
    pub files: Vec<String>,
}

// ============================================================================
// get_skill_related_file types
// ============================================================================

/// Parameters for reading a file inside a skill directory.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSkillRelatedFileParams {
    /// The skill name, as returned by `get_available_skills`
    pub skill_name: String,

    /// Path relative to the skill directory (e.g., "scripts/run.py")
    pub relative_path: String,

    /// What to return for the file: "content", "file_path", or "both"
    /// (default)
    #[serde(default)]
    pub return_type: ReturnType,
}

/// Result of a related-file request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RelatedFileResult {
    /// The skill name
    pub skill_name: String,

    /// The requested relative path
    pub relative_path: String,

    /// Full text of the file, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Absolute path to the file, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}
