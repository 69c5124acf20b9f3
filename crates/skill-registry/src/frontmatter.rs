//! YAML frontmatter extraction and validation for `SKILL.md` files.
//!
//! A definition file opens with a frontmatter block delimited by `---`
//! lines:
//!
//! ```markdown
//! ---
//! name: pdf-extraction
//! description: Extract text and tables from PDF files
//! ---
//!
//! # PDF Extraction
//! ...
//! ```
//!
//! The block is parsed as a generic YAML mapping and then validated against
//! the fixed schema: required `name` matching `^[a-z0-9-]{1,64}$` (and not
//! a reserved token), required non-empty `description`. Extra keys are
//! tolerated and ignored rather than trusted.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

// Pre-compiled regexes (compiled once, reused)
static FRONTMATTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // The optional `\r` before each newline keeps CRLF-authored files valid.
    Regex::new(r"^---[ \t]*\r?\n([\s\S]*?)\r?\n---[ \t]*\r?(\n|$)").expect("valid regex")
});
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]{1,64}$").expect("valid regex"));

/// Names that collide with markup tokens the hosting LLM treats specially.
pub const RESERVED_NAMES: &[&str] = &["skill", "skills", "system", "tool", "tools"];

/// Validated metadata from one frontmatter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    /// Skill name (pattern-checked, not reserved)
    pub name: String,

    /// Non-empty description
    pub description: String,
}

/// Raw frontmatter shape before validation.
///
/// `name` and `description` are optional here so that their absence
/// surfaces as a validation failure with a precise message instead of a
/// generic YAML error. Unknown keys are tolerated and ignored.
#[derive(Debug, Deserialize)]
struct RawFrontmatter {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    description: Option<String>,
}

/// Why a frontmatter block was rejected.
///
/// Split into parse-level and validation-level failures so the scanner can
/// record the right diagnostic category for each skipped candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterError {
    /// No leading `---` delimited block, or the block is not a YAML mapping.
    Parse(String),

    /// The block parsed but failed the schema (missing/invalid fields).
    Validation(String),
}

impl std::fmt::Display for FrontmatterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(reason) | Self::Validation(reason) => f.write_str(reason),
        }
    }
}

/// Extract and validate the frontmatter of a `SKILL.md` file.
///
/// # Errors
///
/// Returns [`FrontmatterError::Parse`] when the leading `---` block is
/// missing or is not a YAML string mapping, and
/// [`FrontmatterError::Validation`] when required fields are missing or
/// the name fails the pattern/reserved checks.
///
/// # Examples
///
/// ```
/// use skill_registry::frontmatter::parse_frontmatter;
///
/// let content = "---\nname: my-skill\ndescription: Does things\n---\n\n# Body\n";
/// let fm = parse_frontmatter(content).unwrap();
/// assert_eq!(fm.name, "my-skill");
/// assert_eq!(fm.description, "Does things");
/// ```
pub fn parse_frontmatter(content: &str) -> Result<Frontmatter, FrontmatterError> {
    let block = FRONTMATTER_REGEX
        .captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| FrontmatterError::Parse("no YAML frontmatter block found".to_string()))?;

    let raw: RawFrontmatter = serde_yaml::from_str(block)
        .map_err(|e| FrontmatterError::Parse(format!("invalid YAML in frontmatter: {e}")))?;

    let name = raw
        .name
        .ok_or_else(|| FrontmatterError::Validation("missing 'name' field".to_string()))?;

    let description = raw
        .description
        .ok_or_else(|| FrontmatterError::Validation("missing 'description' field".to_string()))?;

    validate_name(&name)?;

    if description.trim().is_empty() {
        return Err(FrontmatterError::Validation(
            "'description' must not be empty".to_string(),
        ));
    }

    Ok(Frontmatter { name, description })
}

/// Validate a skill name against the naming rules.
fn validate_name(name: &str) -> Result<(), FrontmatterError> {
    if !NAME_REGEX.is_match(name) {
        return Err(FrontmatterError::Validation(format!(
            "invalid name '{name}': must match ^[a-z0-9-]{{1,64}}$ \
             (lowercase letters, digits, and hyphens only)"
        )));
    }

    if RESERVED_NAMES.contains(&name) {
        return Err(FrontmatterError::Validation(format!(
            "invalid name '{name}': reserved token"
        )));
    }

    Ok(())
}
