//! Recursive discovery of skill directories.
//!
//! A scan walks the skills root looking for files named exactly
//! [`SKILL_FILE_NAME`](crate::types::SKILL_FILE_NAME) at any depth; the
//! matched file's parent directory becomes the skill root. Each candidate
//! is parsed and validated independently: failures are recorded as
//! diagnostics and the walk continues, so one broken skill never takes
//! down the whole index.
//!
//! The walk is sorted by file name, which makes the scan a deterministic
//! function of the directory tree's contents. Duplicate skill names are
//! resolved first-wins in that order; later duplicates become diagnostics.

use crate::error::{Result, SkillError};
use crate::frontmatter::{FrontmatterError, parse_frontmatter};
use crate::index::SkillIndex;
use crate::types::{SKILL_FILE_NAME, Skill};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Outcome of one scan: the built index plus per-candidate diagnostics.
///
/// # Examples
///
/// ```no_run
/// use skill_registry::scanner::scan;
///
/// # fn example() -> skill_registry::Result<()> {
/// let report = scan("./skills")?;
/// for skipped in &report.skipped {
///     eprintln!("skipped: {skipped}");
/// }
/// let index = report.index;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ScanReport {
    /// Index of all valid, uniquely named skills
    pub index: SkillIndex,

    /// Errors that excluded candidates from the index
    pub skipped: Vec<SkillError>,
}

/// Scan a root directory and build a skill index.
///
/// The scan is read-only and retains no state between invocations: the
/// result is a pure function of the tree's contents at call time.
///
/// # Errors
///
/// Returns [`SkillError::Configuration`] when `root` does not exist or is
/// not a directory. Per-skill parse and validation failures do not fail
/// the scan; they appear in [`ScanReport::skipped`].
pub fn scan(root: impl AsRef<Path>) -> Result<ScanReport> {
    let root = root.as_ref();

    let canonical_root = match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => root.canonicalize()?,
        Ok(_) => {
            return Err(SkillError::Configuration {
                path: root.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }
        Err(e) => {
            return Err(SkillError::Configuration {
                path: root.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    let mut skills: BTreeMap<String, Skill> = BTreeMap::new();
    let mut skipped = Vec::new();

    // Sorted walk: deterministic discovery order across runs, which is
    // what makes the first-wins duplicate rule stable.
    for entry in WalkDir::new(&canonical_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
    {
        if !entry.file_type().is_file() || entry.file_name() != SKILL_FILE_NAME {
            continue;
        }

        match load_skill(entry.path()) {
            Ok(skill) => {
                if let Some(existing) = skills.get(&skill.name) {
                    // First definition in walk order wins.
                    skipped.push(SkillError::Validation {
                        path: skill.definition_file_path.clone(),
                        reason: format!(
                            "duplicate skill name '{}': already defined by {}",
                            skill.name,
                            existing.definition_file_path.display()
                        ),
                    });
                } else {
                    tracing::debug!(
                        name = %skill.name,
                        path = %skill.root_path.display(),
                        "discovered skill"
                    );
                    skills.insert(skill.name.clone(), skill);
                }
            }
            Err(error) => skipped.push(error),
        }
    }

    Ok(ScanReport {
        index: SkillIndex::from_skills(skills),
        skipped,
    })
}

/// Parse and validate a single `SKILL.md` candidate.
fn load_skill(definition_path: &Path) -> Result<Skill> {
    let content = fs::read_to_string(definition_path).map_err(|e| SkillError::Parse {
        path: definition_path.to_path_buf(),
        reason: format!("failed to read file: {e}"),
    })?;

    let frontmatter = parse_frontmatter(&content).map_err(|e| match e {
        FrontmatterError::Parse(reason) => SkillError::Parse {
            path: definition_path.to_path_buf(),
            reason,
        },
        FrontmatterError::Validation(reason) => SkillError::Validation {
            path: definition_path.to_path_buf(),
            reason,
        },
    })?;

    // The walk hands us files, so a parent always exists; canonicalize it
    // so containment checks later compare against the resolved root.
    let root_path = definition_path
        .parent()
        .ok_or_else(|| SkillError::Parse {
            path: definition_path.to_path_buf(),
            reason: "definition file has no parent directory".to_string(),
        })?
        .canonicalize()?;

    Ok(Skill {
        name: frontmatter.name,
        description: frontmatter.description,
        definition_file_path: root_path.join(SKILL_FILE_NAME),
        root_path,
    })
}
