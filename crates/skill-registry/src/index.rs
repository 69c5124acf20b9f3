//! The immutable skill index and its read operations.
//!
//! A [`SkillIndex`] is built once from a scan and never mutated. All three
//! operations the host transport exposes are methods here, taking the
//! index explicitly rather than reaching for shared process state, so the
//! index can be swapped wholesale (rebuild + replace) and shared across
//! concurrent readers without synchronization.
//!
//! File content is read fresh on every detail/file request. These are
//! low-traffic control-plane calls; reflecting on-disk edits matters more
//! than saving a read.

use crate::error::{Result, SkillError};
use crate::scanner;
use crate::types::{RelatedFile, ReturnType, Skill, SkillDetails, SkillSummary};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Immutable mapping from skill name to [`Skill`].
///
/// # Thread Safety
///
/// The index is never mutated after construction, so `&SkillIndex` (or an
/// `Arc<SkillIndex>`) is safe to share across threads without locks.
///
/// # Examples
///
/// ```no_run
/// use skill_registry::{ReturnType, SkillIndex};
///
/// # fn example() -> skill_registry::Result<()> {
/// let index = SkillIndex::scan("./skills")?;
///
/// for summary in index.list_skills() {
///     println!("{}: {}", summary.name, summary.description);
/// }
///
/// let details = index.skill_details("pdf-extraction", ReturnType::Both)?;
/// println!("{} supporting files", details.files.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SkillIndex {
    skills: BTreeMap<String, Skill>,
}

impl SkillIndex {
    /// Build an index by scanning `root`, logging skipped candidates.
    ///
    /// Convenience over [`scanner::scan`] for callers that only want the
    /// index: each excluded candidate is logged at `warn` and discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SkillError::Configuration`] when `root` is missing or not
    /// a directory.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self> {
        let report = scanner::scan(root)?;
        for skipped in &report.skipped {
            tracing::warn!("skipping skill candidate: {skipped}");
        }
        Ok(report.index)
    }

    /// Construct an index from already-validated skills.
    pub(crate) const fn from_skills(skills: BTreeMap<String, Skill>) -> Self {
        Self { skills }
    }

    /// Number of skills in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the index contains no skills.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Look up a skill by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Skill> {
        self.skills.get(name)
    }

    /// List all skills, ordered lexicographically by name.
    ///
    /// The ordering comes from the underlying `BTreeMap`, so repeated
    /// calls against the same index produce identical output.
    #[must_use]
    pub fn list_skills(&self) -> Vec<SkillSummary> {
        self.skills
            .values()
            .map(|skill| SkillSummary {
                name: skill.name.clone(),
                description: skill.description.clone(),
                path: skill.root_path.display().to_string(),
            })
            .collect()
    }

    /// Fetch a skill's definition file and its supporting-file listing.
    ///
    /// `content` / `file_path` are filled according to `return_type`; the
    /// sorted recursive listing of relative paths is always included. The
    /// definition file is read from disk on every call.
    ///
    /// # Errors
    ///
    /// [`SkillError::SkillNotFound`] for an unknown name,
    /// [`SkillError::Io`] when the definition file cannot be read.
    pub fn skill_details(&self, name: &str, return_type: ReturnType) -> Result<SkillDetails> {
        let skill = self.require(name)?;

        let content = match return_type {
            ReturnType::Content | ReturnType::Both => {
                Some(fs::read_to_string(&skill.definition_file_path)?)
            }
            ReturnType::FilePath => None,
        };

        let file_path = match return_type {
            ReturnType::FilePath | ReturnType::Both => {
                Some(skill.definition_file_path.display().to_string())
            }
            ReturnType::Content => None,
        };

        Ok(SkillDetails {
            content,
            file_path,
            files: list_files(&skill.root_path),
        })
    }

    /// Fetch a file inside a skill's directory by relative path.
    ///
    /// The path is resolved against the skill root and canonicalized
    /// before any read; resolutions that escape the root fail without
    /// touching file contents.
    ///
    /// # Errors
    ///
    /// [`SkillError::SkillNotFound`] for an unknown name,
    /// [`SkillError::PathTraversal`] when the resolved path leaves the
    /// skill directory, [`SkillError::FileNotFound`] when the path is safe
    /// but no regular file exists there, [`SkillError::Io`] for other
    /// filesystem failures.
    pub fn related_file(
        &self,
        name: &str,
        relative_path: &str,
        return_type: ReturnType,
    ) -> Result<RelatedFile> {
        let skill = self.require(name)?;
        let resolved = resolve_within(skill, relative_path)?;

        if !resolved.is_file() {
            return Err(SkillError::FileNotFound {
                skill: skill.name.clone(),
                requested: relative_path.to_string(),
            });
        }

        let content = match return_type {
            ReturnType::Content | ReturnType::Both => Some(fs::read_to_string(&resolved)?),
            ReturnType::FilePath => None,
        };

        let file_path = match return_type {
            ReturnType::FilePath | ReturnType::Both => Some(resolved.display().to_string()),
            ReturnType::Content => None,
        };

        Ok(RelatedFile { content, file_path })
    }

    fn require(&self, name: &str) -> Result<&Skill> {
        self.skills.get(name).ok_or_else(|| SkillError::SkillNotFound {
            name: name.to_string(),
        })
    }
}

/// Recursive listing of regular files under a skill root, as sorted
/// relative paths with forward-slash separators.
fn list_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|rel| rel.to_string_lossy().replace('\\', "/"))
        })
        .collect();

    files.sort();
    files
}

/// Resolve `requested` against the skill root, enforcing containment.
///
/// Containment is checked on the fully resolved path: the candidate is
/// canonicalized (resolving `.`, `..`, and symlinks) and must start with
/// the canonical skill root. A lexical screen rejects absolute paths and
/// `..` escapes up front; for paths whose target does not exist yet, the
/// nearest existing ancestor is canonicalized instead so a symlinked
/// directory cannot smuggle a "not found" answer out of the root.
fn resolve_within(skill: &Skill, requested: &str) -> Result<PathBuf> {
    let traversal = || SkillError::PathTraversal {
        skill: skill.name.clone(),
        requested: requested.to_string(),
    };

    let relative = Path::new(requested);
    if relative.is_absolute() {
        return Err(traversal());
    }

    // Lexical screen: depth must never go negative.
    let mut depth: i64 = 0;
    for component in relative.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return Err(traversal());
                }
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => return Err(traversal()),
        }
    }

    // root_path is canonical since the scan; see scanner::load_skill.
    let root = &skill.root_path;
    let candidate = root.join(relative);

    match candidate.canonicalize() {
        Ok(resolved) => {
            if resolved.starts_with(root) {
                Ok(resolved)
            } else {
                tracing::warn!(
                    skill = %skill.name,
                    requested,
                    "blocked path traversal attempt"
                );
                Err(traversal())
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // Target missing: decide not-found vs traversal from the
            // nearest ancestor that does exist.
            let mut ancestor = candidate.parent();
            while let Some(dir) = ancestor {
                if let Ok(resolved_dir) = dir.canonicalize() {
                    if resolved_dir.starts_with(root) {
                        return Err(SkillError::FileNotFound {
                            skill: skill.name.clone(),
                            requested: requested.to_string(),
                        });
                    }
                    tracing::warn!(
                        skill = %skill.name,
                        requested,
                        "blocked path traversal attempt"
                    );
                    return Err(traversal());
                }
                ancestor = dir.parent();
            }
            Err(traversal())
        }
        Err(e) => Err(SkillError::Io(e)),
    }
}
