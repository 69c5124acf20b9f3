//! Skill discovery and path-safe file access.
//!
//! This crate finds "skill" directories on disk, parses the YAML
//! frontmatter of each directory's `SKILL.md` definition file, and exposes
//! the result as an immutable [`SkillIndex`] with three read operations:
//!
//! 1. [`SkillIndex::list_skills`] - ordered overview of every skill
//! 2. [`SkillIndex::skill_details`] - definition content plus file listing
//! 3. [`SkillIndex::related_file`] - contained access to supporting files
//!
//! # Layout
//!
//! Skills live anywhere under a single root directory; a directory is a
//! skill exactly when it directly contains a file named `SKILL.md`:
//!
//! ```text
//! skills/
//! ├── pdf-extraction/
//! │   ├── SKILL.md
//! │   └── scripts/
//! │       └── extract.py
//! └── data/
//!     └── csv-cleanup/
//!         └── SKILL.md
//! ```
//!
//! # Path containment
//!
//! Related-file access resolves the requested relative path against the
//! skill's root and canonicalizes it before reading; `..` segments,
//! absolute paths, and symlink indirection that escape the root all fail
//! with [`SkillError::PathTraversal`] without returning any content.
//!
//! # Examples
//!
//! ```no_run
//! use skill_registry::{ReturnType, SkillIndex};
//!
//! # fn main() -> skill_registry::Result<()> {
//! let index = SkillIndex::scan("./skills")?;
//!
//! for skill in index.list_skills() {
//!     println!("{}: {}", skill.name, skill.description);
//! }
//!
//! let file = index.related_file("pdf-extraction", "scripts/extract.py", ReturnType::Content)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod frontmatter;
pub mod index;
pub mod scanner;
pub mod types;

pub use error::{Result, SkillError};
pub use frontmatter::{Frontmatter, FrontmatterError, RESERVED_NAMES, parse_frontmatter};
pub use index::SkillIndex;
pub use scanner::{ScanReport, scan};
pub use types::{
    RelatedFile, ReturnType, SKILL_FILE_NAME, Skill, SkillDetails, SkillSummary,
};
