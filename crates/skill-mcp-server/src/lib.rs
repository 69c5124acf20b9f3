//! MCP server library for skill access.
//!
//! Wraps a [`skill_registry::SkillIndex`] in an rmcp service that exposes
//! three tools over the MCP protocol:
//!
//! 1. **`get_available_skills`** - ordered overview of every skill
//! 2. **`get_skill_details`** - SKILL.md content plus the file listing
//! 3. **`get_skill_related_file`** - contained access to supporting files
//!
//! # Workflow
//!
//! 1. The binary scans the configured skills root once at startup
//! 2. The resulting index is frozen and shared with the service
//! 3. Clients discover skills, fetch instructions, and read supporting
//!    files; every error short of a bad root directory is recoverable and
//!    the server keeps serving
//!
//! # Examples
//!
//! ```no_run
//! use skill_mcp_server::SkillService;
//! use skill_registry::SkillIndex;
//! use rmcp::transport::stdio;
//! use rmcp::ServiceExt;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let index = Arc::new(SkillIndex::scan("./skills")?);
//! let service = SkillService::new(index).serve(stdio()).await?;
//! service.waiting().await?;
//! # Ok(())
//! # }
//! ```

pub mod service;
pub mod types;

pub use service::SkillService;
pub use types::{
    AvailableSkillsResult, GetSkillDetailsParams, GetSkillRelatedFileParams, RelatedFileResult,
    SkillDetailsResult,
};
