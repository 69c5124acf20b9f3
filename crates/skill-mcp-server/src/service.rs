//! MCP server implementation for skill access.
//!
//! The `SkillService` provides three tools:
//! 1. `get_available_skills` - list every discovered skill
//! 2. `get_skill_details` - SKILL.md content plus the skill's file listing
//! 3. `get_skill_related_file` - contained access to supporting files

use crate::types::{
    AvailableSkillsResult, GetSkillDetailsParams, GetSkillRelatedFileParams, RelatedFileResult,
    SkillDetailsResult,
};
use rmcp::handler::server::ServerHandler;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{ErrorData as McpError, tool, tool_handler, tool_router};
use skill_registry::{SkillError, SkillIndex};
use std::sync::Arc;

/// MCP server for skill discovery and file access.
///
/// The service holds an immutable [`SkillIndex`] built once at startup.
/// Every tool call reads through the index; nothing is cached between
/// calls, so on-disk edits to definition files are always reflected.
/// Rebuilding the index means constructing a new service around a fresh
/// scan - there is no in-place mutation.
///
/// # Examples
///
/// ```no_run
/// use skill_mcp_server::SkillService;
/// use skill_registry::SkillIndex;
/// use rmcp::transport::stdio;
/// use rmcp::ServiceExt;
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let index = Arc::new(SkillIndex::scan("./skills")?);
/// let service = SkillService::new(index).serve(stdio()).await?;
/// service.waiting().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SkillService {
    /// Immutable skill index, shared across concurrent requests
    index: Arc<SkillIndex>,

    /// Tool router for MCP protocol
    tool_router: ToolRouter<Self>,
}

impl SkillService {
    /// Creates a new service over a pre-built skill index.
    #[must_use]
    pub fn new(index: Arc<SkillIndex>) -> Self {
        Self {
            index,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl SkillService {
    /// Get an overview of all available skills.
    ///
    /// Returns each skill's name, description, and directory location,
    /// ordered by name. Callers should start here to discover what exists
    /// before requesting details.
    #[tool(
        description = "List all available skills with their names, descriptions, and directory locations. Use this first to discover what skills exist."
    )]
    async fn get_available_skills(&self) -> Result<CallToolResult, McpError> {
        let skills = self.index.list_skills();

        let result = AvailableSkillsResult {
            total_skills: skills.len(),
            skills,
        };

        to_json_result(&result)
    }

    /// Get detailed information about a specific skill.
    ///
    /// Returns the SKILL.md definition (content, path, or both) along with
    /// a recursive listing of the files in the skill's directory. Use
    /// `get_skill_related_file` to read any of those files.
    #[tool(
        description = "Get a skill's SKILL.md definition (content, file_path, or both) plus the list of files in its directory. Use get_skill_related_file to read specific files."
    )]
    async fn get_skill_details(
        &self,
        Parameters(params): Parameters<GetSkillDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let index = Arc::clone(&self.index);
        let skill_name = params.skill_name;
        let return_type = params.return_type;

        // Filesystem reads happen off the async runtime
        let details = {
            let skill_name = skill_name.clone();
            tokio::task::spawn_blocking(move || index.skill_details(&skill_name, return_type))
                .await
                .map_err(|e| McpError::internal_error(format!("Task join error: {e}"), None))?
                .map_err(to_mcp_error)?
        };

        let result = SkillDetailsResult {
            skill_name,
            content: details.content,
            file_path: details.file_path,
            files: details.files,
        };

        to_json_result(&result)
    }

    /// Read a file within a skill's directory.
    ///
    /// The path is relative to the skill's directory and is resolved with
    /// containment enforcement: anything that escapes the directory is
    /// refused.
    #[tool(
        description = "Read a file inside a skill's directory by path relative to the skill root (e.g., 'scripts/run.py'). Paths that resolve outside the skill directory are refused."
    )]
    async fn get_skill_related_file(
        &self,
        Parameters(params): Parameters<GetSkillRelatedFileParams>,
    ) -> Result<CallToolResult, McpError> {
        let index = Arc::clone(&self.index);
        let skill_name = params.skill_name;
        let relative_path = params.relative_path;
        let return_type = params.return_type;

        let file = {
            let skill_name = skill_name.clone();
            let relative_path = relative_path.clone();
            tokio::task::spawn_blocking(move || {
                index.related_file(&skill_name, &relative_path, return_type)
            })
            .await
            .map_err(|e| McpError::internal_error(format!("Task join error: {e}"), None))?
            .map_err(to_mcp_error)?
        };

        let result = RelatedFileResult {
            skill_name,
            relative_path,
            content: file.content,
            file_path: file.file_path,
        };

        to_json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for SkillService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Access skills stored in SKILL.md directories. Use \
                 get_available_skills to see what is available, then \
                 get_skill_details for instructions and \
                 get_skill_related_file for supporting files."
                    .to_string(),
            ),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Serializes a result as a pretty-printed JSON text content block.
fn to_json_result<T: serde::Serialize>(result: &T) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(result).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize result: {e}"), None)
        })?,
    )]))
}

/// Maps registry errors onto MCP error codes.
///
/// Request-level failures (unknown skill, missing file, refused path) are
/// the caller's problem; everything else is an internal error.
fn to_mcp_error(err: SkillError) -> McpError {
    match err {
        SkillError::SkillNotFound { .. }
        | SkillError::FileNotFound { .. }
        | SkillError::PathTraversal { .. } => McpError::invalid_params(err.to_string(), None),
        other => McpError::internal_error(other.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;
    use skill_registry::ReturnType;
    use std::fs;
    use tempfile::TempDir;

    fn create_skill(root: &std::path::Path, name: &str, description: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("SKILL.md"),
            format!("---\nname: {name}\ndescription: {description}\n---\n\n# {name}\n"),
        )
        .unwrap();
    }

    fn service_over(root: &std::path::Path) -> SkillService {
        SkillService::new(Arc::new(SkillIndex::scan(root).unwrap()))
    }

    fn parse_result<T: serde::de::DeserializeOwned>(result: CallToolResult) -> T {
        let text = result.content[0].as_text().unwrap();
        serde_json::from_str(&text.text).unwrap()
    }

    #[test]
    fn test_get_info() {
        let temp = TempDir::new().unwrap();
        let service = service_over(temp.path());
        let info = service.get_info();

        assert_eq!(info.protocol_version, ProtocolVersion::V_2024_11_05);
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }

    #[tokio::test]
    async fn test_get_available_skills_empty() {
        let temp = TempDir::new().unwrap();
        let service = service_over(temp.path());

        let result = service.get_available_skills().await.unwrap();
        let parsed: AvailableSkillsResult = parse_result(result);

        assert_eq!(parsed.total_skills, 0);
        assert!(parsed.skills.is_empty());
    }

    #[tokio::test]
    async fn test_get_available_skills_ordered() {
        let temp = TempDir::new().unwrap();
        create_skill(temp.path(), "zeta", "Last");
        create_skill(temp.path(), "alpha", "First");
        let service = service_over(temp.path());

        let result = service.get_available_skills().await.unwrap();
        let parsed: AvailableSkillsResult = parse_result(result);

        assert_eq!(parsed.total_skills, 2);
        assert_eq!(parsed.skills[0].name, "alpha");
        assert_eq!(parsed.skills[1].name, "zeta");
    }

    #[tokio::test]
    async fn test_get_skill_details_default_return_type() {
        let temp = TempDir::new().unwrap();
        create_skill(temp.path(), "demo", "A demo skill");
        let service = service_over(temp.path());

        let params = GetSkillDetailsParams {
            skill_name: "demo".to_string(),
            return_type: ReturnType::default(),
        };

        let result = service.get_skill_details(Parameters(params)).await.unwrap();
        let parsed: SkillDetailsResult = parse_result(result);

        assert_eq!(parsed.skill_name, "demo");
        assert!(parsed.content.unwrap().contains("A demo skill"));
        assert!(parsed.file_path.unwrap().ends_with("demo/SKILL.md"));
        assert_eq!(parsed.files, vec!["SKILL.md"]);
    }

    #[tokio::test]
    async fn test_get_skill_details_unknown_skill() {
        let temp = TempDir::new().unwrap();
        let service = service_over(temp.path());

        let params = GetSkillDetailsParams {
            skill_name: "missing".to_string(),
            return_type: ReturnType::Both,
        };

        let err = service
            .get_skill_details(Parameters(params))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("missing"));
    }

    #[tokio::test]
    async fn test_get_skill_related_file_content() {
        let temp = TempDir::new().unwrap();
        create_skill(temp.path(), "demo", "A demo skill");
        fs::create_dir_all(temp.path().join("demo/scripts")).unwrap();
        fs::write(temp.path().join("demo/scripts/run.py"), "print('hi')\n").unwrap();
        let service = service_over(temp.path());

        let params = GetSkillRelatedFileParams {
            skill_name: "demo".to_string(),
            relative_path: "scripts/run.py".to_string(),
            return_type: ReturnType::Content,
        };

        let result = service
            .get_skill_related_file(Parameters(params))
            .await
            .unwrap();
        let parsed: RelatedFileResult = parse_result(result);

        assert_eq!(parsed.content.as_deref(), Some("print('hi')\n"));
        assert!(parsed.file_path.is_none());
    }

    #[tokio::test]
    async fn test_get_skill_related_file_traversal_refused() {
        let temp = TempDir::new().unwrap();
        create_skill(temp.path(), "demo", "A demo skill");
        let service = service_over(temp.path());

        let params = GetSkillRelatedFileParams {
            skill_name: "demo".to_string(),
            relative_path: "../../etc/passwd".to_string(),
            return_type: ReturnType::Content,
        };

        let err = service
            .get_skill_related_file(Parameters(params))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("escapes"));
    }

    #[tokio::test]
    async fn test_get_skill_related_file_missing_file() {
        let temp = TempDir::new().unwrap();
        create_skill(temp.path(), "demo", "A demo skill");
        let service = service_over(temp.path());

        let params = GetSkillRelatedFileParams {
            skill_name: "demo".to_string(),
            relative_path: "nope.txt".to_string(),
            return_type: ReturnType::Both,
        };

        let err = service
            .get_skill_related_file(Parameters(params))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains("not found"));
    }

    #[tokio::test]
    async fn test_details_and_related_file_agree_on_definition() {
        let temp = TempDir::new().unwrap();
        create_skill(temp.path(), "demo", "A demo skill");
        let service = service_over(temp.path());

        let details: SkillDetailsResult = parse_result(
            service
                .get_skill_details(Parameters(GetSkillDetailsParams {
                    skill_name: "demo".to_string(),
                    return_type: ReturnType::Content,
                }))
                .await
                .unwrap(),
        );

        let file: RelatedFileResult = parse_result(
            service
                .get_skill_related_file(Parameters(GetSkillRelatedFileParams {
                    skill_name: "demo".to_string(),
                    relative_path: "SKILL.md".to_string(),
                    return_type: ReturnType::Content,
                }))
                .await
                .unwrap(),
        );

        assert_eq!(details.content, file.content);
    }
}
