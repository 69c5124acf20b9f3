//! MCP server entry point for skill access.
//!
//! Scans a skills directory once at startup and serves its contents as
//! MCP tools over stdio.
//!
//! # Usage
//!
//! ```bash
//! skill-mcp --skills-dir ./skills
//! SKILLS_DIR=./skills skill-mcp
//! ```
//!
//! Or configure in `~/.config/claude/mcp.json`:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "skills": {
//!       "command": "skill-mcp",
//!       "env": { "SKILLS_DIR": "/path/to/skills" }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use skill_mcp_server::SkillService;
use skill_registry::SkillIndex;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Serve SKILL.md skill directories as MCP tools.
#[derive(Debug, Parser)]
#[command(name = "skill-mcp", version, about)]
struct Cli {
    /// Path to the skills directory containing SKILL.md files
    #[arg(short = 's', long = "skills-dir", env = "SKILLS_DIR", value_name = "DIR")]
    skills_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is for MCP protocol)
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,skill_mcp_server=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!(
        "Starting skill-mcp v{} with skills directory {}",
        env!("CARGO_PKG_VERSION"),
        cli.skills_dir.display()
    );

    // A bad root is the only fatal error; everything after this point is
    // per-request and recoverable.
    let index = SkillIndex::scan(&cli.skills_dir)
        .with_context(|| format!("failed to scan skills directory {}", cli.skills_dir.display()))?;

    tracing::info!("Indexed {} skill(s)", index.len());

    let service = SkillService::new(Arc::new(index)).serve(stdio()).await?;
    service.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
