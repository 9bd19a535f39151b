//! Ask command implementation

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use popo_agent::{Agent, AgentConfig, OpenAiClient, ToolRegistry, build_system_prompt};
use popo_context::{ContextOptions, ProjectContext};

use crate::error::{CliError, Result};

/// Options resolved from the CLI for one `ask` invocation.
pub struct AskOptions {
    pub question: String,
    pub no_tools: bool,
    pub max_iterations: usize,
    pub commits: usize,
    pub model: String,
    pub api_base: String,
    pub api_key: Option<String>,
}

/// Run the ask command: assemble context, build the agent, run the loop.
#[tokio::main]
pub async fn run_ask(cwd: &Path, options: AskOptions) -> Result<()> {
    let api_key = options.api_key.ok_or_else(|| {
        CliError::user("POPO_API_KEY is not set. Export it or pass --api-key.")
    })?;

    let context_options = ContextOptions {
        max_commits: options.commits,
        ..ContextOptions::default()
    };

    // Best-effort context: outside a repository the agent still runs,
    // it just knows nothing about the project.
    let context_xml = match ProjectContext::assemble(cwd, &context_options) {
        Ok(context) => context.to_xml(),
        Err(e) => {
            eprintln!(
                "{}: {} (continuing without project context)",
                "warning".yellow().bold(),
                e
            );
            String::new()
        }
    };

    let tools = if options.no_tools {
        ToolRegistry::new()
    } else {
        ToolRegistry::with_defaults()
    };

    let template_dir = super::template_override_dir(cwd);
    let system_prompt = build_system_prompt(&context_xml, &tools, template_dir.as_deref())?;

    let client = Arc::new(OpenAiClient::new(options.api_base, api_key));
    let agent = Agent::new(
        AgentConfig {
            model: options.model,
            max_iterations: options.max_iterations,
        },
        client,
        tools,
        cwd.to_path_buf(),
        system_prompt,
    );

    let answer = agent.run(&options.question).await?;
    println!("{answer}");

    Ok(())
}
