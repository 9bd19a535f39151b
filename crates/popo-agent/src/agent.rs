//! The bounded ReAct loop.

use std::path::PathBuf;
use std::sync::Arc;

use crate::client::LlmClient;
use crate::error::{Error, Result};
use crate::tools::ToolRegistry;
use crate::types::ChatMessage;

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Model identifier sent with every request
    pub model: String,

    /// Upper bound on send -> tool -> feedback round trips
    pub max_iterations: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            max_iterations: 8,
        }
    }
}

/// The conversational agent: client, tools, and a fixed system prompt.
pub struct Agent {
    config: AgentConfig,
    client: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    workspace: PathBuf,
    system_prompt: String,
}

impl Agent {
    pub fn new(
        config: AgentConfig,
        client: Arc<dyn LlmClient>,
        tools: ToolRegistry,
        workspace: PathBuf,
        system_prompt: String,
    ) -> Self {
        Self {
            config,
            client,
            tools,
            workspace,
            system_prompt,
        }
    }

    /// Run the loop for one question and return the final assistant text.
    ///
    /// Tool execution failures are fed back to the model as error text so
    /// it can recover; only transport failures and the iteration bound
    /// abort the run.
    pub async fn run(&self, question: &str) -> Result<String> {
        let mut messages = vec![
            ChatMessage::system(self.system_prompt.clone()),
            ChatMessage::user(question),
        ];

        let schemas = self.tools.schemas();
        let tool_schemas = if schemas.is_empty() {
            None
        } else {
            Some(schemas.as_slice())
        };

        for iteration in 0..self.config.max_iterations {
            tracing::debug!(iteration = iteration + 1, "Agent iteration");

            let response = self
                .client
                .chat(&self.config.model, &messages, tool_schemas)
                .await?;

            if response.has_tool_calls() {
                let tool_calls = response.tool_calls.clone().unwrap_or_default();
                messages.push(ChatMessage::assistant(
                    response.content.clone(),
                    Some(tool_calls.clone()),
                ));

                for call in &tool_calls {
                    let args: serde_json::Value =
                        serde_json::from_str(&call.function.arguments)
                            .unwrap_or(serde_json::Value::Null);

                    let result = self
                        .tools
                        .execute(&call.function.name, args, &self.workspace)
                        .await;

                    let result_text = match result {
                        Ok(output) => output,
                        Err(e) => {
                            tracing::warn!(
                                tool = %call.function.name,
                                error = %e,
                                "Tool execution failed"
                            );
                            format!("Error: {e}")
                        }
                    };

                    messages.push(ChatMessage::tool_result(call.id.clone(), result_text));
                }

                continue;
            }

            return response.content.ok_or(Error::EmptyResponse);
        }

        Err(Error::MaxIterations {
            limit: self.config.max_iterations,
        })
    }
}
