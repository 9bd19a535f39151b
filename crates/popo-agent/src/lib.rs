//! ReAct-style agent loop and tool registry for popo
//!
//! The agent follows a send -> tool -> feedback cycle over an
//! OpenAI-compatible chat-completions endpoint:
//!
//! 1. Build the system prompt from the repository context document
//! 2. Send the transcript (plus tool schemas) to the model
//! 3. If the response carries tool calls, execute them and append the
//!    results as `tool` messages, then loop
//! 4. Otherwise return the assistant text
//!
//! The loop is bounded by `max_iterations`.

pub mod agent;
pub mod client;
pub mod error;
pub mod prompt;
pub mod tools;
pub mod types;

pub use agent::{Agent, AgentConfig};
pub use client::{LlmClient, OpenAiClient};
pub use error::{Error, Result};
pub use prompt::build_system_prompt;
pub use tools::{Tool, ToolRegistry};
pub use types::{ChatMessage, ChatResponse, FunctionCall, Role, ToolCall};
