//! LLM client seam and the OpenAI-compatible implementation.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::types::{ChatMessage, ChatResponse, ToolCall};

/// Chat completion client. The agent loop only depends on this trait so
/// tests can script responses without a network.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send the transcript and return the assistant's reply.
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[Value]>,
    ) -> Result<ChatResponse>;
}

/// Client for any OpenAI-compatible chat-completions endpoint.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client for `base_url` (e.g. `https://api.openai.com/v1`).
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    content: Option<String>,
    tool_calls: Option<Vec<ToolCall>>,
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: Option<&[Value]>,
    ) -> Result<ChatResponse> {
        let mut body = json!({
            "model": model,
            "messages": messages,
        });
        if let Some(tools) = tools
            && !tools.is_empty()
        {
            body["tools"] = Value::Array(tools.to_vec());
        }

        tracing::debug!(model, message_count = messages.len(), "Sending chat request");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ApiResponse = response.json().await?;
        let choice = parsed.choices.into_iter().next().ok_or(Error::EmptyResponse)?;

        Ok(ChatResponse {
            content: choice.message.content,
            tool_calls: choice.message.tool_calls,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = OpenAiClient::new("https://api.example.com/v1/", "key");
        assert_eq!(client.base_url, "https://api.example.com/v1");
    }

    #[test]
    fn test_api_response_parsing() {
        let raw = r#"{
            "choices": [{
                "message": {
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "current_time", "arguments": "{}"}
                    }]
                }
            }]
        }"#;

        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        let message = &parsed.choices[0].message;
        assert!(message.content.is_none());
        assert_eq!(message.tool_calls.as_ref().unwrap()[0].function.name, "current_time");
    }

    #[test]
    fn test_api_response_text_only() {
        let raw = r#"{"choices": [{"message": {"content": "hello"}}]}"#;
        let parsed: ApiResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
        assert!(parsed.choices[0].message.tool_calls.is_none());
    }
}
