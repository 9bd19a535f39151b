//! Clock tool.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Value, json};

use super::Tool;
use crate::Result;

/// Report the current UTC time.
pub struct CurrentTimeTool;

#[async_trait]
impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        "current_time"
    }

    fn description(&self) -> &str {
        "Get the current date and time in UTC (RFC 3339)."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _args: Value, _workspace: &Path) -> Result<String> {
        Ok(Utc::now().to_rfc3339())
    }
}
