//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses its input parameters
//! 2. Calls the OpenAlex API client
//! 3. Shapes the result as JSON

mod get_work;
mod search;

pub use get_work::GetWorkTool;
pub use search::{SearchTool, build_works_query};

use std::sync::Arc;

use schemars::JsonSchema;

use crate::client::OpenAlexClient;
use crate::error::ToolResult;

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<OpenAlexClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<OpenAlexClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "openalex-search").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input, returning a JSON result.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value)
    -> ToolResult<serde_json::Value>;
}

/// Derive the JSON schema of a tool input type.
///
/// Panics if the schema does not serialize, which is a bug in the input type.
#[must_use]
pub fn input_schema_for<T: JsonSchema>() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(T)).expect("tool input schema serializes to JSON")
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![Box::new(SearchTool), Box::new(GetWorkTool)]
}
