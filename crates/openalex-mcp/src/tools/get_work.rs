//! Single work lookup tool.

use super::{McpTool, ToolContext, input_schema_for};
use crate::error::ToolResult;
use crate::models::GetWorkInput;

/// Fetch one work by ID and return the OpenAlex record unchanged.
pub struct GetWorkTool;

#[async_trait::async_trait]
impl McpTool for GetWorkTool {
    fn name(&self) -> &'static str {
        "openalex-get-work"
    }

    fn description(&self) -> &'static str {
        "Get a work from OpenAlex"
    }

    fn input_schema(&self) -> serde_json::Value {
        input_schema_for::<GetWorkInput>()
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        input: serde_json::Value,
    ) -> ToolResult<serde_json::Value> {
        let params: GetWorkInput = serde_json::from_value(input)?;

        tracing::debug!(work_id = %params.work_id, "Fetching work");

        Ok(ctx.client.get_work(&params.work_id).await?)
    }
}
