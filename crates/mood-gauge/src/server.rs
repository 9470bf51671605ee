//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes scoring over the MCP protocol so assistants can assess text via
//! stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. It wraps the same core library
//! the CLI commands use, and each `#[tool]` method delegates to
//! `mood_gauge_core` rather than scoring anything itself.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use mood_gauge_core::lexicon::{self, IndicatorSummary, Polarity};
use mood_gauge_core::{Assessment, SentimentJudgment};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `assess_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AssessTextParams {
    /// The extracted text to score.
    pub text: String,
    /// Sentiment classifier label: "POSITIVE" or "NEGATIVE".
    pub label: String,
    /// Sentiment classifier confidence in [0, 1].
    pub confidence: f64,
    /// Include per-theme contributions.
    #[serde(default)]
    pub breakdown: bool,
}

/// Parameters for the `list_indicators` tool.
#[derive(Debug, Default, serde::Deserialize, schemars::JsonSchema)]
pub struct ListIndicatorsParams {
    /// Only list rules of this polarity: "negative" or "positive".
    pub polarity: Option<Polarity>,
}

/// MCP server exposing scoring to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a new MCP server instance with the default input limit.
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes: Some(mood_gauge_core::DEFAULT_MAX_INPUT_BYTES),
        }
    }

    /// Override the input size limit (`None` disables it).
    #[must_use]
    pub fn with_max_input_bytes(mut self, max_input_bytes: Option<usize>) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Score text for depression indicators.
    #[tool(
        description = "Score extracted text for depression indicators on a 0-25 scale, given a sentiment classifier label and confidence. Returns the score, severity band, and interpretation."
    )]
    #[tracing::instrument(
        skip(self, params),
        fields(otel.kind = "server", text_len = params.text.len())
    )]
    fn assess_text(
        &self,
        Parameters(params): Parameters<AssessTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "assess_text",
            label = %params.label,
            breakdown = params.breakdown,
            "executing MCP tool"
        );

        if let Some(max) = self.max_input_bytes
            && params.text.len() > max
        {
            return Err(McpError::invalid_params(
                format!(
                    "input too large: {} bytes (limit: {max} bytes)",
                    params.text.len()
                ),
                None,
            ));
        }

        let sentiment = SentimentJudgment::parse(&params.label, params.confidence)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let assessment = Assessment::build(&params.text, &sentiment, params.breakdown);

        let json = serde_json::to_string_pretty(&assessment)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "assess_text",
            score = assessment.depression_score,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List the weighted indicator lexicon.
    #[tool(
        description = "List the indicator rules used for scoring: theme, polarity, weight per match, and matched phrases."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn list_indicators(
        &self,
        Parameters(params): Parameters<ListIndicatorsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "list_indicators",
            polarity = ?params.polarity,
            "executing MCP tool"
        );

        let rules: Vec<IndicatorSummary> = lexicon::all_indicators()
            .filter(|rule| params.polarity.is_none_or(|p| rule.polarity == p))
            .map(lexicon::IndicatorRule::summary)
            .collect();

        let json = serde_json::to_string_pretty(&rules)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "list_indicators", count = rules.len(), "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use assess_text to score extracted text for depression indicators.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn server_has_tools_capability() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn server_has_instructions() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        let instructions = info.instructions.expect("server should have instructions");
        assert!(instructions.contains(env!("CARGO_PKG_NAME")));
    }

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn assess(text: &str, label: &str, confidence: f64) -> Result<CallToolResult, McpError> {
        ProjectServer::new().assess_text(Parameters(AssessTextParams {
            text: text.to_string(),
            label: label.to_string(),
            confidence,
            breakdown: false,
        }))
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "text".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");

        assert!(!result.is_error.unwrap_or(false));
        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_NAME")));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let params = Parameters(GetInfoParams {
            format: "json".to_string(),
        });

        let result = server.get_info(params).expect("get_info should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value =
            serde_json::from_str(text).expect("output should be valid JSON");

        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn assess_text_tool_scores_negative_text() {
        let result =
            assess("I feel hopeless and worthless", "NEGATIVE", 0.9).expect("should succeed");
        assert!(!result.is_error.unwrap_or(false));

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["depressionScore"].as_f64(), Some(20.0));
        assert_eq!(json["scoreOutOf25"].as_f64(), Some(20.0));
        assert_eq!(
            json["interpretations"],
            "Severe depression indicators detected"
        );
        assert_eq!(json["extractedText"], "I feel hopeless and worthless");
        assert!(json.get("breakdown").is_none());
    }

    #[test]
    fn assess_text_tool_accepts_lowercase_label() {
        let result = assess("", "positive", 1.0).expect("should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert_eq!(json["depressionScore"].as_f64(), Some(7.5));
        assert_eq!(json["band"], "mild");
    }

    #[test]
    fn assess_text_tool_includes_breakdown() {
        let server = ProjectServer::new();
        let result = server
            .assess_text(Parameters(AssessTextParams {
                text: "I am so tired and exhausted".to_string(),
                label: "NEGATIVE".to_string(),
                confidence: 0.5,
                breakdown: true,
            }))
            .expect("should succeed");

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        let contributions = json["breakdown"]["contributions"]
            .as_array()
            .expect("contributions array");
        assert!(contributions.iter().any(|c| c["theme"] == "fatigue"));
    }

    #[test]
    fn assess_text_tool_rejects_unknown_label() {
        let err = assess("text", "NEUTRAL", 0.5).unwrap_err();
        assert!(err.message.contains("NEUTRAL"));
    }

    #[test]
    fn assess_text_tool_rejects_bad_confidence() {
        assert!(assess("text", "NEGATIVE", 1.5).is_err());
        assert!(assess("text", "NEGATIVE", -0.1).is_err());
    }

    #[test]
    fn assess_text_tool_enforces_input_limit() {
        let server = ProjectServer::new().with_max_input_bytes(Some(8));
        let err = server
            .assess_text(Parameters(AssessTextParams {
                text: "more than eight bytes".to_string(),
                label: "NEGATIVE".to_string(),
                confidence: 0.5,
                breakdown: false,
            }))
            .unwrap_err();
        assert!(err.message.contains("input too large"));
    }

    #[test]
    fn list_indicators_tool_lists_lexicon() {
        let server = ProjectServer::new();
        let result = server
            .list_indicators(Parameters(ListIndicatorsParams::default()))
            .expect("should succeed");

        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        let rules = json.as_array().expect("array of rules");
        assert_eq!(rules.len(), lexicon::all_indicators().count());
        assert!(rules.iter().any(|r| r["theme"] == "hopelessness"));
    }

    #[test]
    fn list_indicators_tool_filters_and_validates_polarity() {
        let server = ProjectServer::new();
        let result = server
            .list_indicators(Parameters(ListIndicatorsParams {
                polarity: Some(Polarity::Positive),
            }))
            .expect("should succeed");
        let text = extract_text(&result).expect("should have text content");
        let json: serde_json::Value = serde_json::from_str(text).expect("valid JSON");
        assert!(
            json.as_array()
                .unwrap()
                .iter()
                .all(|r| r["polarity"] == "positive")
        );

        let unknown = serde_json::json!({ "polarity": "neutral" });
        assert!(serde_json::from_value::<ListIndicatorsParams>(unknown).is_err());

        let empty: ListIndicatorsParams =
            serde_json::from_value(serde_json::json!({})).expect("polarity is optional");
        assert!(empty.polarity.is_none());
    }
}
