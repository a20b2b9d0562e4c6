// Core data models for the CodeHawk API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Severity tag attached to issues and rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Suggestion,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Suggestion,
        Severity::Info,
    ];

    /// Wire representation used in query strings and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Suggestion => "suggestion",
            Severity::Info => "info",
        }
    }

    /// Parse a wire tag. Unknown tags yield `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == tag)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional parameters for `POST /analyze`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzeOptions {
    /// Free-text context for the analysis. `None` sends an empty string.
    pub context: Option<String>,

    /// Engine options forwarded verbatim. `None` sends an empty object.
    pub options: Option<Map<String, Value>>,
}

impl AnalyzeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a single engine option, creating the map on first use
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Request body for `POST /analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub code: String,
    pub language: String,
    pub context: String,
    pub options: Map<String, Value>,
}

impl AnalysisRequest {
    pub fn new(code: impl Into<String>, language: impl Into<String>, opts: AnalyzeOptions) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
            context: opts.context.unwrap_or_default(),
            options: opts.options.unwrap_or_default(),
        }
    }
}

// Typed views over server responses. The client returns raw JSON; callers
// that want structure decode it with `serde_json::from_value`. Every field
// is defaulted so partial payloads still decode.

/// Replacement proposed for an issue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fix {
    pub description: String,
    pub replacement: String,
}

/// A problem reported in analyzed code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    pub message: String,
    pub severity: String,
    #[serde(alias = "ruleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Issue {
    /// Known severity, if the server sent one of the documented tags
    pub fn severity_level(&self) -> Option<Severity> {
        Severity::parse(&self.severity)
    }
}

/// An improvement recommendation tied to an analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Suggestion {
    pub line: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<u32>,
    pub message: String,
    pub severity: String,
    #[serde(alias = "ruleId", skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

/// Analysis record returned by `POST /analyze` and `GET /analysis/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResponse {
    pub id: String,
    pub status: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub timestamp: String,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<Suggestion>,
}

/// Body of `GET /analysis/{id}/issues`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuesResponse {
    pub issues: Vec<Issue>,
}

/// Body of `GET /analysis/{id}/suggestions`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<Suggestion>,
}

/// Body of `GET /languages`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagesResponse {
    pub status: String,
    pub languages: Vec<String>,
}

/// A language-specific check applied by the server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: String,
}

/// Body of `GET /rules/{language}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesResponse {
    pub status: String,
    pub language: String,
    pub rules: Vec<Rule>,
}

/// Error body sent with 4xx/5xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_severity_parse_known_tags() {
        for severity in Severity::ALL {
            assert_eq!(Severity::parse(severity.as_str()), Some(severity));
        }
    }

    #[test]
    fn test_severity_parse_unknown_tag() {
        assert_eq!(Severity::parse("critical"), None);
        assert_eq!(Severity::parse("ERROR"), None);
    }

    #[test]
    fn test_analysis_request_defaults() {
        let request = AnalysisRequest::new("x = 1", "python", AnalyzeOptions::default());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({"code": "x = 1", "language": "python", "context": "", "options": {}})
        );
    }
}
