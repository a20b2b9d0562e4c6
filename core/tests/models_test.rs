// Unit tests for models module

use codehawk_core::*;
use serde_json::json;

// ==================== AnalyzeOptions Tests ====================

#[test]
fn test_analyze_options_context_and_options() {
    let opts = AnalyzeOptions::new()
        .with_context("Example code")
        .with_option("max_issues", 10)
        .with_option("strict", true);

    let request = AnalysisRequest::new("package main", "go", opts);
    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(body["context"], "Example code");
    assert_eq!(body["options"], json!({"max_issues": 10, "strict": true}));
}

#[test]
fn test_analyze_options_forwarded_verbatim() {
    let mut options = serde_json::Map::new();
    options.insert("nested".to_string(), json!({"a": [1, 2, 3], "b": null}));

    let opts = AnalyzeOptions {
        context: None,
        options: Some(options),
    };
    let request = AnalysisRequest::new("", "", opts);

    assert_eq!(request.context, "");
    assert_eq!(request.options["nested"], json!({"a": [1, 2, 3], "b": null}));
}

// ==================== Response View Tests ====================

#[test]
fn test_analysis_response_from_server_payload() {
    let payload = json!({
        "status": "success",
        "id": "analysis-1700000000",
        "language": "python",
        "timestamp": "2024-01-01T00:00:00Z",
        "issues": [
            {"line": 1, "message": "Missing docstring", "severity": "warning", "ruleId": "missing-docstring"},
            {"line": 4, "column": 9, "message": "Use logging instead of print", "severity": "suggestion",
             "fix": {"description": "Use logger", "replacement": "logger.info(x)"}}
        ]
    });

    let analysis: AnalysisResponse = serde_json::from_value(payload).unwrap();

    assert_eq!(analysis.id, "analysis-1700000000");
    assert_eq!(analysis.issues.len(), 2);
    assert!(analysis.suggestions.is_empty());
    assert_eq!(analysis.issues[0].rule_id.as_deref(), Some("missing-docstring"));
    assert_eq!(analysis.issues[0].severity_level(), Some(Severity::Warning));
    assert_eq!(analysis.issues[1].column, Some(9));
    assert_eq!(
        analysis.issues[1].fix.as_ref().map(|f| f.replacement.as_str()),
        Some("logger.info(x)")
    );
}

#[test]
fn test_partial_payload_decodes() {
    let analysis: AnalysisResponse =
        serde_json::from_value(json!({"id": "abc123", "issues": [{"severity": "warning"}]})).unwrap();

    assert_eq!(analysis.id, "abc123");
    assert_eq!(analysis.issues.len(), 1);
    assert_eq!(analysis.issues[0].line, 0);
}

#[test]
fn test_issue_unknown_severity_kept() {
    let issue: Issue = serde_json::from_value(json!({"severity": "fatal"})).unwrap();
    assert_eq!(issue.severity, "fatal");
    assert_eq!(issue.severity_level(), None);
}

#[test]
fn test_languages_and_rules_responses() {
    let languages: LanguagesResponse =
        serde_json::from_value(json!({"status": "success", "languages": ["go", "python"]})).unwrap();
    assert_eq!(languages.languages, vec!["go", "python"]);

    let rules: RulesResponse = serde_json::from_value(json!({
        "status": "success",
        "language": "javascript",
        "rules": [{"id": "semi", "name": "Missing Semicolon",
                   "description": "Statements should end with a semicolon", "severity": "error"}]
    }))
    .unwrap();
    assert_eq!(rules.rules[0].id, "semi");
    assert_eq!(Severity::parse(&rules.rules[0].severity), Some(Severity::Error));
}

#[test]
fn test_error_response() {
    let err: ErrorResponse =
        serde_json::from_value(json!({"status": "error", "message": "Invalid request"})).unwrap();
    assert_eq!(err.message, "Invalid request");
    assert!(err.code.is_none());
}

#[test]
fn test_severity_serde_lowercase() {
    assert_eq!(serde_json::to_value(Severity::Suggestion).unwrap(), json!("suggestion"));
    assert_eq!(Severity::Info.to_string(), "info");
}
