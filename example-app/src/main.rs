use codehawk_api_client::{AnalyzeOptions, ApiError, CodeHawkClient};
use codehawk_core::{AnalysisResponse, ClientConfig, LanguagesResponse, SuggestionsResponse};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_CODE: &str = "def calculate_sum(numbers):
    result = 0
    for n in numbers:
        result = result + n
    return result";

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,codehawk_example=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Failures are reported, not fatal
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    tracing::info!("Using CodeHawk API at {}", config.base_url());

    if let Err(e) = run(config).await {
        println!("Error: {}", e);
    }
}

async fn run(config: ClientConfig) -> Result<(), ApiError> {
    let client = CodeHawkClient::new(config)?;

    println!("Analyzing code...");
    let analysis: AnalysisResponse =
        decode(client.analyze_code(SAMPLE_CODE, "python", AnalyzeOptions::default()).await?)?;
    println!("Analysis ID: {}", analysis.id);
    println!("Found {} issues", analysis.issues.len());

    for (i, issue) in analysis.issues.iter().enumerate() {
        println!("{}. Line {}: [{}] {}", i + 1, issue.line, issue.severity, issue.message);
    }

    println!("Getting suggestions...");
    let suggestions: SuggestionsResponse = decode(client.get_suggestions(&analysis.id).await?)?;
    println!("Found {} suggestions", suggestions.suggestions.len());

    println!("Getting supported languages...");
    let languages: LanguagesResponse = decode(client.get_languages().await?)?;
    println!("Supported languages: {}", languages.languages.join(", "));

    Ok(())
}

/// Decode a raw response into one of the typed views
fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(ApiError::unexpected)
}
