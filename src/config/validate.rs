//! Validation of an `ApiConfiguration` before it may be submitted.
//!
//! Pure function of the snapshot: the same configuration always yields the
//! same answer. The result only gates the manual submit action.

use super::api::{ApiConfiguration, ApiProvider};

const MISSING_API_KEY: &str = "You must provide a valid API key or choose a different provider.";

/// Returns a human-readable problem description, or `None` when the
/// configuration is complete enough to submit.
pub fn validate_api_configuration(config: &ApiConfiguration) -> Option<String> {
    let message = match config.api_provider {
        ApiProvider::Anthropic if is_blank(&config.api_key) => MISSING_API_KEY,
        ApiProvider::OpenRouter if is_blank(&config.open_router_api_key) => MISSING_API_KEY,
        ApiProvider::Gemini if is_blank(&config.gemini_api_key) => MISSING_API_KEY,
        ApiProvider::DeepSeek if is_blank(&config.deep_seek_api_key) => MISSING_API_KEY,
        ApiProvider::OpenAi
            if is_blank(&config.open_ai_base_url)
                || is_blank(&config.open_ai_api_key)
                || is_blank(&config.open_ai_model_id) =>
        {
            "You must provide a valid base URL, API key, and model ID."
        }
        ApiProvider::Ollama if is_blank(&config.ollama_model_id) => {
            "You must provide a valid model ID."
        }
        ApiProvider::LmStudio if is_blank(&config.lm_studio_model_id) => {
            "You must provide a valid model ID."
        }
        ApiProvider::Bedrock if is_blank(&config.aws_region) => {
            "You must choose a region to use with AWS Bedrock."
        }
        ApiProvider::Vertex
            if is_blank(&config.vertex_project_id) || is_blank(&config.vertex_region) =>
        {
            "You must provide a valid Google Cloud Project ID and Region."
        }
        _ => return None,
    };
    Some(message.to_string())
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CredentialField;

    #[test]
    fn default_configuration_needs_api_key() {
        let reason = validate_api_configuration(&ApiConfiguration::default());
        assert_eq!(reason.as_deref(), Some(MISSING_API_KEY));
    }

    #[test]
    fn anthropic_with_key_is_valid() {
        let config = ApiConfiguration::default().with_field(CredentialField::ApiKey, "sk-ant");
        assert_eq!(validate_api_configuration(&config), None);
    }

    #[test]
    fn whitespace_key_counts_as_missing() {
        let config = ApiConfiguration::default().with_field(CredentialField::ApiKey, "   ");
        assert!(validate_api_configuration(&config).is_some());
    }

    #[test]
    fn openai_requires_all_three_fields() {
        let base = ApiConfiguration::default().with_provider(ApiProvider::OpenAi);
        let partial = base
            .with_field(CredentialField::OpenAiBaseUrl, "http://localhost:4000")
            .with_field(CredentialField::OpenAiApiKey, "key");
        assert_eq!(
            validate_api_configuration(&partial).as_deref(),
            Some("You must provide a valid base URL, API key, and model ID.")
        );

        let complete = partial.with_field(CredentialField::OpenAiModelId, "gpt-4o");
        assert_eq!(validate_api_configuration(&complete), None);
    }

    #[test]
    fn vertex_requires_project_and_region() {
        let config = ApiConfiguration::default()
            .with_provider(ApiProvider::Vertex)
            .with_field(CredentialField::VertexProjectId, "proj");
        assert!(validate_api_configuration(&config).is_some());
        let config = config.with_field(CredentialField::VertexRegion, "us-east5");
        assert_eq!(validate_api_configuration(&config), None);
    }

    #[test]
    fn user_token_alone_does_not_satisfy_provider() {
        let config = ApiConfiguration::default().with_user_token("abc123");
        assert!(validate_api_configuration(&config).is_some());
    }

    #[test]
    fn deterministic_for_same_snapshot() {
        let config = ApiConfiguration::default().with_provider(ApiProvider::Bedrock);
        assert_eq!(
            validate_api_configuration(&config),
            validate_api_configuration(&config.clone())
        );
    }
}
