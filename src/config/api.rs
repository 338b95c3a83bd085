use serde::{Deserialize, Serialize};

use super::credentials::SecureString;

/// Model provider the assistant talks to.
///
/// The serde name is the stable key written to the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiProvider {
    #[default]
    Anthropic,
    OpenRouter,
    #[serde(rename = "openai")]
    OpenAi,
    Gemini,
    DeepSeek,
    Ollama,
    LmStudio,
    Bedrock,
    Vertex,
}

impl ApiProvider {
    /// All providers in the order the credential form cycles through them.
    pub fn all() -> &'static [ApiProvider] {
        &[
            Self::Anthropic,
            Self::OpenRouter,
            Self::OpenAi,
            Self::Gemini,
            Self::DeepSeek,
            Self::Ollama,
            Self::LmStudio,
            Self::Bedrock,
            Self::Vertex,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Anthropic => "Anthropic",
            Self::OpenRouter => "OpenRouter",
            Self::OpenAi => "OpenAI Compatible",
            Self::Gemini => "Google Gemini",
            Self::DeepSeek => "DeepSeek",
            Self::Ollama => "Ollama",
            Self::LmStudio => "LM Studio",
            Self::Bedrock => "AWS Bedrock",
            Self::Vertex => "GCP Vertex AI",
        }
    }

    /// Next provider in `all()` order, wrapping around.
    pub fn next(&self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|p| p == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    /// Previous provider in `all()` order, wrapping around.
    pub fn prev(&self) -> Self {
        let all = Self::all();
        let index = all.iter().position(|p| p == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }
}

/// Provider credentials and settings edited on the welcome screen.
///
/// Always replaced as a whole value; nothing mutates a stored instance in
/// place. `user_token` is the short-lived token obtained from the sign-up page.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfiguration {
    pub api_provider: ApiProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_router_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_ai_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_ai_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_ai_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_seek_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ollama_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ollama_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lm_studio_model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertex_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertex_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
}

impl ApiConfiguration {
    /// Copy of this configuration with the user token set.
    pub fn with_user_token(&self, token: impl Into<String>) -> Self {
        Self {
            user_token: Some(token.into()),
            ..self.clone()
        }
    }

    /// Copy of this configuration with a different provider selected.
    pub fn with_provider(&self, provider: ApiProvider) -> Self {
        Self {
            api_provider: provider,
            ..self.clone()
        }
    }

    /// Copy with one credential field replaced. Empty values clear the field.
    pub fn with_field(&self, field: CredentialField, value: &str) -> Self {
        let mut next = self.clone();
        let value = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        *next.field_mut(field) = value;
        next
    }

    pub fn field(&self, field: CredentialField) -> Option<&str> {
        match field {
            CredentialField::ApiKey => self.api_key.as_deref(),
            CredentialField::OpenRouterApiKey => self.open_router_api_key.as_deref(),
            CredentialField::OpenAiBaseUrl => self.open_ai_base_url.as_deref(),
            CredentialField::OpenAiApiKey => self.open_ai_api_key.as_deref(),
            CredentialField::OpenAiModelId => self.open_ai_model_id.as_deref(),
            CredentialField::GeminiApiKey => self.gemini_api_key.as_deref(),
            CredentialField::DeepSeekApiKey => self.deep_seek_api_key.as_deref(),
            CredentialField::OllamaBaseUrl => self.ollama_base_url.as_deref(),
            CredentialField::OllamaModelId => self.ollama_model_id.as_deref(),
            CredentialField::LmStudioModelId => self.lm_studio_model_id.as_deref(),
            CredentialField::AwsRegion => self.aws_region.as_deref(),
            CredentialField::VertexProjectId => self.vertex_project_id.as_deref(),
            CredentialField::VertexRegion => self.vertex_region.as_deref(),
        }
    }

    fn field_mut(&mut self, field: CredentialField) -> &mut Option<String> {
        match field {
            CredentialField::ApiKey => &mut self.api_key,
            CredentialField::OpenRouterApiKey => &mut self.open_router_api_key,
            CredentialField::OpenAiBaseUrl => &mut self.open_ai_base_url,
            CredentialField::OpenAiApiKey => &mut self.open_ai_api_key,
            CredentialField::OpenAiModelId => &mut self.open_ai_model_id,
            CredentialField::GeminiApiKey => &mut self.gemini_api_key,
            CredentialField::DeepSeekApiKey => &mut self.deep_seek_api_key,
            CredentialField::OllamaBaseUrl => &mut self.ollama_base_url,
            CredentialField::OllamaModelId => &mut self.ollama_model_id,
            CredentialField::LmStudioModelId => &mut self.lm_studio_model_id,
            CredentialField::AwsRegion => &mut self.aws_region,
            CredentialField::VertexProjectId => &mut self.vertex_project_id,
            CredentialField::VertexRegion => &mut self.vertex_region,
        }
    }
}

// Secrets never reach the log through Debug.
impl std::fmt::Debug for ApiConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let masked = |value: &Option<String>| value.clone().map(SecureString::new);
        f.debug_struct("ApiConfiguration")
            .field("api_provider", &self.api_provider)
            .field("api_model_id", &self.api_model_id)
            .field("api_key", &masked(&self.api_key))
            .field("open_router_api_key", &masked(&self.open_router_api_key))
            .field("open_ai_base_url", &self.open_ai_base_url)
            .field("open_ai_api_key", &masked(&self.open_ai_api_key))
            .field("open_ai_model_id", &self.open_ai_model_id)
            .field("gemini_api_key", &masked(&self.gemini_api_key))
            .field("deep_seek_api_key", &masked(&self.deep_seek_api_key))
            .field("ollama_base_url", &self.ollama_base_url)
            .field("ollama_model_id", &self.ollama_model_id)
            .field("lm_studio_model_id", &self.lm_studio_model_id)
            .field("aws_region", &self.aws_region)
            .field("vertex_project_id", &self.vertex_project_id)
            .field("vertex_region", &self.vertex_region)
            .field("user_token", &masked(&self.user_token))
            .finish()
    }
}

/// Editable credential fields shown by the credential form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    ApiKey,
    OpenRouterApiKey,
    OpenAiBaseUrl,
    OpenAiApiKey,
    OpenAiModelId,
    GeminiApiKey,
    DeepSeekApiKey,
    OllamaBaseUrl,
    OllamaModelId,
    LmStudioModelId,
    AwsRegion,
    VertexProjectId,
    VertexRegion,
}

impl CredentialField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ApiKey => "Anthropic API Key",
            Self::OpenRouterApiKey => "OpenRouter API Key",
            Self::OpenAiBaseUrl => "Base URL",
            Self::OpenAiApiKey => "API Key",
            Self::OpenAiModelId => "Model ID",
            Self::GeminiApiKey => "Gemini API Key",
            Self::DeepSeekApiKey => "DeepSeek API Key",
            Self::OllamaBaseUrl => "Base URL (optional)",
            Self::OllamaModelId => "Model ID",
            Self::LmStudioModelId => "Model ID",
            Self::AwsRegion => "AWS Region",
            Self::VertexProjectId => "Google Cloud Project ID",
            Self::VertexRegion => "Google Cloud Region",
        }
    }

    /// Masked when rendered.
    pub fn is_secret(&self) -> bool {
        matches!(
            self,
            Self::ApiKey
                | Self::OpenRouterApiKey
                | Self::OpenAiApiKey
                | Self::GeminiApiKey
                | Self::DeepSeekApiKey
        )
    }

    /// Fields the credential form shows for a provider, in display order.
    pub fn for_provider(provider: ApiProvider) -> &'static [CredentialField] {
        match provider {
            ApiProvider::Anthropic => &[Self::ApiKey],
            ApiProvider::OpenRouter => &[Self::OpenRouterApiKey],
            ApiProvider::OpenAi => &[Self::OpenAiBaseUrl, Self::OpenAiApiKey, Self::OpenAiModelId],
            ApiProvider::Gemini => &[Self::GeminiApiKey],
            ApiProvider::DeepSeek => &[Self::DeepSeekApiKey],
            ApiProvider::Ollama => &[Self::OllamaBaseUrl, Self::OllamaModelId],
            ApiProvider::LmStudio => &[Self::LmStudioModelId],
            ApiProvider::Bedrock => &[Self::AwsRegion],
            ApiProvider::Vertex => &[Self::VertexProjectId, Self::VertexRegion],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_user_token_keeps_other_fields() {
        let config = ApiConfiguration {
            api_provider: ApiProvider::OpenRouter,
            open_router_api_key: Some("or-key".into()),
            ..Default::default()
        };
        let merged = config.with_user_token("abc123");
        assert_eq!(merged.user_token.as_deref(), Some("abc123"));
        assert_eq!(merged.open_router_api_key.as_deref(), Some("or-key"));
        assert_eq!(merged.api_provider, ApiProvider::OpenRouter);
        assert_eq!(config.user_token, None);
    }

    #[test]
    fn with_field_empty_clears_value() {
        let config = ApiConfiguration::default().with_field(CredentialField::ApiKey, "sk-1");
        assert_eq!(config.field(CredentialField::ApiKey), Some("sk-1"));
        let cleared = config.with_field(CredentialField::ApiKey, "");
        assert_eq!(cleared.api_key, None);
    }

    #[test]
    fn provider_cycle_wraps() {
        assert_eq!(ApiProvider::Vertex.next(), ApiProvider::Anthropic);
        assert_eq!(ApiProvider::Anthropic.prev(), ApiProvider::Vertex);
        assert_eq!(ApiProvider::Anthropic.next(), ApiProvider::OpenRouter);
    }

    #[test]
    fn debug_masks_secrets() {
        let config = ApiConfiguration {
            api_key: Some("sk-secret".into()),
            user_token: Some("tok-secret".into()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(!rendered.contains("tok-secret"));
    }

    #[test]
    fn provider_serializes_kebab_case() {
        let config = ApiConfiguration {
            api_provider: ApiProvider::LmStudio,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"lm-studio\""));
        let openai = serde_json::to_string(&ApiProvider::OpenAi).unwrap();
        assert_eq!(openai, "\"openai\"");
    }
}
