use serde::{Deserialize, Serialize};

use crate::config::ApiConfiguration;

use super::{provider_from_code, provider_to_code, WireError};

/// Whole API configuration as carried by a settings update.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsApiConfiguration {
    pub api_provider: i32,
    pub api_model_id: Option<String>,
    pub api_key: Option<String>,
    pub open_router_api_key: Option<String>,
    pub open_ai_base_url: Option<String>,
    pub open_ai_api_key: Option<String>,
    pub open_ai_model_id: Option<String>,
    pub gemini_api_key: Option<String>,
    pub deep_seek_api_key: Option<String>,
    pub ollama_base_url: Option<String>,
    pub ollama_model_id: Option<String>,
    pub lm_studio_model_id: Option<String>,
    pub aws_region: Option<String>,
    pub vertex_project_id: Option<String>,
    pub vertex_region: Option<String>,
    pub user_token: Option<String>,
}

impl std::fmt::Debug for SettingsApiConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsApiConfiguration")
            .field("api_provider", &self.api_provider)
            .field("api_model_id", &self.api_model_id)
            .field("has_user_token", &self.user_token.is_some())
            .finish_non_exhaustive()
    }
}

impl From<&ApiConfiguration> for SettingsApiConfiguration {
    fn from(config: &ApiConfiguration) -> Self {
        Self {
            api_provider: provider_to_code(config.api_provider),
            api_model_id: config.api_model_id.clone(),
            api_key: config.api_key.clone(),
            open_router_api_key: config.open_router_api_key.clone(),
            open_ai_base_url: config.open_ai_base_url.clone(),
            open_ai_api_key: config.open_ai_api_key.clone(),
            open_ai_model_id: config.open_ai_model_id.clone(),
            gemini_api_key: config.gemini_api_key.clone(),
            deep_seek_api_key: config.deep_seek_api_key.clone(),
            ollama_base_url: config.ollama_base_url.clone(),
            ollama_model_id: config.ollama_model_id.clone(),
            lm_studio_model_id: config.lm_studio_model_id.clone(),
            aws_region: config.aws_region.clone(),
            vertex_project_id: config.vertex_project_id.clone(),
            vertex_region: config.vertex_region.clone(),
            user_token: config.user_token.clone(),
        }
    }
}

impl TryFrom<SettingsApiConfiguration> for ApiConfiguration {
    type Error = WireError;

    fn try_from(wire: SettingsApiConfiguration) -> Result<Self, Self::Error> {
        Ok(Self {
            api_provider: provider_from_code(wire.api_provider)?,
            api_model_id: wire.api_model_id,
            api_key: wire.api_key,
            open_router_api_key: wire.open_router_api_key,
            open_ai_base_url: wire.open_ai_base_url,
            open_ai_api_key: wire.open_ai_api_key,
            open_ai_model_id: wire.open_ai_model_id,
            gemini_api_key: wire.gemini_api_key,
            deep_seek_api_key: wire.deep_seek_api_key,
            ollama_base_url: wire.ollama_base_url,
            ollama_model_id: wire.ollama_model_id,
            lm_studio_model_id: wire.lm_studio_model_id,
            aws_region: wire.aws_region,
            vertex_project_id: wire.vertex_project_id,
            vertex_region: wire.vertex_region,
            user_token: wire.user_token,
        })
    }
}

/// Settings update sent to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub api_configuration: Option<SettingsApiConfiguration>,
}

impl UpdateSettingsRequest {
    pub fn from_configuration(config: &ApiConfiguration) -> Self {
        Self {
            api_configuration: Some(config.into()),
        }
    }

    /// Decode the carried configuration on the host side.
    pub fn into_configuration(self) -> Result<ApiConfiguration, WireError> {
        self.api_configuration
            .ok_or(WireError::MissingConfiguration)?
            .try_into()
    }
}
