use serde::{Deserialize, Serialize};

use crate::config::ApiConfiguration;

use super::{provider_from_code, provider_to_code, WireError};

/// Provider/model sub-object carried by a provider-config update.
///
/// Deliberately has no user token field: this update never touches it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelsApiConfiguration {
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
}

impl std::fmt::Debug for ModelsApiConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelsApiConfiguration")
            .field("api_provider", &self.api_provider)
            .field("api_model_id", &self.api_model_id)
            .finish_non_exhaustive()
    }
}

impl From<&ApiConfiguration> for ModelsApiConfiguration {
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
        }
    }
}

impl ModelsApiConfiguration {
    /// Overlay the provider/model fields on top of `base`, keeping the
    /// fields this shape does not carry.
    pub fn apply_to(self, base: &ApiConfiguration) -> Result<ApiConfiguration, WireError> {
        Ok(ApiConfiguration {
            api_provider: provider_from_code(self.api_provider)?,
            api_model_id: self.api_model_id,
            api_key: self.api_key,
            open_router_api_key: self.open_router_api_key,
            open_ai_base_url: self.open_ai_base_url,
            open_ai_api_key: self.open_ai_api_key,
            open_ai_model_id: self.open_ai_model_id,
            gemini_api_key: self.gemini_api_key,
            deep_seek_api_key: self.deep_seek_api_key,
            ollama_base_url: self.ollama_base_url,
            ollama_model_id: self.ollama_model_id,
            lm_studio_model_id: self.lm_studio_model_id,
            aws_region: self.aws_region,
            vertex_project_id: self.vertex_project_id,
            vertex_region: self.vertex_region,
            user_token: base.user_token.clone(),
        })
    }
}

/// Provider-config update sent to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApiConfigurationRequest {
    pub api_configuration: Option<ModelsApiConfiguration>,
}

impl UpdateApiConfigurationRequest {
    pub fn from_configuration(config: &ApiConfiguration) -> Self {
        Self {
            api_configuration: Some(config.into()),
        }
    }

    /// Merge the carried sub-object into the host's current configuration.
    pub fn merge_into(self, current: &ApiConfiguration) -> Result<ApiConfiguration, WireError> {
        self.api_configuration
            .ok_or(WireError::MissingConfiguration)?
            .apply_to(current)
    }
}
