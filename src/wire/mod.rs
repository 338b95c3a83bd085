//! Transport shapes for `ApiConfiguration` crossing the UI/host boundary.
//!
//! Two mappings exist because the host exposes two updates:
//! - `settings`: the whole API configuration, user token included.
//! - `models`: only the provider/model sub-object; the host keeps whatever
//!   user token it already stores.
//!
//! Providers travel as numeric codes; decoding an unknown code is an error
//! rather than a silent fallback.

mod models;
mod settings;

pub use models::{ModelsApiConfiguration, UpdateApiConfigurationRequest};
pub use settings::{SettingsApiConfiguration, UpdateSettingsRequest};

use thiserror::Error;

use crate::config::ApiProvider;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("unknown provider code {0}")]
    UnknownProvider(i32),
    #[error("request is missing the api configuration")]
    MissingConfiguration,
}

/// Stable numeric code for a provider. Codes are part of the transport
/// contract; never reuse a retired one.
pub fn provider_to_code(provider: ApiProvider) -> i32 {
    match provider {
        ApiProvider::Anthropic => 0,
        ApiProvider::OpenRouter => 1,
        ApiProvider::Bedrock => 2,
        ApiProvider::Vertex => 3,
        ApiProvider::OpenAi => 4,
        ApiProvider::Ollama => 5,
        ApiProvider::LmStudio => 6,
        ApiProvider::Gemini => 7,
        ApiProvider::DeepSeek => 9,
    }
}

pub fn provider_from_code(code: i32) -> Result<ApiProvider, WireError> {
    match code {
        0 => Ok(ApiProvider::Anthropic),
        1 => Ok(ApiProvider::OpenRouter),
        2 => Ok(ApiProvider::Bedrock),
        3 => Ok(ApiProvider::Vertex),
        4 => Ok(ApiProvider::OpenAi),
        5 => Ok(ApiProvider::Ollama),
        6 => Ok(ApiProvider::LmStudio),
        7 => Ok(ApiProvider::Gemini),
        9 => Ok(ApiProvider::DeepSeek),
        other => Err(WireError::UnknownProvider(other)),
    }
}
