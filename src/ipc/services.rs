use async_trait::async_trait;

use crate::config::ApiConfiguration;
use crate::wire::{UpdateApiConfigurationRequest, UpdateSettingsRequest};

use super::types::HostError;

/// Everything the welcome screen needs from the host.
///
/// Every operation returns an explicit `Result`; callers decide what a
/// failure means (the welcome flows log it and carry on).
#[async_trait]
pub trait HostServices: Send + Sync {
    /// Ask the host to open `url` in the user's browser.
    async fn open_in_browser(&self, url: &str) -> Result<(), HostError>;

    /// Replace the persisted settings' API configuration, user token included.
    async fn update_settings(&self, request: UpdateSettingsRequest) -> Result<(), HostError>;

    /// Replace only the provider/model part of the persisted configuration.
    async fn update_api_configuration(
        &self,
        request: UpdateApiConfigurationRequest,
    ) -> Result<(), HostError>;

    /// Current persisted API configuration, if any was ever stored.
    async fn get_api_configuration(&self) -> Result<Option<ApiConfiguration>, HostError>;
}
