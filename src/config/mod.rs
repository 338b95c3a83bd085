mod api;
mod credentials;
mod loader;
mod types;
mod validate;

pub use api::{ApiConfiguration, ApiProvider, CredentialField};
pub use credentials::{mask_for_display, SecureString};
pub use loader::ConfigError;
pub use types::{
    AppConfig, IpcConfig, LoggingConfig, StoreConfig, WelcomeConfig, DEFAULT_SIGNUP_URL,
};
pub use validate::validate_api_configuration;
