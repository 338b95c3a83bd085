use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Sign-up page opened by the "Get Started" action.
pub const DEFAULT_SIGNUP_URL: &str = "https://mone.test.mi.com/z/info";

/// Root configuration container for the welcome screen itself.
///
/// This is not the persisted provider configuration (that lives in the
/// host's settings store); it only controls how this process runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub welcome: WelcomeConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ipc: IpcConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeConfig {
    /// URL opened in the browser to obtain a user token.
    #[serde(default = "default_signup_url")]
    pub signup_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Settings file owned by the host. Defaults to `settings.toml` next to
    /// the app config.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"firstrun=debug"`.
    /// `RUST_LOG` wins when set.
    #[serde(default)]
    pub filter: Option<String>,
    /// Log file path. The terminal belongs to the UI, so logs never go to stdout.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcConfig {
    /// How long a host request may take before it counts as failed.
    #[serde(default = "default_ipc_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_signup_url() -> String {
    DEFAULT_SIGNUP_URL.to_string()
}

fn default_ipc_timeout_ms() -> u64 {
    5_000
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            signup_url: default_signup_url(),
        }
    }
}

impl Default for IpcConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_ipc_timeout_ms(),
        }
    }
}
