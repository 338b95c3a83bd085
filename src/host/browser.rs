//! Opening external URLs on behalf of the UI.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("refusing to open non-http URL '{0}'")]
    UnsupportedUrl(String),
    #[error("system browser rejected '{url}': {source}")]
    Rejected {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("browser launch task failed: {0}")]
    Join(String),
}

/// Capability to open a URL outside the application.
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    async fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launches the platform's default browser via the `open` crate.
pub struct SystemBrowser;

#[async_trait]
impl BrowserLauncher for SystemBrowser {
    async fn open(&self, url: &str) -> Result<(), LaunchError> {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(LaunchError::UnsupportedUrl(url.to_string()));
        }

        let target = url.to_string();
        // `open::that` may block until the launcher process returns.
        let result = tokio::task::spawn_blocking(move || open::that(&target))
            .await
            .map_err(|e| LaunchError::Join(e.to_string()))?;

        result.map_err(|source| LaunchError::Rejected {
            url: url.to_string(),
            source,
        })
    }
}
