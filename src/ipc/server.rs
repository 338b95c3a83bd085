use std::sync::Arc;

use tokio::sync::mpsc;

use crate::host::{BrowserLauncher, SettingsStore, StoreError};

use super::types::IpcCommand;

pub struct IpcServer {
    pub(crate) receiver: mpsc::Receiver<IpcCommand>,
}

impl IpcServer {
    pub fn new(receiver: mpsc::Receiver<IpcCommand>) -> Self {
        Self { receiver }
    }

    /// Serve commands until every client is dropped.
    ///
    /// Commands are handled one at a time in arrival order.
    pub async fn run(mut self, store: SettingsStore, browser: Arc<dyn BrowserLauncher>) {
        while let Some(command) = self.receiver.recv().await {
            match command {
                IpcCommand::OpenInBrowser { url, respond_to } => {
                    let result = browser.open(&url).await.map_err(|e| e.to_string());
                    match &result {
                        Ok(()) => tracing::info!(%url, "Opened external URL"),
                        Err(error) => tracing::warn!(%url, %error, "Failed to open external URL"),
                    }
                    if respond_to.send(result).is_err() {
                        tracing::trace!("IPC: OpenInBrowser response dropped (receiver gone)");
                    }
                }
                IpcCommand::UpdateSettings {
                    request,
                    respond_to,
                } => {
                    let writer = store.clone();
                    let result = blocking(move || writer.update_settings(request)).await;
                    match &result {
                        Ok(()) => tracing::info!(
                            path = %store.path().display(),
                            "Settings updated"
                        ),
                        Err(error) => tracing::warn!(%error, "Settings update rejected"),
                    }
                    if respond_to.send(result).is_err() {
                        tracing::trace!("IPC: UpdateSettings response dropped (receiver gone)");
                    }
                }
                IpcCommand::UpdateApiConfiguration {
                    request,
                    respond_to,
                } => {
                    let writer = store.clone();
                    let result = blocking(move || writer.update_api_configuration(request)).await;
                    match &result {
                        Ok(()) => tracing::info!(
                            path = %store.path().display(),
                            "API configuration updated"
                        ),
                        Err(error) => tracing::warn!(%error, "API configuration update rejected"),
                    }
                    if respond_to.send(result).is_err() {
                        tracing::trace!(
                            "IPC: UpdateApiConfiguration response dropped (receiver gone)"
                        );
                    }
                }
                IpcCommand::GetApiConfiguration { respond_to } => {
                    if respond_to.send(store.api_configuration()).is_err() {
                        tracing::trace!("IPC: GetApiConfiguration response dropped (receiver gone)");
                    }
                }
            }
        }
        tracing::debug!("IPC: all clients gone, host server stopping");
    }
}

/// Run a store update on the blocking pool so file I/O never stalls the loop.
async fn blocking<F>(update: F) -> Result<(), String>
where
    F: FnOnce() -> Result<(), StoreError> + Send + 'static,
{
    match tokio::task::spawn_blocking(update).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(format!("Settings update task failed: {e}")),
    }
}
