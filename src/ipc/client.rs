use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::config::ApiConfiguration;
use crate::wire::{UpdateApiConfigurationRequest, UpdateSettingsRequest};

use super::services::HostServices;
use super::types::{HostError, IpcCommand, IpcError};

pub const IPC_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct IpcClient {
    sender: mpsc::Sender<IpcCommand>,
    timeout: Duration,
}

impl IpcClient {
    pub fn new(sender: mpsc::Sender<IpcCommand>) -> Self {
        Self {
            sender,
            timeout: IPC_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> IpcCommand,
    ) -> Result<T, IpcError> {
        let (respond_to, receiver) = oneshot::channel();
        let command = build(respond_to);
        tracing::trace!(command = command.name(), "IPC: sending");
        self.sender
            .send(command)
            .await
            .map_err(|_| IpcError::Disconnected)?;

        recv_with_timeout(receiver, self.timeout).await
    }
}

#[async_trait]
impl HostServices for IpcClient {
    async fn open_in_browser(&self, url: &str) -> Result<(), HostError> {
        let url = url.to_string();
        self.request(|respond_to| IpcCommand::OpenInBrowser { url, respond_to })
            .await?
            .map_err(HostError::Rejected)
    }

    async fn update_settings(&self, request: UpdateSettingsRequest) -> Result<(), HostError> {
        self.request(|respond_to| IpcCommand::UpdateSettings {
            request,
            respond_to,
        })
        .await?
        .map_err(HostError::Rejected)
    }

    async fn update_api_configuration(
        &self,
        request: UpdateApiConfigurationRequest,
    ) -> Result<(), HostError> {
        self.request(|respond_to| IpcCommand::UpdateApiConfiguration {
            request,
            respond_to,
        })
        .await?
        .map_err(HostError::Rejected)
    }

    async fn get_api_configuration(&self) -> Result<Option<ApiConfiguration>, HostError> {
        let config = self
            .request(|respond_to| IpcCommand::GetApiConfiguration { respond_to })
            .await?;
        Ok(config)
    }
}

async fn recv_with_timeout<T>(
    receiver: oneshot::Receiver<T>,
    timeout: Duration,
) -> Result<T, IpcError> {
    match tokio::time::timeout(timeout, receiver).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(IpcError::Disconnected),
        Err(_) => Err(IpcError::Timeout),
    }
}
