use thiserror::Error;
use tokio::sync::oneshot;

use crate::config::ApiConfiguration;
use crate::wire::{UpdateApiConfigurationRequest, UpdateSettingsRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpcError {
    Disconnected,
    Timeout,
}

impl std::fmt::Display for IpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IpcError::Disconnected => write!(f, "IPC channel disconnected"),
            IpcError::Timeout => write!(f, "IPC request timed out"),
        }
    }
}

impl std::error::Error for IpcError {}

/// Failure of a host operation as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The request never got an answer.
    #[error(transparent)]
    Ipc(#[from] IpcError),
    /// The host answered with a failure.
    #[error("{0}")]
    Rejected(String),
}

/// Host reply: `Err` carries the host-side error rendered as text, since
/// store and launcher errors wrap `std::io::Error` and cannot cross a
/// channel by value twice.
pub type HostReply<T> = oneshot::Sender<Result<T, String>>;

pub enum IpcCommand {
    OpenInBrowser {
        url: String,
        respond_to: HostReply<()>,
    },
    UpdateSettings {
        request: UpdateSettingsRequest,
        respond_to: HostReply<()>,
    },
    UpdateApiConfiguration {
        request: UpdateApiConfigurationRequest,
        respond_to: HostReply<()>,
    },
    GetApiConfiguration {
        respond_to: oneshot::Sender<Option<ApiConfiguration>>,
    },
}

impl IpcCommand {
    pub fn name(&self) -> &'static str {
        match self {
            IpcCommand::OpenInBrowser { .. } => "OpenInBrowser",
            IpcCommand::UpdateSettings { .. } => "UpdateSettings",
            IpcCommand::UpdateApiConfiguration { .. } => "UpdateApiConfiguration",
            IpcCommand::GetApiConfiguration { .. } => "GetApiConfiguration",
        }
    }
}
