//! Remote work requested by the UI and its outcomes.
//!
//! The UI thread never awaits: it queues a `UiCommand`, the worker runs it
//! against `HostServices` on the tokio runtime and posts a `HostEvent` back
//! into the UI event channel.

use std::sync::mpsc as std_mpsc;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::ApiConfiguration;
use crate::ipc::{HostError, HostServices};
use crate::ui::events::AppEvent;
use crate::ui::welcome::SubmissionId;
use crate::wire::{UpdateApiConfigurationRequest, UpdateSettingsRequest};

#[derive(Debug)]
pub enum UiCommand {
    LoadConfiguration,
    OpenSignupPage {
        submission: SubmissionId,
        url: String,
    },
    SubmitToken {
        submission: SubmissionId,
        version: u64,
        request: UpdateSettingsRequest,
    },
    SubmitApiConfiguration {
        submission: SubmissionId,
        version: u64,
        request: UpdateApiConfigurationRequest,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    ConfigurationLoaded(Result<Option<ApiConfiguration>, HostError>),
    SignupPageOpened {
        submission: SubmissionId,
        result: Result<(), HostError>,
    },
    TokenSubmitted {
        submission: SubmissionId,
        version: u64,
        result: Result<(), HostError>,
    },
    ApiConfigurationSubmitted {
        submission: SubmissionId,
        version: u64,
        result: Result<(), HostError>,
    },
}

pub async fn execute(host: &dyn HostServices, command: UiCommand) -> HostEvent {
    match command {
        UiCommand::LoadConfiguration => {
            HostEvent::ConfigurationLoaded(host.get_api_configuration().await)
        }
        UiCommand::OpenSignupPage { submission, url } => HostEvent::SignupPageOpened {
            submission,
            result: host.open_in_browser(&url).await,
        },
        UiCommand::SubmitToken {
            submission,
            version,
            request,
        } => HostEvent::TokenSubmitted {
            submission,
            version,
            result: host.update_settings(request).await,
        },
        UiCommand::SubmitApiConfiguration {
            submission,
            version,
            request,
        } => HostEvent::ApiConfigurationSubmitted {
            submission,
            version,
            result: host.update_api_configuration(request).await,
        },
    }
}

/// Drain UI commands until the UI drops its sender. Each command runs in
/// its own task so a slow host call never holds up the next one.
pub async fn run_command_worker(
    host: Arc<dyn HostServices>,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let host = Arc::clone(&host);
        let events = events.clone();
        tokio::spawn(async move {
            let event = execute(host.as_ref(), command).await;
            if events.send(AppEvent::Host(event)).is_err() {
                tracing::trace!("ui event channel closed, dropping host event");
            }
        });
    }
    tracing::debug!("ui command channel closed");
}
