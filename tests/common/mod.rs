//! Shared test utilities: a recording host and log capture.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use firstrun::config::ApiConfiguration;
use firstrun::ipc::{HostError, HostServices};
use firstrun::ui::app::App;
use firstrun::ui::commands::{execute, UiCommand};
use firstrun::wire::{UpdateApiConfigurationRequest, UpdateSettingsRequest};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// `HostServices` that records every call and fails on demand.
#[derive(Default)]
pub struct RecordingHost {
    pub opened: Mutex<Vec<String>>,
    pub settings_updates: Mutex<Vec<UpdateSettingsRequest>>,
    pub api_updates: Mutex<Vec<UpdateApiConfigurationRequest>>,
    pub stored: Mutex<Option<ApiConfiguration>>,
    pub fail_open: AtomicBool,
    pub fail_settings: AtomicBool,
    pub fail_api: AtomicBool,
}

impl RecordingHost {
    pub fn failing_open() -> Self {
        let host = Self::default();
        host.fail_open.store(true, Ordering::SeqCst);
        host
    }

    pub fn failing_settings() -> Self {
        let host = Self::default();
        host.fail_settings.store(true, Ordering::SeqCst);
        host
    }

    pub fn failing_api() -> Self {
        let host = Self::default();
        host.fail_api.store(true, Ordering::SeqCst);
        host
    }
}

fn outcome(fail: &AtomicBool, what: &str) -> Result<(), HostError> {
    if fail.load(Ordering::SeqCst) {
        Err(HostError::Rejected(format!("{what} refused")))
    } else {
        Ok(())
    }
}

#[async_trait]
impl HostServices for RecordingHost {
    async fn open_in_browser(&self, url: &str) -> Result<(), HostError> {
        self.opened.lock().push(url.to_string());
        outcome(&self.fail_open, "browser")
    }

    async fn update_settings(&self, request: UpdateSettingsRequest) -> Result<(), HostError> {
        self.settings_updates.lock().push(request);
        outcome(&self.fail_settings, "settings")
    }

    async fn update_api_configuration(
        &self,
        request: UpdateApiConfigurationRequest,
    ) -> Result<(), HostError> {
        self.api_updates.lock().push(request);
        outcome(&self.fail_api, "api configuration")
    }

    async fn get_api_configuration(&self) -> Result<Option<ApiConfiguration>, HostError> {
        Ok(self.stored.lock().clone())
    }
}

/// App wired to a command channel the test drains by hand.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let mut app = App::new("https://example.com/signup");
    let (tx, rx) = mpsc::channel(16);
    app.set_command_sender(tx);
    (app, rx)
}

/// Run every queued command against `host` and feed the outcomes back,
/// until nothing is left. Stands in for the command worker.
pub async fn pump(app: &mut App, rx: &mut mpsc::Receiver<UiCommand>, host: &dyn HostServices) {
    while let Ok(command) = rx.try_recv() {
        let event = execute(host, command).await;
        app.on_host_event(event);
    }
}

#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }

    pub fn count(&self, needle: &str) -> usize {
        self.contents()
            .lines()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Capture logs emitted on this thread while the guard lives.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
