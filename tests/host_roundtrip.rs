//! Welcome flows over the real IPC layer and settings store.

mod common;

use async_trait::async_trait;
use common::*;
use firstrun::config::{ApiProvider, CredentialField};
use firstrun::host::{BrowserLauncher, LaunchError, SettingsStore};
use firstrun::ipc::{HostServices, IpcLayer};
use firstrun::ui::api_options::FieldEdit;
use parking_lot::Mutex;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Default)]
struct RecordingBrowser {
    opened: Mutex<Vec<String>>,
}

#[async_trait]
impl BrowserLauncher for RecordingBrowser {
    async fn open(&self, url: &str) -> Result<(), LaunchError> {
        self.opened.lock().push(url.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn token_and_provider_flows_persist_to_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[editor]\ntheme = \"dark\"\n").expect("seed");

    let store = SettingsStore::open(path.clone()).expect("store");
    let browser = Arc::new(RecordingBrowser::default());
    let (client, server) = IpcLayer::new();
    let server_task = tokio::spawn(server.run(store, browser.clone()));
    let host: Arc<dyn HostServices> = Arc::new(client);

    let (mut app, mut rx) = make_app();
    app.load_configuration();
    app.login();
    pump(&mut app, &mut rx, host.as_ref()).await;
    assert_eq!(browser.opened.lock().len(), 1);

    app.set_token_input("  abc123  ");
    app.submit_token();
    pump(&mut app, &mut rx, host.as_ref()).await;
    assert!(!app.welcome().is_token_entry_visible());

    app.show_api_options();
    for _ in 0..5 {
        app.cycle_provider(true);
        if app.welcome().api_configuration().map(|c| c.api_provider) == Some(ApiProvider::Ollama) {
            break;
        }
    }
    app.edit_field(CredentialField::OllamaModelId, FieldEdit::Paste("llama3".into()));
    assert!(app.welcome().manual_submit_enabled());
    app.submit_api_configuration();
    pump(&mut app, &mut rx, host.as_ref()).await;

    let reopened = SettingsStore::open(path.clone()).expect("reopen");
    let stored = reopened.api_configuration().expect("stored configuration");
    assert_eq!(stored.api_provider, ApiProvider::Ollama);
    assert_eq!(stored.ollama_model_id.as_deref(), Some("llama3"));
    assert_eq!(stored.user_token.as_deref(), Some("abc123"));

    let raw = std::fs::read_to_string(&path).expect("read");
    assert!(raw.contains("theme = \"dark\""));

    drop(host);
    let _ = server_task.await;
}
