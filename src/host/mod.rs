//! Host-side services reached by the welcome screen over IPC.
//!
//! In the editor this is a separate process; here it runs as a task next to
//! the UI and is only ever talked to through `crate::ipc`.

mod browser;
mod store;

pub use browser::{BrowserLauncher, LaunchError, SystemBrowser};
pub use store::{HostSettings, SettingsStore, StoreError};
