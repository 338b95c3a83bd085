pub mod cli;
pub mod clipboard;
pub mod config;
pub mod host;
pub mod ipc;
pub mod logging;
pub mod ui;
pub mod wire;
