//! Command channel between the welcome screen and the host.
//!
//! The UI holds an `IpcClient`; the host runs an `IpcServer`. Each request
//! carries a oneshot reply and is bounded by a timeout on the client side.

mod client;
mod server;
mod services;
mod types;


pub use client::{IpcClient, IPC_TIMEOUT};
pub use server::IpcServer;
pub use services::HostServices;
pub use types::{HostError, HostReply, IpcCommand, IpcError};

use tokio::sync::mpsc;

const IPC_BUFFER: usize = 16;

pub struct IpcLayer;

impl IpcLayer {
    pub fn new() -> (IpcClient, IpcServer) {
        let (sender, receiver) = mpsc::channel(IPC_BUFFER);
        (IpcClient::new(sender), IpcServer::new(receiver))
    }
}
