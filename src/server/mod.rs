//! Accept loop and per-connection lifecycle.

pub mod control;
pub mod listener;

pub use control::{ControlServer, ServeOutcome};
pub use listener::{NetworkListener, TcpNetworkListener};
