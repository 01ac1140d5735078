//! pico-control - single-threaded HTTP control server for small devices
//!
//! Exposes an LED or an atmospheric sensor to a browser: one request per
//! connection, routed by exact path, answered with a short text payload or
//! a streamed asset.

pub mod assets;
pub mod config;
pub mod device;
pub mod error;
pub mod http;
pub mod router;
pub mod server;
pub mod startup;
