//! Error types for device and asset access.
//!
//! Transport failures stay `std::io::Error`; these enums cover the domain
//! failures that handlers turn into textual responses.

use thiserror::Error;

/// Failure reported by a sensor capability.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensorError {
    /// The sensor did not answer (bus error, unplugged, not yet powered).
    #[error("sensor unavailable: {0}")]
    Unavailable(String),

    /// The sensor has no channel for the requested quantity.
    #[error("sensor cannot measure {0}")]
    Unsupported(&'static str),
}

/// Failure while acting on the device model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeviceError {
    #[error("no sensor attached")]
    NoSensor,

    #[error("no actuator attached")]
    NoActuator,

    #[error(transparent)]
    Sensor(#[from] SensorError),
}

/// Failure while opening a static asset or template.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset is not present in the source
    #[error("asset not found: {0}")]
    Missing(String),

    /// Asset exists but could not be read
    #[error("failed to read asset {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Template is not valid UTF-8
    #[error("template {0} is not valid UTF-8")]
    NotText(String),
}
