//! Host-side stand-ins for the LED and the atmospheric sensor.
//!
//! Both keep their state behind an `Arc` so a handle can observe or steer
//! them after the device itself has been moved into the server.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use serde::Deserialize;
use tracing::info;

use crate::device::{ActuatorCapability, SensorCapability, SensorKind};
use crate::error::SensorError;

/// LED that only logs and remembers its state.
#[derive(Debug, Clone, Default)]
pub struct SimulatedLed {
    on: Arc<AtomicBool>,
}

impl SimulatedLed {
    pub fn new() -> Self {
        Self::default()
    }

    /// A second handle onto the same LED.
    pub fn probe(&self) -> LedProbe {
        LedProbe {
            on: Arc::clone(&self.on),
        }
    }
}

impl ActuatorCapability for SimulatedLed {
    fn set_state(&mut self, on: bool) {
        self.on.store(on, Ordering::SeqCst);
        info!(state = if on { "ON" } else { "OFF" }, "LED switched");
    }

    fn get_state(&self) -> bool {
        self.on.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct LedProbe {
    on: Arc<AtomicBool>,
}

impl LedProbe {
    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::SeqCst)
    }
}

/// Fixed readings for the simulated atmospheric sensor.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Readings {
    /// Degrees Celsius
    pub temperature: f64,
    /// Pascals
    pub pressure: f64,
    /// Percent relative humidity
    pub humidity: f64,
    /// Metres
    pub altitude: f64,
}

impl Default for Readings {
    fn default() -> Self {
        Self {
            temperature: 21.0,
            pressure: 101_325.0,
            humidity: 40.0,
            altitude: 0.0,
        }
    }
}

#[derive(Debug)]
struct Channels {
    values: [AtomicU64; 4],
    available: AtomicBool,
}

fn slot(kind: SensorKind) -> usize {
    match kind {
        SensorKind::Temperature => 0,
        SensorKind::Pressure => 1,
        SensorKind::Humidity => 2,
        SensorKind::Altitude => 3,
    }
}

/// Atmospheric sensor that reports whatever its handle last set.
#[derive(Debug, Clone)]
pub struct SimulatedAtmosphere {
    channels: Arc<Channels>,
}

impl SimulatedAtmosphere {
    pub fn new(readings: Readings) -> Self {
        let channels = Channels {
            values: [
                AtomicU64::new(readings.temperature.to_bits()),
                AtomicU64::new(readings.pressure.to_bits()),
                AtomicU64::new(readings.humidity.to_bits()),
                AtomicU64::new(readings.altitude.to_bits()),
            ],
            available: AtomicBool::new(true),
        };
        Self {
            channels: Arc::new(channels),
        }
    }

    pub fn handle(&self) -> AtmosphereHandle {
        AtmosphereHandle {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl SensorCapability for SimulatedAtmosphere {
    fn read_scalar(&mut self, kind: SensorKind) -> Result<f64, SensorError> {
        if !self.channels.available.load(Ordering::SeqCst) {
            return Err(SensorError::Unavailable("no response on I2C bus".to_string()));
        }
        let bits = self.channels.values[slot(kind)].load(Ordering::SeqCst);
        Ok(f64::from_bits(bits))
    }
}

/// Steers a [`SimulatedAtmosphere`] from outside the server.
#[derive(Debug, Clone)]
pub struct AtmosphereHandle {
    channels: Arc<Channels>,
}

impl AtmosphereHandle {
    pub fn set(&self, kind: SensorKind, value: f64) {
        self.channels.values[slot(kind)].store(value.to_bits(), Ordering::SeqCst);
    }

    /// Simulates the sensor dropping off (or coming back onto) the bus.
    pub fn set_available(&self, available: bool) {
        self.channels.available.store(available, Ordering::SeqCst);
    }
}
