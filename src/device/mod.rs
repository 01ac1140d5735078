//! Model of the peripheral the server controls.
//!
//! `DeviceState` is created once at startup and owned by the control server
//! for the life of the process. Handlers get it by `&mut` for the duration
//! of one request, so no locking is involved.

pub mod sim;

use tracing::{debug, info};

use crate::error::{DeviceError, SensorError};

/// Quantities a sensor capability can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    /// Degrees Celsius
    Temperature,
    /// Pascals
    Pressure,
    /// Percent relative humidity
    Humidity,
    /// Metres above sea level
    Altitude,
}

impl SensorKind {
    pub fn name(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Pressure => "pressure",
            SensorKind::Humidity => "humidity",
            SensorKind::Altitude => "altitude",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "TEMP",
            SensorKind::Pressure => "PRESS",
            SensorKind::Humidity => "HUM",
            SensorKind::Altitude => "ALT",
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::Pressure => "hPa",
            SensorKind::Humidity => "%RH",
            SensorKind::Altitude => "m",
        }
    }

    // Pressure arrives in Pa and is shown in hPa.
    fn divisor(&self) -> f64 {
        match self {
            SensorKind::Pressure => 100.0,
            _ => 1.0,
        }
    }

    /// Formats a raw reading for display, e.g. `TEMP: 23.46°C`.
    ///
    /// ```
    /// # use pico_control::device::SensorKind;
    /// assert_eq!(SensorKind::Pressure.format(101325.0), "PRESS: 1013.25hPa");
    /// ```
    pub fn format(&self, raw: f64) -> String {
        format!("{}: {:.2}{}", self.label(), raw / self.divisor(), self.unit())
    }
}

/// Read access to a sensor driver.
pub trait SensorCapability: Send {
    fn read_scalar(&mut self, kind: SensorKind) -> Result<f64, SensorError>;
}

/// Write access to an on/off actuator such as an LED.
pub trait ActuatorCapability: Send {
    fn set_state(&mut self, on: bool);
    fn get_state(&self) -> bool;
}

pub struct ActuatorState {
    actuator: Box<dyn ActuatorCapability>,
    on: bool,
}

pub struct SensorState {
    sensor: Box<dyn SensorCapability>,
    zero_reference: Option<f64>,
}

/// The one mutable cell shared across requests.
pub enum DeviceState {
    /// On/off output with its last commanded state
    Actuator(ActuatorState),
    /// Sensor plus the altitude captured at startup
    Sensor(SensorState),
    /// No peripheral attached
    Passive,
}

// Driver trait objects are opaque, so only the plain state fields are shown.
impl std::fmt::Debug for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceState::Actuator(state) => f
                .debug_struct("Actuator")
                .field("on", &state.on)
                .finish_non_exhaustive(),
            DeviceState::Sensor(state) => f
                .debug_struct("Sensor")
                .field("zero_reference", &state.zero_reference)
                .finish_non_exhaustive(),
            DeviceState::Passive => f.write_str("Passive"),
        }
    }
}

impl DeviceState {
    /// Wraps an actuator and switches it off, so the cached state starts
    /// out matching the hardware.
    pub fn actuator(actuator: impl ActuatorCapability + 'static) -> Self {
        let mut actuator: Box<dyn ActuatorCapability> = Box::new(actuator);
        actuator.set_state(false);
        DeviceState::Actuator(ActuatorState { actuator, on: false })
    }

    /// Wraps a sensor and captures its current altitude as the zero
    /// reference for relative altitude readings.
    ///
    /// A sensor without an altitude channel gets no zero reference. Any other
    /// read failure is returned, since the server cannot start without it.
    pub fn sensor(sensor: impl SensorCapability + 'static) -> Result<Self, SensorError> {
        let mut sensor: Box<dyn SensorCapability> = Box::new(sensor);

        let zero_reference = match sensor.read_scalar(SensorKind::Altitude) {
            Ok(zero) => {
                info!(zero, "Captured altitude zero reference");
                Some(zero)
            }
            Err(SensorError::Unsupported(_)) => None,
            Err(e) => return Err(e),
        };

        Ok(DeviceState::Sensor(SensorState {
            sensor,
            zero_reference,
        }))
    }

    pub fn passive() -> Self {
        DeviceState::Passive
    }

    /// Drives the actuator and returns the new cached state.
    pub fn set_actuator(&mut self, on: bool) -> Result<bool, DeviceError> {
        match self {
            DeviceState::Actuator(state) => {
                state.actuator.set_state(on);
                state.on = on;
                debug!(on, "Actuator updated");
                Ok(state.on)
            }
            _ => Err(DeviceError::NoActuator),
        }
    }

    /// Last commanded actuator state, `None` without an actuator.
    pub fn actuator_state(&self) -> Option<bool> {
        match self {
            DeviceState::Actuator(state) => Some(state.on),
            _ => None,
        }
    }

    /// Reads one quantity. Altitude is returned relative to the zero
    /// reference.
    pub fn read(&mut self, kind: SensorKind) -> Result<f64, DeviceError> {
        let DeviceState::Sensor(state) = self else {
            return Err(DeviceError::NoSensor);
        };

        let value = state.sensor.read_scalar(kind)?;

        match (kind, state.zero_reference) {
            (SensorKind::Altitude, Some(zero)) => Ok(value - zero),
            _ => Ok(value),
        }
    }

    pub fn zero_reference(&self) -> Option<f64> {
        match self {
            DeviceState::Sensor(state) => state.zero_reference,
            _ => None,
        }
    }
}
