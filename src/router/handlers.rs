//! The handlers bound into route tables.
//!
//! Each constructor returns a [`Handler`] closure that captures what it
//! needs (templates, asset source) so nothing is looked up globally.

use std::sync::Arc;

use tracing::warn;

use crate::assets::{AssetSource, Template};
use crate::device::{DeviceState, SensorKind};
use crate::error::AssetError;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::router::table::Handler;

/// Reads one quantity and answers with e.g. `TEMP: 23.46°C`.
pub fn read_sensor(kind: SensorKind) -> Handler {
    Arc::new(move |device: &mut DeviceState, _request: &Request| {
        match device.read(kind) {
            Ok(value) => Response::text(kind.format(value)),
            Err(e) => {
                warn!(sensor = kind.name(), error = %e, "Sensor read failed");
                Response::error(StatusCode::ServiceUnavailable, e)
            }
        }
    })
}

/// What a toggle route sends back.
#[derive(Debug, Clone)]
pub enum ToggleReply {
    /// `The <label> is ON` / `The <label> is OFF`
    Confirmation { label: String },
    /// The home page, rendered after the change
    Page(HomePage),
}

/// Switches the actuator to `on`. Repeating the same command is harmless.
pub fn toggle(on: bool, reply: ToggleReply) -> Handler {
    Arc::new(move |device: &mut DeviceState, _request: &Request| {
        match device.set_actuator(on) {
            Ok(now_on) => match &reply {
                ToggleReply::Confirmation { label } => {
                    Response::text(format!("The {} is {}", label, state_word(now_on)))
                }
                ToggleReply::Page(page) => Response::html(page.render(device)),
            },
            Err(e) => {
                warn!(error = %e, "Toggle requested without an actuator");
                Response::error(StatusCode::ServiceUnavailable, e)
            }
        }
    })
}

/// Streams a static asset such as the favicon.
pub fn asset(
    source: Arc<dyn AssetSource>,
    name: impl Into<String>,
    content_type: impl Into<String>,
    chunk_size: usize,
) -> Handler {
    let name = name.into();
    let content_type = content_type.into();

    Arc::new(move |_device: &mut DeviceState, _request: &Request| {
        match source.open_stream(&name, chunk_size) {
            Ok(stream) => ResponseBuilder::new(StatusCode::Ok)
                .content_type(content_type.as_str())
                .stream(stream)
                .build(),
            Err(e @ AssetError::Missing(_)) => {
                warn!(asset = %name, "Asset missing");
                Response::error(StatusCode::NotFound, e)
            }
            Err(e) => {
                warn!(asset = %name, error = %e, "Asset unreadable");
                Response::error(StatusCode::InternalServerError, e)
            }
        }
    })
}

/// Value substituted into the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    /// Fixed text such as a prompt
    Static(String),
    /// `ON` or `OFF` from the actuator
    ActuatorState,
}

/// The default page: a template and the token to fill in.
#[derive(Debug, Clone)]
pub struct HomePage {
    template: Template,
    token: String,
    fill: Fill,
}

impl HomePage {
    pub fn new(template: Template, token: impl Into<String>, fill: Fill) -> Self {
        Self {
            template,
            token: token.into(),
            fill,
        }
    }

    pub fn render(&self, device: &DeviceState) -> String {
        let value = match &self.fill {
            Fill::Static(text) => text.clone(),
            Fill::ActuatorState => match device.actuator_state() {
                Some(on) => state_word(on).to_string(),
                None => "UNKNOWN".to_string(),
            },
        };
        self.template.render(&self.token, &value)
    }
}

/// Fallback handler rendering the home page.
pub fn home(page: HomePage) -> Handler {
    Arc::new(move |device: &mut DeviceState, _request: &Request| {
        Response::html(page.render(device))
    })
}

/// Serves a fixed page, with the actuator lit while the request is handled.
///
/// Without an actuator the page is still served.
pub fn flash_page(html: impl Into<String>) -> Handler {
    let html = html.into();

    Arc::new(move |device: &mut DeviceState, _request: &Request| {
        let lit = device.set_actuator(true).is_ok();
        let response = Response::html(html.clone());
        if lit {
            device.set_actuator(false).ok();
        }
        response
    })
}

fn state_word(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}
