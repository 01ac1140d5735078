//! Turns a [`Config`] into the device model and route table for one profile.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::assets::{AssetSource, DirAssets, Template, TemplateSource};
use crate::config::{Config, Profile, ToggleReplyMode};
use crate::device::sim::{SimulatedAtmosphere, SimulatedLed};
use crate::device::{DeviceState, SensorKind};
use crate::http::response::Framing;
use crate::router::handlers;
use crate::router::{Fill, HomePage, RouteTable, ToggleReply};

pub const LED_PLACEHOLDER: &str = "**ledState**";
pub const READING_PLACEHOLDER: &str = "**READING**";
pub const DEFAULT_PROMPT: &str = "Please select an option to begin";

pub const HELLO_PAGE: &str = "<!DOCTYPE html>
<html>
    <head> <title>Pico W</title> </head>
    <body> <h1>Pico W says Hello</h1>
        <p>Greetings to the World Wide Web.</p>
    </body>
</html>
";

/// Builds the simulated device and the routes for the configured profile,
/// reading templates and assets from `assets.root`.
pub fn assemble(cfg: &Config) -> anyhow::Result<(DeviceState, RouteTable)> {
    let source = Arc::new(DirAssets::new(&cfg.assets.root));

    match cfg.device.profile {
        Profile::Led => {
            let device = DeviceState::actuator(SimulatedLed::new());
            Ok((device, led_routes(cfg, source)?))
        }
        Profile::Atmo => {
            let device = DeviceState::sensor(SimulatedAtmosphere::new(cfg.device.readings))
                .context("Failed to initialise atmospheric sensor")?;
            Ok((device, atmo_routes(cfg, source)?))
        }
        Profile::Hello => {
            let device = DeviceState::actuator(SimulatedLed::new());
            Ok((device, hello_routes()))
        }
    }
}

/// `/ledon`, `/ledoff`, the favicon, and a home page showing the LED state.
pub fn led_routes<S>(cfg: &Config, source: Arc<S>) -> anyhow::Result<RouteTable>
where
    S: AssetSource + TemplateSource + 'static,
{
    let token = cfg
        .assets
        .placeholder
        .clone()
        .unwrap_or_else(|| LED_PLACEHOLDER.to_string());
    let page = HomePage::new(load_index(cfg, source.as_ref())?, token, Fill::ActuatorState);

    let (reply, reply_framing) = match cfg.device.toggle_reply {
        ToggleReplyMode::Confirmation => (
            ToggleReply::Confirmation {
                label: cfg.device.label.clone(),
            },
            Framing::Raw,
        ),
        ToggleReplyMode::Page => (ToggleReply::Page(page.clone()), cfg.assets.home_framing),
    };

    let routes = RouteTable::new(handlers::home(page), cfg.assets.home_framing)
        .route("/ledon", reply_framing, handlers::toggle(true, reply.clone()))
        .route("/ledoff", reply_framing, handlers::toggle(false, reply));

    Ok(with_favicon(routes, cfg, source))
}

/// One route per reading, the favicon, and a home page with a prompt.
pub fn atmo_routes<S>(cfg: &Config, source: Arc<S>) -> anyhow::Result<RouteTable>
where
    S: AssetSource + TemplateSource + 'static,
{
    let token = cfg
        .assets
        .placeholder
        .clone()
        .unwrap_or_else(|| READING_PLACEHOLDER.to_string());
    let prompt = cfg
        .assets
        .prompt
        .clone()
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());
    let page = HomePage::new(load_index(cfg, source.as_ref())?, token, Fill::Static(prompt));

    let routes = RouteTable::new(handlers::home(page), cfg.assets.home_framing)
        .route("/temp", Framing::Raw, handlers::read_sensor(SensorKind::Temperature))
        .route("/press", Framing::Raw, handlers::read_sensor(SensorKind::Pressure))
        .route("/humid", Framing::Raw, handlers::read_sensor(SensorKind::Humidity))
        .aliases(
            &["/alt", "/alti"],
            Framing::Raw,
            handlers::read_sensor(SensorKind::Altitude),
        );

    Ok(with_favicon(routes, cfg, source))
}

/// Greeting page on every path, flashing the LED as an activity light.
pub fn hello_routes() -> RouteTable {
    RouteTable::new(handlers::flash_page(HELLO_PAGE), Framing::StatusLine)
}

fn load_index(cfg: &Config, templates: &dyn TemplateSource) -> anyhow::Result<Template> {
    let template = templates
        .load(&cfg.assets.index)
        .with_context(|| format!("Failed to load home page template {}", cfg.assets.index))?;
    info!(template = template.name(), "Loaded home page template");
    Ok(template)
}

fn with_favicon<S>(routes: RouteTable, cfg: &Config, source: Arc<S>) -> RouteTable
where
    S: AssetSource + 'static,
{
    match &cfg.assets.favicon {
        Some(name) => routes.route(
            "/favicon.ico",
            Framing::StatusLine,
            handlers::asset(
                source,
                name.as_str(),
                cfg.assets.favicon_type.as_str(),
                cfg.server.chunk_size,
            ),
        ),
        None => routes,
    }
}
