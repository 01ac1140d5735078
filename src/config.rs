use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::assets::DEFAULT_CHUNK_SIZE;
use crate::device::sim::Readings;
use crate::http::response::Framing;
use crate::server::control::DEFAULT_RECV_BUFFER;

/// Which peripheral the server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// On-board LED with `/ledon` and `/ledoff`
    #[default]
    Led,
    /// Atmospheric sensor with `/temp`, `/press`, `/humid`, `/alt`
    Atmo,
    /// Greeting page on every path, LED flashed per request
    Hello,
}

/// Reply style for `/ledon` and `/ledoff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleReplyMode {
    /// Short `The LED is ON` text
    #[default]
    Confirmation,
    /// Full home page showing the new state
    Page,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub recv_buffer: usize,
    pub chunk_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:80".to_string(),
            recv_buffer: DEFAULT_RECV_BUFFER,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub profile: Profile,
    /// Name used in toggle confirmations
    pub label: String,
    pub toggle_reply: ToggleReplyMode,
    /// Values reported by the simulated sensor
    pub readings: Readings,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            label: "LED".to_string(),
            toggle_reply: ToggleReplyMode::default(),
            readings: Readings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding templates and assets
    pub root: PathBuf,
    /// Home page template
    pub index: String,
    /// Icon served at `/favicon.ico`; no route when unset
    pub favicon: Option<String>,
    pub favicon_type: String,
    /// Token replaced in the home page; profile default when unset
    pub placeholder: Option<String>,
    /// Text substituted by the sensor profile; profile default when unset
    pub prompt: Option<String>,
    pub home_framing: Framing,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            index: "index.html".to_string(),
            favicon: Some("icon.png".to_string()),
            favicon_type: "image/png".to_string(),
            placeholder: None,
            prompt: None,
            home_framing: Framing::Raw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub device: DeviceConfig,
    pub assets: AssetConfig,
}

impl Config {
    /// Loads the YAML file named by `CONFIG`, or defaults when unset.
    /// `LISTEN` overrides the listen address either way.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        let cfg = serde_yaml::from_str(text)?;
        Ok(cfg)
    }
}
