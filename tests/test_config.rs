use std::path::PathBuf;

use pico_control::config::{Config, Profile, ToggleReplyMode};
use pico_control::http::response::Framing;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.listen_addr, "0.0.0.0:80");
    assert_eq!(cfg.server.recv_buffer, 1024);
    assert_eq!(cfg.server.chunk_size, 1024);
    assert_eq!(cfg.device.profile, Profile::Led);
    assert_eq!(cfg.device.label, "LED");
    assert_eq!(cfg.device.toggle_reply, ToggleReplyMode::Confirmation);
    assert_eq!(cfg.assets.index, "index.html");
    assert_eq!(cfg.assets.favicon.as_deref(), Some("icon.png"));
    assert_eq!(cfg.assets.home_framing, Framing::Raw);
}

#[test]
fn test_config_from_yaml_partial() {
    let cfg = Config::from_yaml(
        r#"
device:
  profile: atmo
  readings:
    temperature: 23.456
"#,
    )
    .unwrap();

    assert_eq!(cfg.device.profile, Profile::Atmo);
    assert_eq!(cfg.device.readings.temperature, 23.456);
    // Untouched fields keep their defaults
    assert_eq!(cfg.device.readings.pressure, 101_325.0);
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:80");
}

#[test]
fn test_config_from_yaml_full() {
    let cfg = Config::from_yaml(
        r#"
server:
  listen_addr: "127.0.0.1:8080"
  recv_buffer: 512
  chunk_size: 256
device:
  profile: led
  label: Lamp
  toggle_reply: page
assets:
  root: /srv/pico
  index: led.html
  favicon: led.png
  placeholder: "{{state}}"
  home_framing: status_line
"#,
    )
    .unwrap();

    assert_eq!(cfg.server.listen_addr, "127.0.0.1:8080");
    assert_eq!(cfg.server.recv_buffer, 512);
    assert_eq!(cfg.server.chunk_size, 256);
    assert_eq!(cfg.device.label, "Lamp");
    assert_eq!(cfg.device.toggle_reply, ToggleReplyMode::Page);
    assert_eq!(cfg.assets.root, PathBuf::from("/srv/pico"));
    assert_eq!(cfg.assets.index, "led.html");
    assert_eq!(cfg.assets.favicon.as_deref(), Some("led.png"));
    assert_eq!(cfg.assets.placeholder.as_deref(), Some("{{state}}"));
    assert_eq!(cfg.assets.home_framing, Framing::StatusLine);
}

#[test]
fn test_config_without_favicon() {
    let cfg = Config::from_yaml("assets:\n  favicon: null\n").unwrap();
    assert!(cfg.assets.favicon.is_none());
}

#[test]
fn test_config_rejects_unknown_profile() {
    assert!(Config::from_yaml("device:\n  profile: toaster\n").is_err());
}

#[test]
fn test_config_missing_file_is_error() {
    let err = Config::from_file("/nonexistent/pico-control.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_config_listen_override_from_env() {
    unsafe {
        std::env::remove_var("CONFIG");
        std::env::set_var("LISTEN", "0.0.0.0:3000");
    }
    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1, cfg2);
}
