use std::sync::Arc;

use pico_control::device::DeviceState;
use pico_control::http::request::Request;
use pico_control::http::response::{Framing, Response};
use pico_control::router::{Handler, RouteTable};

fn reply(text: &'static str) -> Handler {
    Arc::new(move |_device: &mut DeviceState, _request: &Request| Response::text(text))
}

fn table() -> RouteTable {
    RouteTable::new(reply("home"), Framing::Raw)
        .route("/temp", Framing::Raw, reply("temp"))
        .route("/ledon", Framing::Raw, reply("on"))
        .route("/favicon.ico", Framing::StatusLine, reply("icon"))
}

fn body_of(table: &RouteTable, path: &str) -> String {
    let mut device = DeviceState::passive();
    table
        .dispatch(path)
        .handle(&mut device, &Request::get(path))
        .body_text()
        .unwrap()
}

#[test]
fn test_dispatch_registered_paths() {
    let table = table();

    for (path, expected) in [("/temp", "temp"), ("/ledon", "on"), ("/favicon.ico", "icon")] {
        let route = table.dispatch(path);
        assert_eq!(route.pattern(), Some(path));
        assert!(!route.is_fallback());
        assert_eq!(body_of(&table, path), expected);
    }
}

#[test]
fn test_dispatch_unregistered_paths_hit_fallback() {
    let table = table();

    for path in ["/", "/xyz", "", "/temp/", "/tempx"] {
        let route = table.dispatch(path);
        assert!(route.is_fallback(), "{path:?} should fall back");
        assert_eq!(route.pattern(), None);
        assert_eq!(body_of(&table, path), "home");
    }
}

#[test]
fn test_dispatch_is_case_sensitive() {
    let table = table();
    assert!(table.dispatch("/TEMP").is_fallback());
    assert!(table.dispatch("/LedOn").is_fallback());
}

#[test]
fn test_dispatch_returns_registered_handler() {
    let temp = reply("temp");
    let table = RouteTable::new(reply("home"), Framing::Raw).route("/temp", Framing::Raw, temp.clone());

    assert!(Arc::ptr_eq(table.dispatch("/temp").handler(), &temp));
    assert!(!Arc::ptr_eq(table.dispatch("/other").handler(), &temp));
}

#[test]
fn test_first_registration_wins() {
    let table = RouteTable::new(reply("home"), Framing::Raw)
        .route("/temp", Framing::Raw, reply("first"))
        .route("/temp", Framing::Raw, reply("second"));

    assert_eq!(body_of(&table, "/temp"), "first");
}

#[test]
fn test_route_framing_is_per_route() {
    let table = table();

    assert_eq!(table.dispatch("/favicon.ico").framing(), Framing::StatusLine);
    assert_eq!(table.dispatch("/temp").framing(), Framing::Raw);
    assert_eq!(table.dispatch("/nope").framing(), Framing::Raw);
}

#[test]
fn test_aliases_share_one_handler() {
    let alt = reply("alt");
    let table = RouteTable::new(reply("home"), Framing::Raw).aliases(
        &["/alt", "/alti"],
        Framing::Raw,
        alt.clone(),
    );

    assert_eq!(table.len(), 2);
    assert!(Arc::ptr_eq(table.dispatch("/alt").handler(), &alt));
    assert!(Arc::ptr_eq(table.dispatch("/alti").handler(), &alt));
}

#[test]
fn test_patterns_in_registration_order() {
    let table = table();
    let patterns: Vec<&str> = table.patterns().collect();

    assert_eq!(patterns, vec!["/temp", "/ledon", "/favicon.ico"]);
    assert!(!table.is_empty());
}
