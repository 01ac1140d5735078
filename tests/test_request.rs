use pico_control::http::request::{Method, Request};

#[test]
fn test_request_get_shorthand() {
    let req = Request::get("/ledon");

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/ledon");
}

#[test]
fn test_method_from_str_is_case_sensitive() {
    assert_eq!(Method::from("GET"), Method::GET);
    assert_eq!(Method::from("get"), Method::Other("get".to_string()));
}

#[test]
fn test_method_other_round_trips_text() {
    let method = Method::from("PROPFIND");
    assert_eq!(method.as_str(), "PROPFIND");
}

#[test]
fn test_request_clone_and_eq() {
    let req = Request::new(Method::Other("HEAD".to_string()), "/favicon.ico");
    let copy = req.clone();

    assert_eq!(req, copy);
    assert_ne!(req, Request::get("/favicon.ico"));
}
