/// HTTP request method.
///
/// Every request is answered as if it were a GET, so that is the only method
/// told apart. Anything else is carried verbatim for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    Other(String),
}

impl From<&str> for Method {
    /// Matching is case-sensitive.
    ///
    /// ```
    /// # use pico_control::http::request::Method;
    /// assert_eq!(Method::from("GET"), Method::GET);
    /// assert_eq!(Method::from("get"), Method::Other("get".to_string()));
    /// ```
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            other => Method::Other(other.to_string()),
        }
    }
}

impl Method {
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::Other(s) => s,
        }
    }
}

/// A parsed request line.
///
/// Headers and body are never read, so the request is just the method and
/// the path. `path` always starts with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// e.g. `/temp`
    pub path: String,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Shorthand for a GET request, mostly useful when calling handlers directly.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }
}
