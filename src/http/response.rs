use bytes::Bytes;
use serde::Deserialize;

use crate::assets::AssetStream;

/// HTTP status codes the control server produces.
///
/// - `Ok` (200): request served
/// - `NotFound` (404): static asset missing
/// - `InternalServerError` (500): asset unreadable
/// - `ServiceUnavailable` (503): sensor or actuator not usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 503 Service Unavailable
    ServiceUnavailable,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use pico_control::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::ServiceUnavailable => 503,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::ServiceUnavailable => "Service Unavailable",
        }
    }
}

/// How a response is put on the wire. Chosen per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    /// Payload only, no status line or headers
    #[default]
    Raw,
    /// `HTTP/1.1 <code> <reason>`, a `Content-type` header, blank line, payload
    StatusLine,
}

/// Response payload.
pub enum Body {
    /// Whole body already in memory
    Full(Bytes),
    /// Body read lazily and written in bounded chunks
    Stream(AssetStream),
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Full(bytes) => f.debug_tuple("Full").field(bytes).finish(),
            Body::Stream(stream) => f.debug_tuple("Stream").field(&stream.name()).finish(),
        }
    }
}

/// What a handler hands back to the server.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// MIME type, only written with [`Framing::StatusLine`]
    pub content_type: String,
    /// Payload
    pub body: Body,
}

/// Builder for responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/html")
///     .body("<h1>hi</h1>")
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: String,
    body: Body,
}

impl ResponseBuilder {
    /// Creates a builder with an empty `text/plain` body.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: "text/plain".to_string(),
            body: Body::Full(Bytes::new()),
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets an in-memory body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Body::Full(body.into());
        self
    }

    /// Sets a streamed body.
    pub fn stream(mut self, stream: AssetStream) -> Self {
        self.body = Body::Stream(stream);
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK with a plain text body.
    pub fn text(body: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .body(body.into())
            .build()
    }

    /// 200 OK with an HTML body.
    pub fn html(body: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type("text/html")
            .body(body.into())
            .build()
    }

    /// Short plain text error message with the given status.
    pub fn error(status: StatusCode, message: impl std::fmt::Display) -> Self {
        ResponseBuilder::new(status)
            .body(format!("ERROR: {}", message))
            .build()
    }

    /// The in-memory body, if this is not a streamed response.
    pub fn body_bytes(&self) -> Option<&[u8]> {
        match &self.body {
            Body::Full(bytes) => Some(&bytes[..]),
            Body::Stream(_) => None,
        }
    }

    /// The in-memory body as text, lossily decoded.
    pub fn body_text(&self) -> Option<String> {
        self.body_bytes()
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}
