use std::fmt;
use std::sync::Arc;

use crate::device::DeviceState;
use crate::http::request::Request;
use crate::http::response::{Framing, Response};

/// A request handler. Always produces a response; failures are reported in
/// the body rather than returned.
pub type Handler = Arc<dyn Fn(&mut DeviceState, &Request) -> Response + Send + Sync>;

/// A handler bound to an exact path, or the fallback when `pattern` is `None`.
#[derive(Clone)]
pub struct Route {
    pattern: Option<String>,
    framing: Framing,
    handler: Handler,
}

impl Route {
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    pub fn is_fallback(&self) -> bool {
        self.pattern.is_none()
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn handle(&self, device: &mut DeviceState, request: &Request) -> Response {
        (self.handler)(device, request)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("framing", &self.framing)
            .finish_non_exhaustive()
    }
}

/// Ordered exact-match routes plus a fallback.
///
/// Matching is case-sensitive string equality, scanned in registration
/// order. Anything that matches no route goes to the fallback.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: Route,
}

impl RouteTable {
    pub fn new(fallback: Handler, framing: Framing) -> Self {
        Self {
            routes: Vec::new(),
            fallback: Route {
                pattern: None,
                framing,
                handler: fallback,
            },
        }
    }

    /// Registers `handler` for `pattern`.
    pub fn route(mut self, pattern: impl Into<String>, framing: Framing, handler: Handler) -> Self {
        self.routes.push(Route {
            pattern: Some(pattern.into()),
            framing,
            handler,
        });
        self
    }

    /// Registers one handler under several paths.
    pub fn aliases(mut self, patterns: &[&str], framing: Framing, handler: Handler) -> Self {
        for pattern in patterns {
            self = self.route(*pattern, framing, Arc::clone(&handler));
        }
        self
    }

    pub fn dispatch(&self, path: &str) -> &Route {
        self.routes
            .iter()
            .find(|r| r.pattern.as_deref() == Some(path))
            .unwrap_or(&self.fallback)
    }

    /// Registered patterns in order, fallback excluded.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().filter_map(|r| r.pattern.as_deref())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
