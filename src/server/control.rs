use std::io;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::device::DeviceState;
use crate::http::connection::Connection;
use crate::http::parser::{ParseOutcome, parse_request};
use crate::http::request::Request;
use crate::http::response::StatusCode;
use crate::http::writer::ResponseWriter;
use crate::router::RouteTable;
use crate::server::listener::NetworkListener;

/// Size of the single read taken from each client
pub const DEFAULT_RECV_BUFFER: usize = 1024;

const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// How one connection ended.
#[derive(Debug)]
pub enum ServeOutcome {
    /// A response was written in full
    Responded {
        path: String,
        status: StatusCode,
        bytes: usize,
    },
    /// Client sent nothing usable; closed without a reply
    EmptyRequest,
    /// Client sent bytes that were not a request line; closed without a reply
    Malformed,
    /// Read or write failed (reset, broken pipe)
    TransportFailure(io::Error),
}

enum ServeState {
    Reading,
    Processing(Request),
    Writing(Request, StatusCode, ResponseWriter),
    Closing(ServeOutcome),
}

/// Sequential HTTP control server.
///
/// Owns the listener, the device model and the route table. Connections are
/// served one at a time, start to finish, so handlers get exclusive access
/// to the device without any locking.
pub struct ControlServer<L> {
    listener: L,
    device: DeviceState,
    routes: RouteTable,
    recv_buffer: usize,
}

impl<L> ControlServer<L> {
    pub fn new(listener: L, device: DeviceState, routes: RouteTable) -> Self {
        Self {
            listener,
            device,
            routes,
            recv_buffer: DEFAULT_RECV_BUFFER,
        }
    }

    pub fn with_recv_buffer(mut self, recv_buffer: usize) -> Self {
        self.recv_buffer = recv_buffer.max(1);
        self
    }

    pub fn device(&self) -> &DeviceState {
        &self.device
    }

    /// Serves one connection and closes it.
    ///
    /// The connection is closed exactly once whichever way the exchange ends.
    /// Nothing that goes wrong here is returned as an error; the outcome says
    /// what happened.
    pub async fn serve<C>(&mut self, conn: &mut C) -> ServeOutcome
    where
        C: Connection + ?Sized,
    {
        let peer = conn.peer();
        let mut state = ServeState::Reading;

        loop {
            state = match state {
                ServeState::Reading => match conn.receive(self.recv_buffer).await {
                    Ok(raw) => match parse_request(&raw) {
                        ParseOutcome::Request(request) => ServeState::Processing(request),
                        ParseOutcome::Empty => ServeState::Closing(ServeOutcome::EmptyRequest),
                        ParseOutcome::Malformed => ServeState::Closing(ServeOutcome::Malformed),
                    },
                    Err(e) => ServeState::Closing(ServeOutcome::TransportFailure(e)),
                },

                ServeState::Processing(request) => {
                    let route = self.routes.dispatch(&request.path);
                    debug!(
                        peer = %peer,
                        method = request.method.as_str(),
                        path = %request.path,
                        fallback = route.is_fallback(),
                        "Dispatching request"
                    );

                    let response = route.handle(&mut self.device, &request);
                    let status = response.status;
                    let writer = ResponseWriter::new(response, route.framing());
                    ServeState::Writing(request, status, writer)
                }

                ServeState::Writing(request, status, writer) => {
                    match writer.write_to(conn).await {
                        Ok(bytes) => ServeState::Closing(ServeOutcome::Responded {
                            path: request.path,
                            status,
                            bytes,
                        }),
                        Err(e) => ServeState::Closing(ServeOutcome::TransportFailure(e)),
                    }
                }

                ServeState::Closing(outcome) => {
                    if let Err(e) = conn.close().await {
                        debug!(peer = %peer, error = %e, "Error while closing connection");
                    }
                    log_outcome(&peer, &outcome);
                    return outcome;
                }
            };
        }
    }
}

impl<L: NetworkListener> ControlServer<L> {
    /// Accepts and serves connections until the process stops.
    ///
    /// No per-connection failure ends the loop. A failed `accept` is logged
    /// and retried after a short pause.
    pub async fn run(mut self) {
        loop {
            let mut conn = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!(error = %e, "Accept failed");
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };

            info!("Accepted connection from {}", conn.peer());
            self.serve(&mut conn).await;
        }
    }
}

fn log_outcome(peer: &str, outcome: &ServeOutcome) {
    match outcome {
        ServeOutcome::Responded {
            path,
            status,
            bytes,
        } => {
            info!(
                peer = %peer,
                path = %path,
                status = status.as_u16(),
                bytes = *bytes,
                "Request served"
            );
        }
        ServeOutcome::EmptyRequest => {
            debug!(peer = %peer, "Empty request, closing");
        }
        ServeOutcome::Malformed => {
            warn!(peer = %peer, "Malformed request, closing");
        }
        ServeOutcome::TransportFailure(e) => {
            warn!(peer = %peer, error = %e, "Connection closed");
        }
    }
}
