//! Minimal HTTP handling for the control server.
//!
//! Only the request line is read. Responses are either a bare payload or a
//! status line with a single `Content-type` header, and every connection is
//! closed after one exchange.
//!
//! # Architecture
//!
//! - **`connection`**: the `Connection` seam and its TCP implementation
//! - **`parser`**: turns the bytes of a single read into a request line
//! - **`request`**: request and method types
//! - **`response`**: status codes, framing and the response builder
//! - **`writer`**: serializes a response onto a connection, streaming assets
//!   chunk by chunk
//!
//! # Exchange
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← one read into a fixed buffer
//!        └──────┬──────┘
//!               │ request line parsed
//!               ▼         (empty / malformed ──────────┐)
//!        ┌──────────────────┐                          │
//!        │   Processing     │ ← route lookup + handler │
//!        └──────┬───────────┘                          │
//!               │ response ready                       │
//!               ▼                                      │
//!        ┌──────────────────┐                          │
//!        │    Writing       │ ← head + body / chunks   │
//!        └──────┬───────────┘                          │
//!               ▼                                      │
//!        ┌──────────────────┐                          │
//!        │    Closing       │ ◄────────────────────────┘
//!        └──────────────────┘
//! ```

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
