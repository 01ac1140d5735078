use std::io;

use crate::http::connection::Connection;
use crate::http::response::{Body, Framing, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_head(resp: &Response, framing: Framing) -> Vec<u8> {
    match framing {
        Framing::Raw => Vec::new(),
        Framing::StatusLine => format!(
            "{} {} {}\r\nContent-type: {}\r\n\r\n",
            HTTP_VERSION,
            resp.status.as_u16(),
            resp.status.reason_phrase(),
            resp.content_type,
        )
        .into_bytes(),
    }
}

/// Puts one response on the wire.
pub struct ResponseWriter {
    head: Vec<u8>,
    body: Body,
}

impl ResponseWriter {
    pub fn new(response: Response, framing: Framing) -> Self {
        Self {
            head: serialize_head(&response, framing),
            body: response.body,
        }
    }

    /// Writes the head and body and returns the number of bytes sent.
    ///
    /// In-memory bodies go out in a single `send`. Streamed bodies send the
    /// head first and then one `send_chunk` per chunk read.
    pub async fn write_to<C>(self, conn: &mut C) -> io::Result<usize>
    where
        C: Connection + ?Sized,
    {
        match self.body {
            Body::Full(body) => {
                let mut buf = self.head;
                buf.extend_from_slice(&body);
                if !buf.is_empty() {
                    conn.send(&buf).await?;
                }
                Ok(buf.len())
            }
            Body::Stream(mut stream) => {
                let mut written = self.head.len();
                if !self.head.is_empty() {
                    conn.send(&self.head).await?;
                }
                while let Some(chunk) = stream.next_chunk().await? {
                    conn.send_chunk(&chunk).await?;
                    written += chunk.len();
                }
                Ok(written)
            }
        }
    }
}
