use std::io;
use std::net::SocketAddr;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// One accepted client connection.
///
/// The server reads from it once, writes the response and closes it. It is
/// never reused for a second request.
#[async_trait]
pub trait Connection: Send {
    /// Remote address for logging.
    fn peer(&self) -> String;

    /// A single read of at most `max_bytes`. An empty result means the peer
    /// sent nothing before closing its side.
    async fn receive(&mut self, max_bytes: usize) -> io::Result<Bytes>;

    /// Writes a whole buffer.
    async fn send(&mut self, data: &[u8]) -> io::Result<()>;

    /// Writes one piece of a streamed body. May be called repeatedly.
    async fn send_chunk(&mut self, data: &[u8]) -> io::Result<()>;

    /// Shuts the connection down.
    async fn close(&mut self) -> io::Result<()>;
}

/// [`Connection`] over a tokio TCP stream.
pub struct TcpConnection {
    stream: TcpStream,
    peer: SocketAddr,
}

impl TcpConnection {
    pub fn new(stream: TcpStream, peer: SocketAddr) -> Self {
        Self { stream, peer }
    }
}

#[async_trait]
impl Connection for TcpConnection {
    fn peer(&self) -> String {
        self.peer.to_string()
    }

    async fn receive(&mut self, max_bytes: usize) -> io::Result<Bytes> {
        let mut buf = vec![0u8; max_bytes];
        let n = self.stream.read(&mut buf).await?;
        buf.truncate(n);
        Ok(Bytes::from(buf))
    }

    async fn send(&mut self, data: &[u8]) -> io::Result<()> {
        self.stream.write_all(data).await
    }

    async fn send_chunk(&mut self, data: &[u8]) -> io::Result<()> {
        self.stream.write_all(data).await
    }

    async fn close(&mut self) -> io::Result<()> {
        self.stream.shutdown().await
    }
}
