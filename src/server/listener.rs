use std::io;
use std::net::SocketAddr;

use async_trait::async_trait;
use tokio::net::TcpListener;
use tracing::info;

use crate::http::connection::{Connection, TcpConnection};

/// An already-bound endpoint that hands out client connections.
#[async_trait]
pub trait NetworkListener: Send {
    type Conn: Connection;

    /// Waits for the next client. No timeout.
    async fn accept(&mut self) -> io::Result<Self::Conn>;
}

/// [`NetworkListener`] over a tokio TCP listener.
pub struct TcpNetworkListener {
    listener: TcpListener,
}

impl TcpNetworkListener {
    pub async fn bind(addr: &str) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!("Listening on {}", listener.local_addr()?);
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

impl From<TcpListener> for TcpNetworkListener {
    fn from(listener: TcpListener) -> Self {
        Self { listener }
    }
}

#[async_trait]
impl NetworkListener for TcpNetworkListener {
    type Conn = TcpConnection;

    async fn accept(&mut self) -> io::Result<TcpConnection> {
        let (socket, peer) = self.listener.accept().await?;
        Ok(TcpConnection::new(socket, peer))
    }
}
