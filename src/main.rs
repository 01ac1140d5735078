use anyhow::Context;
use pico_control::config::Config;
use pico_control::server::{ControlServer, TcpNetworkListener};
use pico_control::startup;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    tracing::info!(profile = ?cfg.device.profile, "Starting control server");

    let (device, routes) = startup::assemble(&cfg)?;

    let listener = TcpNetworkListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.server.listen_addr))?;

    let server = ControlServer::new(listener, device, routes)
        .with_recv_buffer(cfg.server.recv_buffer);

    tokio::select! {
        _ = server.run() => {}

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
