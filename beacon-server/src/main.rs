use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use beacon_core::CHAT_HISTORY_LIMIT;
use beacon_server::{Relay, RelayConfig, app};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// WebRTC signaling relay. Peers meet here to trade session descriptions
/// and ICE candidates before talking to each other directly.
#[derive(Parser)]
#[command(name = "beacon-server", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:3000")]
    listen: SocketAddr,

    /// Seconds between heartbeat probe cycles.
    #[arg(long, default_value_t = 30)]
    heartbeat_secs: u64,

    /// Host the public chat room with its rolling history.
    #[arg(long)]
    chat: bool,

    /// Cap on the public chat history.
    #[arg(long, default_value_t = CHAT_HISTORY_LIMIT)]
    chat_history_limit: usize,

    /// Do not answer presence-check queries.
    #[arg(long)]
    no_presence: bool,

    /// Do not answer list-peers queries.
    #[arg(long)]
    no_peer_list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = RelayConfig {
        heartbeat_interval: Duration::from_secs(args.heartbeat_secs),
        presence: !args.no_presence,
        peer_list: !args.no_peer_list,
        chat: args.chat,
        chat_history_limit: args.chat_history_limit,
    };

    let (relay, handle) = Relay::new(config);
    let relay_task = tokio::spawn(relay.run());

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("Failed to bind {}", args.listen))?;
    info!("Signaling relay listening on http://{}", args.listen);

    tokio::select! {
        res = axum::serve(listener, app(handle.clone())).into_future() => {
            res.context("Server error")?;
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    handle.shutdown().await;
    relay_task.await.context("Relay task panicked")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
