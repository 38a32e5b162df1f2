//! Tower of Hanoi Visualization Server
//!
//! Serve the visualizer page and its WebSocket stream.

use std::env;

use hanoi_vis::{VisConfig, VisServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hanoi_vis=info,hanoi_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = VisConfig::from_env()?;

    // Optional port argument overrides the configured one
    if let Some(arg) = env::args().nth(1) {
        let port: u16 = arg
            .parse()
            .map_err(|e| format!("invalid port {arg:?}: {e}"))?;
        config = config.with_port(port);
    }

    println!("Tower of Hanoi Visualizer");
    println!("=========================");
    println!();
    println!("Initial tower: {} disks", config.default_disks);
    println!("Open http://localhost:{} in a browser.", config.addr.port());
    println!();

    VisServer::new(config).serve().await?;

    Ok(())
}
