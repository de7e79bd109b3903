//! Atrium server - entry point.

use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atrium_config::ConfigStore;
use atrium_server::{start, DEFAULT_CONFIG_PATH};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atrium_server=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The store outlives the bootstrap; everything that needs
    // configuration reads it from this handle.
    let store = ConfigStore::new();

    let config = match start(&store, DEFAULT_CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            let e = anyhow::Error::new(e);
            error!("failed to start server: {e:#}");
            std::process::exit(1);
        }
    };

    println!("port: {}", config.port);
    println!("webRoot: {}", config.web_root);
}
