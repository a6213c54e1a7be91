mod backend;
mod config;
mod input;
mod render;
mod state;
mod theme;
mod ui;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{ConfigStore, CONFIG_FILE};
use crate::state::Easel;

fn main() -> Result<()> {
    // Set up logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("easel starting up");
    info!("  Esc: quit");
    info!("  F1: toggle properties panel");
    info!("  W: toggle wireframe");

    let store = ConfigStore::load(CONFIG_FILE);
    let easel = Easel::new(store);

    backend::run(easel)?;

    info!("easel shut down");
    Ok(())
}
