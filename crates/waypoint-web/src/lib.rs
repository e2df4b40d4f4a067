//! Browser front end: mounts the routed pages into the host document

mod app;
mod components;
mod config;
mod host;
mod pages;

use anyhow::{Context, Result};
use shared::CONFIG;

use host::BrowserHost;

/// Start routing against the current page; called once at load
pub fn run() -> Result<()> {
    let routes = config::router_config()?;
    let host = BrowserHost::new()?;

    let app = waypoint_core::start(&routes, CONFIG.root_element_id, host)
        .with_context(|| format!("Failed to start {}", CONFIG.name))?;

    // Hash history always shows a fragment, `#/` on a bare first load
    if let Err(err) = app.normalize_location() {
        tracing::debug!(%err, "initial location not written back");
    }

    host::listen_for_hash_changes(app)
}
