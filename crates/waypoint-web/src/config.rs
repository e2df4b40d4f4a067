use anyhow::{Context, Result};
use waypoint_core::RouterConfig;

// Route tables are compiled in; the `login-gate` feature picks which one
#[cfg(not(feature = "login-gate"))]
const ROUTES: &str = include_str!("../routes/open.toml");
#[cfg(feature = "login-gate")]
const ROUTES: &str = include_str!("../routes/gated.toml");

/// Name of the compiled-in route variant, shown on the settings page
pub const VARIANT: &str = if cfg!(feature = "login-gate") { "gated" } else { "open" };

pub fn router_config() -> Result<RouterConfig> {
    RouterConfig::from_toml_str(ROUTES).with_context(|| format!("Embedded `{}` route table is invalid", VARIANT))
}
