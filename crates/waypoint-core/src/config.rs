//! Route configuration loaded from TOML
//!
//! ```toml
//! default_view = "dashboard"
//!
//! [[routes]]
//! path = "/"
//! view = "dashboard"
//! ```

use serde::Deserialize;

use crate::error::{Result, RouterError};
use crate::route_table::{RouteEntry, RouteTable};
use crate::view::ViewId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouterConfig {
    /// View shown when the initial location matches no route
    pub default_view: ViewId,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl RouterConfig {
    pub fn new(routes: Vec<RouteEntry>, default_view: ViewId) -> Self {
        Self { default_view, routes }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RouterError::Configuration(format!("failed to parse routes: {}", e)))
    }

    pub fn build_table(&self) -> Result<RouteTable> {
        RouteTable::build(self.routes.clone())
    }
}
