//! View registry
//!
//! The core never looks inside a view. It only passes these identifiers to the
//! renderer, which owns the actual components.

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Dashboard,
    Settings,
    LogIn,
}

impl ViewId {
    /// Human-readable label, used for link text and page titles
    pub fn label(self) -> &'static str {
        match self {
            ViewId::Dashboard => "Dashboard",
            ViewId::Settings => "Settings",
            ViewId::LogIn => "Log in",
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
