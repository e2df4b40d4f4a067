//! Ordered path → view mapping with exact-match lookup

use serde::Deserialize;
use std::collections::HashSet;

use crate::error::{NotFound, Result, RouterError};
use crate::location::path_to_fragment;
use crate::view::ViewId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub view: ViewId,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, view: ViewId) -> Self {
        Self { path: path.into(), view }
    }
}

/// Immutable once built
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table from entries in match order
    ///
    /// Fails on an empty list or a malformed path. Duplicate paths are kept;
    /// lookup returns the first one.
    pub fn build(entries: Vec<RouteEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(RouterError::Configuration("route table has no entries".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            validate_path(&entry.path)?;
            if !seen.insert(entry.path.as_str()) {
                tracing::warn!(path = %entry.path, view = ?entry.view, "duplicate route path, first entry wins");
            }
        }

        Ok(Self { entries })
    }

    pub fn resolve(&self, path: &str) -> std::result::Result<ViewId, NotFound> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| entry.view)
            .ok_or_else(|| NotFound { path: path.to_string() })
    }

    /// First path registered for a view
    pub fn path_for(&self, view: ViewId) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.view == view)
            .map(|entry| entry.path.as_str())
    }

    pub fn href_for(&self, view: ViewId) -> Option<String> {
        self.path_for(view).map(path_to_fragment)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RouterError::Configuration("route path is empty".to_string()));
    }
    if !path.starts_with('/') {
        return Err(RouterError::Configuration(format!(
            "route path `{}` must start with `/`",
            path
        )));
    }
    if path.contains(['#', '?']) || path.chars().any(char::is_whitespace) {
        return Err(RouterError::Configuration(format!(
            "route path `{}` contains `#`, `?` or whitespace",
            path
        )));
    }
    Ok(())
}
