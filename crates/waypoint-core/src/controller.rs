//! Navigation controller
//!
//! Owns the current location and the active view. Construction via
//! [`NavigationController::initialize`] is the mount, so an unmounted
//! controller cannot exist.

use crate::route_table::RouteTable;
use crate::view::ViewId;

/// Contract with the view rendering framework
pub trait ViewRenderer {
    /// Dropped when the next view replaces this one
    type Handle;

    fn render(&mut self, view: ViewId) -> Self::Handle;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_path: String,
    pub active_view: ViewId,
}

/// Outcome of a location change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Activated(ViewId),
    /// Same path, or a different path for the view already shown
    Unchanged,
    /// No route matched; the previous view stays active
    NotFound(String),
}

pub struct NavigationController<R: ViewRenderer> {
    table: RouteTable,
    state: NavigationState,
    renderer: R,
    mounted: R::Handle,
}

impl<R: ViewRenderer> NavigationController<R> {
    /// Resolve the initial path and render the first view
    ///
    /// An unmatched `initial_path` activates `default_view`.
    pub fn initialize(table: RouteTable, initial_path: &str, default_view: ViewId, mut renderer: R) -> Self {
        let active_view = match table.resolve(initial_path) {
            Ok(view) => view,
            Err(not_found) => {
                tracing::warn!(
                    path = %not_found.path,
                    fallback = ?default_view,
                    "initial location not routed, using default view"
                );
                default_view
            }
        };

        tracing::debug!(path = initial_path, view = ?active_view, "mounting initial view");
        let mounted = renderer.render(active_view);

        Self {
            table,
            state: NavigationState { current_path: initial_path.to_string(), active_view },
            renderer,
            mounted,
        }
    }

    pub fn on_location_change(&mut self, new_path: &str) -> Navigation {
        if new_path == self.state.current_path {
            return Navigation::Unchanged;
        }

        let view = match self.table.resolve(new_path) {
            Ok(view) => view,
            Err(not_found) => {
                tracing::warn!(
                    path = %not_found.path,
                    active = ?self.state.active_view,
                    "location not routed, keeping current view"
                );
                return Navigation::NotFound(not_found.path);
            }
        };

        self.state.current_path = new_path.to_string();
        if view == self.state.active_view {
            return Navigation::Unchanged;
        }

        tracing::debug!(path = new_path, from = ?self.state.active_view, to = ?view, "activating view");
        self.state.active_view = view;
        // Old handle is released only after the new view is in place
        let previous = std::mem::replace(&mut self.mounted, self.renderer.render(view));
        drop(previous);

        Navigation::Activated(view)
    }

    pub fn active_view(&self) -> ViewId {
        self.state.active_view
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }
}
