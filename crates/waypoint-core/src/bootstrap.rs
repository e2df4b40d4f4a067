//! One-time application startup against a host document

use crate::config::RouterConfig;
use crate::controller::{Navigation, NavigationController, ViewRenderer};
use crate::error::{Result, RouterError};
use crate::location::{fragment_to_path, path_to_fragment};
use crate::route_table::RouteTable;
use crate::view::ViewId;

/// The environment the application runs in (a browser window in production)
pub trait Host {
    type Renderer: ViewRenderer;

    /// Mount the application shell into the element with this id
    ///
    /// Returns `None` when the document has no such element.
    fn attach(&self, element_id: &str, table: &RouteTable) -> Option<Self::Renderer>;

    /// Current raw fragment, e.g. `#/settings`
    fn location(&self) -> String;

    /// Set the fragment, adding a history entry
    fn push_location(&self, fragment: &str) -> Result<()>;

    /// Set the fragment in place, without adding a history entry
    fn replace_location(&self, fragment: &str) -> Result<()>;
}

/// A started application: owns the route table (through the controller) and the host
pub struct Application<H: Host> {
    host: H,
    controller: NavigationController<H::Renderer>,
}

/// Build the route table, attach to `root_element_id`, and mount the view for
/// the host's current location
///
/// `root_element_id` may be given with or without a leading `#`.
pub fn start<H: Host>(config: &RouterConfig, root_element_id: &str, host: H) -> Result<Application<H>> {
    let table = config.build_table()?;

    let element_id = root_element_id.strip_prefix('#').unwrap_or(root_element_id);
    let renderer = host.attach(element_id, &table).ok_or_else(|| RouterError::Mount {
        element_id: element_id.to_string(),
    })?;

    let initial_path = fragment_to_path(&host.location());
    let controller = NavigationController::initialize(table, &initial_path, config.default_view, renderer);

    tracing::info!(
        element_id,
        routes = controller.table().len(),
        path = %initial_path,
        view = ?controller.active_view(),
        "application started"
    );

    Ok(Application { host, controller })
}

impl<H: Host> Application<H> {
    /// Handle a raw fragment reported by the host
    pub fn on_location_change(&mut self, raw_fragment: &str) -> Navigation {
        self.controller.on_location_change(&fragment_to_path(raw_fragment))
    }

    /// Navigate to `path` and record it in the host's history
    ///
    /// An unregistered path, or a host that fails to record the entry, leaves
    /// both the history and the active view untouched.
    pub fn navigate(&mut self, path: &str) -> Result<Navigation> {
        self.controller.table().resolve(path)?;

        self.host.push_location(&path_to_fragment(path))?;
        Ok(self.controller.on_location_change(path))
    }

    /// Write the current path back as the fragment when the page was loaded
    /// without one
    ///
    /// Replaces the history entry instead of pushing, so Back still leaves the
    /// page. Returns whether the location was rewritten.
    pub fn normalize_location(&self) -> Result<bool> {
        if !self.host.location().is_empty() {
            return Ok(false);
        }

        self.host.replace_location(&path_to_fragment(self.current_path()))?;
        Ok(true)
    }

    pub fn active_view(&self) -> ViewId {
        self.controller.active_view()
    }

    pub fn current_path(&self) -> &str {
        &self.controller.state().current_path
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::tests::RecordingRenderer;
    use crate::error::NotFound;
    use crate::route_table::RouteEntry;
    use std::cell::RefCell;

    /// In-memory document with a fixed set of element ids
    struct FakeHost {
        elements: Vec<&'static str>,
        fragment: RefCell<String>,
        pushed: RefCell<Vec<String>>,
        replaced: RefCell<Vec<String>>,
        /// Reject every history write, like a browser refusing the update
        fail_writes: bool,
        renderer: RecordingRenderer,
    }

    impl FakeHost {
        fn new(fragment: &str) -> Self {
            Self {
                elements: vec!["app"],
                fragment: RefCell::new(fragment.to_string()),
                pushed: RefCell::new(Vec::new()),
                replaced: RefCell::new(Vec::new()),
                fail_writes: false,
                renderer: RecordingRenderer::default(),
            }
        }

        fn failing(fragment: &str) -> Self {
            Self { fail_writes: true, ..Self::new(fragment) }
        }

        fn write(&self, fragment: &str, log: &RefCell<Vec<String>>) -> Result<()> {
            if self.fail_writes {
                return Err(RouterError::History {
                    fragment: fragment.to_string(),
                    reason: "write rejected".to_string(),
                });
            }
            *self.fragment.borrow_mut() = fragment.to_string();
            log.borrow_mut().push(fragment.to_string());
            Ok(())
        }
    }

    impl Host for FakeHost {
        type Renderer = RecordingRenderer;

        fn attach(&self, element_id: &str, _table: &RouteTable) -> Option<RecordingRenderer> {
            self.elements.iter().any(|id| *id == element_id).then(|| self.renderer.clone())
        }

        fn location(&self) -> String {
            self.fragment.borrow().clone()
        }

        fn push_location(&self, fragment: &str) -> Result<()> {
            self.write(fragment, &self.pushed)
        }

        fn replace_location(&self, fragment: &str) -> Result<()> {
            self.write(fragment, &self.replaced)
        }
    }

    fn open_config() -> RouterConfig {
        RouterConfig::new(
            vec![
                RouteEntry::new("/", ViewId::Dashboard),
                RouteEntry::new("/settings", ViewId::Settings),
            ],
            ViewId::Dashboard,
        )
    }

    fn gated_config() -> RouterConfig {
        RouterConfig::new(
            vec![
                RouteEntry::new("/", ViewId::LogIn),
                RouteEntry::new("/dashboard", ViewId::Dashboard),
                RouteEntry::new("/settings", ViewId::Settings),
            ],
            ViewId::LogIn,
        )
    }

    #[test]
    fn test_start_with_empty_routes_fails() {
        let config = RouterConfig::new(vec![], ViewId::Dashboard);
        let result = start(&config, "#app", FakeHost::new(""));
        assert!(matches!(result, Err(RouterError::Configuration(_))));
    }

    #[test]
    fn test_start_with_missing_element_fails() {
        let result = start(&open_config(), "#nonexistent", FakeHost::new(""));
        match result {
            Err(RouterError::Mount { element_id }) => assert_eq!(element_id, "nonexistent"),
            Err(other) => panic!("expected mount error, got {other:?}"),
            Ok(_) => panic!("expected mount error"),
        }
    }

    #[test]
    fn test_start_accepts_id_with_or_without_hash() {
        assert!(start(&open_config(), "#app", FakeHost::new("")).is_ok());
        assert!(start(&open_config(), "app", FakeHost::new("")).is_ok());
    }

    #[test]
    fn test_start_mounts_view_for_current_fragment() {
        let host = FakeHost::new("#/settings");
        let renderer = host.renderer.clone();
        let app = start(&open_config(), "#app", host).unwrap();

        assert_eq!(app.active_view(), ViewId::Settings);
        assert_eq!(app.current_path(), "/settings");
        assert_eq!(renderer.mounts(), vec![ViewId::Settings]);
    }

    #[test]
    fn test_gated_start_on_empty_fragment_shows_login() {
        let app = start(&gated_config(), "#app", FakeHost::new("")).unwrap();
        assert_eq!(app.active_view(), ViewId::LogIn);
    }

    #[test]
    fn test_unrouted_fragment_falls_back_to_default() {
        let app = start(&gated_config(), "#app", FakeHost::new("#/admin")).unwrap();
        assert_eq!(app.active_view(), ViewId::LogIn);
    }

    #[test]
    fn test_fragment_changes_drive_navigation() {
        let mut app = start(&gated_config(), "#app", FakeHost::new("#/")).unwrap();

        assert_eq!(app.on_location_change("#/dashboard"), Navigation::Activated(ViewId::Dashboard));
        assert_eq!(app.on_location_change("#/dashboard"), Navigation::Unchanged);
        assert_eq!(app.on_location_change("#/gone"), Navigation::NotFound("/gone".to_string()));
        assert_eq!(app.active_view(), ViewId::Dashboard);
    }

    #[test]
    fn test_navigate_pushes_history_and_activates() {
        let mut app = start(&open_config(), "#app", FakeHost::new("")).unwrap();

        assert_eq!(app.navigate("/settings"), Ok(Navigation::Activated(ViewId::Settings)));
        assert_eq!(*app.host().pushed.borrow(), vec!["#/settings".to_string()]);

        // The browser echoes the push back as a hashchange
        let echoed = app.host().location();
        assert_eq!(app.on_location_change(&echoed), Navigation::Unchanged);
        assert_eq!(app.active_view(), ViewId::Settings);
    }

    #[test]
    fn test_navigate_to_unknown_path_leaves_history_alone() {
        let mut app = start(&open_config(), "#app", FakeHost::new("")).unwrap();

        let err = app.navigate("/dashboard").unwrap_err();
        assert_eq!(err, RouterError::NotFound(NotFound { path: "/dashboard".to_string() }));
        assert!(app.host().pushed.borrow().is_empty());
        assert_eq!(app.active_view(), ViewId::Dashboard);
    }

    #[test]
    fn test_failed_push_keeps_state_and_location_in_sync() {
        let mut app = start(&open_config(), "#app", FakeHost::failing("#/")).unwrap();

        let err = app.navigate("/settings").unwrap_err();
        assert!(matches!(err, RouterError::History { .. }));
        assert_eq!(app.active_view(), ViewId::Dashboard);
        assert_eq!(app.current_path(), "/");
        assert_eq!(app.host().location(), "#/");
    }

    #[test]
    fn test_bare_load_fragment_is_replaced_not_pushed() {
        let app = start(&open_config(), "#app", FakeHost::new("")).unwrap();

        assert_eq!(app.normalize_location(), Ok(true));
        assert_eq!(*app.host().replaced.borrow(), vec!["#/".to_string()]);
        assert!(app.host().pushed.borrow().is_empty());
        assert_eq!(app.host().location(), "#/");
    }

    #[test]
    fn test_existing_fragment_not_rewritten() {
        let app = start(&gated_config(), "#app", FakeHost::new("#/admin")).unwrap();

        assert_eq!(app.normalize_location(), Ok(false));
        assert!(app.host().replaced.borrow().is_empty());
        assert!(app.host().pushed.borrow().is_empty());
    }

    #[test]
    fn test_failed_replace_is_reported() {
        let app = start(&open_config(), "#app", FakeHost::failing("")).unwrap();

        assert!(matches!(app.normalize_location(), Err(RouterError::History { .. })));
        assert_eq!(app.host().location(), "");
    }
}
