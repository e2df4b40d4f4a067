//! Browser implementation of the routing host
//! Reads and writes `window.location.hash` and mounts the shell with Leptos

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use waypoint_core::{Application, Host, Navigation, RouteTable, RouterError, ViewId, ViewRenderer};

use crate::app::Shell;
use crate::components::NavLinks;

pub struct BrowserHost {
    window: web_sys::Window,
}

impl BrowserHost {
    pub fn new() -> Result<Self> {
        let window = web_sys::window().context("No global `window` (not running in a browser?)")?;
        Ok(Self { window })
    }
}

/// Swaps the active page by writing the signal the shell reads
pub struct SignalRenderer {
    set_active: WriteSignal<Option<ViewId>>,
}

impl ViewRenderer for SignalRenderer {
    // The shell owns the mounted page; nothing to release here
    type Handle = ();

    fn render(&mut self, view: ViewId) {
        self.set_active.set(Some(view));
    }
}

impl Host for BrowserHost {
    type Renderer = SignalRenderer;

    fn attach(&self, element_id: &str, table: &RouteTable) -> Option<SignalRenderer> {
        let root = self
            .window
            .document()?
            .get_element_by_id(element_id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;

        let (active, set_active) = signal(None::<ViewId>);
        let links = NavLinks::from_table(table);

        // Lives until page unload
        leptos::mount::mount_to(root, move || view! { <Shell active=active links=links /> }).forget();

        Some(SignalRenderer { set_active })
    }

    fn location(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn push_location(&self, fragment: &str) -> waypoint_core::Result<()> {
        self.window
            .location()
            .set_hash(fragment)
            .map_err(|err| history_error(fragment, &err))
    }

    fn replace_location(&self, fragment: &str) -> waypoint_core::Result<()> {
        let history = self.window.history().map_err(|err| history_error(fragment, &err))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(fragment))
            .map_err(|err| history_error(fragment, &err))
    }
}

fn history_error(fragment: &str, err: &JsValue) -> RouterError {
    tracing::warn!(?err, fragment, "Failed to update location");
    RouterError::History {
        fragment: fragment.to_string(),
        reason: format!("{:?}", err),
    }
}

/// Route every `hashchange` event into the application for the rest of the page's life
pub fn listen_for_hash_changes(app: Application<BrowserHost>) -> Result<()> {
    let window = app.host().window.clone();
    let app = Rc::new(RefCell::new(app));

    let callback = Closure::wrap(Box::new(move || {
        let Ok(mut app) = app.try_borrow_mut() else {
            tracing::warn!("hashchange delivered during a navigation, dropping it");
            return;
        };

        let fragment = app.host().location();
        match app.on_location_change(&fragment) {
            Navigation::Activated(view) => tracing::debug!(%fragment, ?view, "view activated"),
            Navigation::Unchanged => {}
            Navigation::NotFound(path) => tracing::debug!(%path, "ignored unrouted location"),
        }
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("hashchange", callback.as_ref().unchecked_ref())
        .map_err(|err| anyhow!("Failed to register hashchange listener: {:?}", err))?;

    // The listener is never removed, so the closure must outlive this call
    callback.forget();

    Ok(())
}
