use std::sync::Arc;

use leptos::prelude::*;
use waypoint_core::{RouteTable, ViewId};

/// Fragment href for each routed view, in route order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLinks(Arc<[(ViewId, String)]>);

impl NavLinks {
    pub fn from_table(table: &RouteTable) -> Self {
        let mut links: Vec<(ViewId, String)> = Vec::new();
        for entry in table.entries() {
            if links.iter().any(|(view, _)| *view == entry.view) {
                continue;
            }
            if let Some(href) = table.href_for(entry.view) {
                links.push((entry.view, href));
            }
        }
        Self(links.into())
    }

    pub fn href_for(&self, view: ViewId) -> Option<&str> {
        self.0.iter().find(|(v, _)| *v == view).map(|(_, href)| href.as_str())
    }

    pub fn views(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.0.iter().map(|(view, _)| *view)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewId, &str)> + '_ {
        self.0.iter().map(|(view, href)| (*view, href.as_str()))
    }
}

/// Provided by the shell to every page
#[derive(Clone)]
pub struct NavContext {
    pub active: ReadSignal<Option<ViewId>>,
    pub links: NavLinks,
}

/// Link to a routed view; renders nothing if the view has no route
#[component]
pub fn NavLink(target: ViewId, #[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let nav = expect_context::<NavContext>();
    let active = nav.active;
    let label = label.unwrap_or_else(|| target.label().to_lowercase());

    nav.links.href_for(target).map(|href| {
        view! {
            <a href=href.to_string() class:active=move || active.get() == Some(target)>
                {label}
            </a>
        }
    })
}
