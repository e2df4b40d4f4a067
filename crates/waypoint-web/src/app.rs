use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use shared::CONFIG;
use waypoint_core::ViewId;

use crate::components::{NavContext, NavLink, NavLinks};
use crate::pages::{DashboardPage, LogInPage, SettingsPage};

/// Mounted once into the root element; swaps pages as `active` changes
#[component]
pub fn Shell(active: ReadSignal<Option<ViewId>>, links: NavLinks) -> impl IntoView {
    provide_meta_context();
    provide_context(NavContext { active, links: links.clone() });

    let title = move || match active.get() {
        Some(view) => format!("{} · {}", view.label(), CONFIG.name),
        None => CONFIG.name.to_string(),
    };

    view! {
        <Stylesheet id="main" href=CONFIG.stylesheet />
        <Title text=title />

        <header class="shell-header">
            <span class="shell-name">{CONFIG.name}</span>
            <nav class="shell-nav">
                {links.views().map(|target| view! { <NavLink target=target /> }).collect_view()}
            </nav>
        </header>

        <main class="shell-main">
            {move || active.get().map(page)}
        </main>
    }
}

fn page(id: ViewId) -> AnyView {
    match id {
        ViewId::Dashboard => view! { <DashboardPage /> }.into_any(),
        ViewId::Settings => view! { <SettingsPage /> }.into_any(),
        ViewId::LogIn => view! { <LogInPage /> }.into_any(),
    }
}
