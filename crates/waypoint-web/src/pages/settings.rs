use leptos::prelude::*;
use shared::CONFIG;
use waypoint_core::ViewId;

use crate::components::{NavLink, Section};
use crate::config::VARIANT;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Settings"</h1>
            </header>

            <Section id="application" title="Application">
                <div><strong>"ROUTES"</strong> "      " {VARIANT}</div>
                <div><strong>"ROOT"</strong> "        #" {CONFIG.root_element_id}</div>
                <div><strong>"STYLESHEET"</strong> "  " {CONFIG.stylesheet}</div>
            </Section>

            <footer class="page-footer">
                <NavLink target=ViewId::Dashboard label="← back to dashboard" />
            </footer>
        </div>
    }
}
