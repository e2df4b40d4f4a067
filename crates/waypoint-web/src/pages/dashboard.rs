use leptos::prelude::*;
use shared::CONFIG;
use waypoint_core::ViewId;

use crate::components::{NavContext, NavLink, Section};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let nav = expect_context::<NavContext>();

    view! {
        <div class="page">
            <header class="page-header">
                <h1>{format!("{} dashboard", CONFIG.name)}</h1>
                <div class="muted">{CONFIG.tagline}</div>
            </header>

            <Section id="routes" title="Routes">
                <table class="routes">
                    {nav.links.iter().map(|(target, href)| view! {
                        <tr>
                            <td><code>{href.to_string()}</code></td>
                            <td>{target.label()}</td>
                        </tr>
                    }).collect_view()}
                </table>
            </Section>

            <Section id="next" title="Pages">
                <div>
                    <NavLink target=ViewId::Settings label="settings" />
                </div>
            </Section>
        </div>
    }
}
