use leptos::prelude::*;
use shared::CONFIG;
use waypoint_core::ViewId;

use crate::components::{NavLink, Section};

/// Entry view for the gated variant
///
/// Layout only: credentials are not checked and no session is created.
#[component]
pub fn LogInPage() -> impl IntoView {
    view! {
        <div class="page">
            <header class="page-header">
                <h1>{format!("Log in to {}", CONFIG.name)}</h1>
            </header>

            <Section id="credentials" title="Credentials">
                <label class="field">
                    <span>"user"</span>
                    <input type="text" name="username" autocomplete="username" />
                </label>
                <label class="field">
                    <span>"password"</span>
                    <input type="password" name="password" autocomplete="current-password" />
                </label>
            </Section>

            <footer class="page-footer">
                <NavLink target=ViewId::Dashboard label="continue →" />
            </footer>
        </div>
    }
}
