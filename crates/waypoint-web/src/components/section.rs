use leptos::prelude::*;

/// Page section with an ASCII-ruled heading
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section id=id class="section">
            <h2 class="section-title">
                {format!("─┤ {} ├─", title)}
            </h2>
            <div class="section-body">
                {children()}
            </div>
        </section>
    }
}
