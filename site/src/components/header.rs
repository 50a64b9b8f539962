//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <a href="/" class="brand">
                    <h1>"Ergopad"</h1>
                </a>
                <p class="subtitle">"Launchpad projects"</p>
            </div>
        </header>
    }
}
