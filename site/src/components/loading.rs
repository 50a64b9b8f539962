//! Loading indicator

use leptos::prelude::*;

/// centered progress spinner shown while a project is being fetched
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="progressbar" aria-label="loading">
            <span class="spinner"></span>
        </div>
    }
}
