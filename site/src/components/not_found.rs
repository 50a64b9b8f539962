//! 404 page for unknown routes

use leptos::prelude::*;

use super::CenterTitle;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <CenterTitle
            title="404 - Page Not Found".to_string()
            subtitle="The page you are looking for does not exist.".to_string()
            main=true
        />
        <p class="center">
            <a href="/">"Go back to home"</a>
        </p>
    }
}
