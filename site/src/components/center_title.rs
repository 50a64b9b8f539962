//! Centered title block, used for the "not found" state

use leptos::prelude::*;

#[component]
pub fn CenterTitle(
    title: String,
    #[prop(optional)] subtitle: String,
    /// `main` titles are rendered as the page heading
    #[prop(optional)]
    main: bool,
) -> impl IntoView {
    let class = if main { "center-title main" } else { "center-title" };

    view! {
        <div class=class>
            {if main {
                view! { <h1>{title}</h1> }.into_any()
            } else {
                view! { <h2>{title}</h2> }.into_any()
            }}
            <p class="subtitle">{subtitle}</p>
        </div>
    }
}
