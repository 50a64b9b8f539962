//! ==============================================================================
//! lib.rs - Launchpad Project Page
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm site showing a single launchpad project: banner,
//!     description, socials and a share button, followed by a
//!     "learn more" panel.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - reads projects from the launchpad api via fetch
//!     - page decisions live in the `shared` crate (PageModel)
//!
//! routes:
//!     /projects/:project_id    project detail page
//!     anything else            404
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod config;

use components::{Header, NotFound, ProjectDetail};
use config::SiteConfig;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // fails only if a logger is already installed
    let _ = console_log::init_with_level(level);

    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::from_build_env());

    view! {
        <Router>
            <Header />
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=(StaticSegment("projects"), ParamSegment("project_id"))
                        view=ProjectDetail
                    />
                </Routes>
            </main>
        </Router>
    }
}
