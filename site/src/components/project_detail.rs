//! Project detail page
//!
//! watches the `project_id` route param and fetches the project each time it
//! changes. every fetch takes a ticket from a `RequestTracker`; a response
//! that arrives after a newer fetch started is dropped.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;
use shared::{PageModel, PageView, ProjectState, RequestTracker};

use super::{CenterTitle, Loading, ProjectContent, RelatedLinks};
use crate::api;
use crate::config::SiteConfig;

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_else(SiteConfig::from_build_env);

    let params = use_params_map();
    let project_id = Memo::new(move |_| params.with(|p| p.get("project_id")));

    let (state, set_state) = signal(ProjectState::Pending);
    let tracker = RequestTracker::new();
    let api_url = config.api_url;

    // fetch on mount and whenever the id changes
    Effect::new(move || {
        let Some(id) = project_id.get() else {
            return;
        };

        let ticket = tracker.begin();
        set_state.set(ProjectState::Pending);

        let tracker = tracker.clone();
        let api_url = api_url.clone();
        leptos::task::spawn_local(async move {
            let result = api::fetch_project(&api_url, &id).await;
            if let Err(e) = &result {
                log::warn!("project {} unavailable: {}", id, e);
            }

            match tracker.settle(ticket, result) {
                Some(next) => set_state.set(next),
                None => log::debug!("dropping stale response for project {}", id),
            }
        });
    });

    let content = config.content;
    let model = Memo::new(move |_| state.with(|s| PageModel::build(s, &content)));

    let page_title = move || {
        state.with(|s| {
            s.project()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "Project".to_string())
        })
    };

    view! {
        <Title text=page_title />

        {move || match model.get().view {
            PageView::Loading => view! { <Loading /> }.into_any(),
            PageView::Content(content) => view! { <ProjectContent content=content /> }.into_any(),
            PageView::NotFound { title, subtitle } => view! {
                <CenterTitle title=title subtitle=subtitle main=true />
            }
            .into_any(),
        }}

        {move || model.get().related.map(|panel| view! { <RelatedLinks panel=panel /> })}
    }
}
