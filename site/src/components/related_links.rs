//! "Learn more" panel

use leptos::prelude::*;
use shared::RelatedPanel;

#[component]
pub fn RelatedLinks(panel: RelatedPanel) -> impl IntoView {
    let RelatedPanel { title, subtitle, links } = panel;

    view! {
        <section class="related-links">
            <h2>{title}</h2>
            {(!subtitle.is_empty()).then(|| view! { <p class="subtitle">{subtitle}</p> })}
            <div class="related-grid">
                {links.into_iter().map(|link| {
                    let target = link.is_external().then_some("_blank");
                    let rel = link.is_external().then_some("noreferrer");

                    view! {
                        <a
                            class=format!("related-card accent-{}", link.accent)
                            href=link.href
                            target=target
                            rel=rel
                        >
                            <span class="material-icons">{link.icon}</span>
                            <div class="related-title">{link.title}</div>
                            <div class="related-caption">{link.caption}</div>
                        </a>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
