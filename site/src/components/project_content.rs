//! Loaded project: banner, summary, description, team and socials

use leptos::prelude::*;
use shared::{ContentView, DescriptionBlock, ShareTarget, SocialLink};

#[component]
pub fn ProjectContent(content: ContentView) -> impl IntoView {
    let ContentView {
        title,
        banner_img_url,
        short_description,
        funds_label,
        description,
        team_text,
        socials,
        share,
    } = content;

    view! {
        <div class="project">
            <img class="project-banner" src=banner_img_url alt=title.clone() width="100%" />
            <div class="project-title">
                <h1>{title}</h1>
            </div>
            <h5>{short_description}</h5>
            <h4>"Funds raised: "{funds_label}</h4>
            <hr class="divider" />

            <h4>"Description"</h4>
            <Description block=description />
            <hr class="divider" />

            <h4>"Meet the team"</h4>
            <p>{team_text}</p>

            <SocialRow links=socials share=share />
        </div>
    }
}

/// one `<p>` per paragraph, or the placeholder copy
#[component]
fn Description(block: DescriptionBlock) -> impl IntoView {
    match block {
        DescriptionBlock::Paragraphs(paragraphs) => paragraphs
            .into_iter()
            .map(|paragraph| view! { <p class="paragraph">{paragraph}</p> })
            .collect::<Vec<_>>()
            .into_any(),
        DescriptionBlock::Placeholder(text) => view! {
            <p class="paragraph placeholder">{text}</p>
        }
        .into_any(),
    }
}

#[component]
fn SocialRow(links: Vec<SocialLink>, share: ShareTarget) -> impl IntoView {
    view! {
        <div class="socials">
            {links.into_iter().map(|link| {
                let label = link.kind.aria_label();

                view! {
                    <a
                        class="social-link"
                        href=link.url
                        aria-label=label
                        title=link.kind.title()
                        rel="noreferrer"
                        target="_blank"
                    >
                        <span class=format!("icon icon-{}", label)></span>
                    </a>
                }
            }).collect::<Vec<_>>()}
            <ShareButton target=share />
        </div>
    }
}

#[component]
fn ShareButton(target: ShareTarget) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let share = move |_| {
        leptos::task::spawn_local(async move {
            let result = match target {
                ShareTarget::CurrentPage => copy_page_address().await,
            };
            match result {
                Ok(()) => set_copied.set(true),
                Err(e) => log::warn!("could not copy page address: {}", e),
            }
        });
    };

    view! {
        <button
            class="icon-button"
            aria-label="share"
            title=move || if copied.get() { "Link copied" } else { "Share" }
            on:click=share
        >
            <span class="icon icon-share"></span>
        </button>
    }
}

async fn copy_page_address() -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let href = window
        .location()
        .href()
        .map_err(|e| format!("{:?}", e))?;

    let promise = window.navigator().clipboard().write_text(&href);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| format!("{:?}", e))?;

    log::debug!("copied {} to clipboard", href);
    Ok(())
}
