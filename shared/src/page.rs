//! ==============================================================================
//! page.rs - rendering policy of the project detail page
//! ==============================================================================
//!
//! `PageModel::build` is the whole decision table of the page:
//!     Pending        -> loading indicator only
//!     Loaded(p)      -> project content, then related links
//!     Absent         -> not found title, then related links
//!
//! components in the site crate render a `PageModel` and nothing else.
//!
//! ==============================================================================

use crate::content::{PageContent, RelatedLink};
use crate::project::{Project, SocialLink};
use crate::state::ProjectState;

#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub view: PageView,
    /// `None` while the page is still loading
    pub related: Option<RelatedPanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading,
    Content(ContentView),
    NotFound { title: String, subtitle: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentView {
    pub title: String,
    pub banner_img_url: String,
    pub short_description: String,
    pub funds_label: String,
    pub description: DescriptionBlock,
    pub team_text: String,
    /// present socials only
    pub socials: Vec<SocialLink>,
    /// rendered after the socials on every loaded project
    pub share: ShareTarget,
}

/// what the share button copies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    /// the address currently in the location bar
    CurrentPage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DescriptionBlock {
    Paragraphs(Vec<String>),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelatedPanel {
    pub title: String,
    pub subtitle: String,
    pub links: Vec<RelatedLink>,
}

impl PageModel {
    pub fn build(state: &ProjectState, content: &PageContent) -> Self {
        let view = match state {
            ProjectState::Pending => PageView::Loading,
            ProjectState::Loaded(project) => {
                PageView::Content(ContentView::new(project, content))
            }
            ProjectState::Absent => PageView::NotFound {
                title: content.not_found_title.clone(),
                subtitle: content.not_found_subtitle.clone(),
            },
        };

        let related = (!state.is_pending()).then(|| RelatedPanel {
            title: content.related_title.clone(),
            subtitle: content.related_subtitle.clone(),
            links: content.related_links.clone(),
        });

        Self { view, related }
    }
}

impl ContentView {
    fn new(project: &Project, content: &PageContent) -> Self {
        let description = match project.paragraphs() {
            Some(paragraphs) => DescriptionBlock::Paragraphs(
                paragraphs.into_iter().map(str::to_string).collect(),
            ),
            None => DescriptionBlock::Placeholder(content.description_placeholder.clone()),
        };

        Self {
            title: project.name.clone(),
            banner_img_url: project.banner_img_url.clone(),
            short_description: project.short_description.clone(),
            funds_label: project.funds_label(),
            description,
            team_text: content.team_placeholder.clone(),
            socials: project.social_links(),
            share: ShareTarget::CurrentPage,
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
