//! ==============================================================================
//! content.rs - static copy of the project page
//! ==============================================================================
//!
//! everything on the page that does not come from the project record. the
//! site provides one `PageContent` through context; the default matches the
//! launchpad's stock copy, and a content service can ship json instead.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContent {
    pub not_found_title: String,
    pub not_found_subtitle: String,
    /// shown when a project has no description
    pub description_placeholder: String,
    pub team_placeholder: String,
    pub related_title: String,
    pub related_subtitle: String,
    pub related_links: Vec<RelatedLink>,
}

/// one card of the "learn more" panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedLink {
    pub title: String,
    pub caption: String,
    /// material icon name
    pub icon: String,
    pub href: String,
    /// theme colour slot: primary, secondary or tertiary
    pub accent: String,
}

impl RelatedLink {
    fn new(title: &str, caption: &str, icon: &str, href: &str, accent: &str) -> Self {
        Self {
            title: title.to_string(),
            caption: caption.to_string(),
            icon: icon.to_string(),
            href: href.to_string(),
            accent: accent.to_string(),
        }
    }

    /// external links open in a new tab
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            not_found_title: "Oops...".to_string(),
            not_found_subtitle: "Looks like the project you are looking for doesn't exist."
                .to_string(),
            description_placeholder: "Update project description for content in this section."
                .to_string(),
            team_placeholder: "Update team description for content in this section.".to_string(),
            related_title: "Learn More".to_string(),
            related_subtitle: String::new(),
            related_links: vec![
                RelatedLink::new(
                    "Documentation",
                    "Read about how Ergopad Works",
                    "auto_stories",
                    "https://github.com/ergo-pad/ergopad/blob/main/docs/README.md",
                    "primary",
                ),
                RelatedLink::new(
                    "About",
                    "Learn more about who we are",
                    "emoji_people",
                    "/about",
                    "secondary",
                ),
                RelatedLink::new(
                    "Apply for IDO",
                    "Submit your own project proposal",
                    "chat",
                    "/apply",
                    "tertiary",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_related_links() {
        let content = PageContent::default();
        let titles: Vec<_> = content
            .related_links
            .iter()
            .map(|l| l.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Documentation", "About", "Apply for IDO"]);
        assert!(content.related_links[0].is_external());
        assert!(!content.related_links[1].is_external());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let content: PageContent =
            serde_json::from_str(r#"{"team_placeholder": "Team coming soon."}"#).unwrap();
        assert_eq!(content.team_placeholder, "Team coming soon.");
        assert_eq!(content.not_found_title, "Oops...");
        assert_eq!(content.related_links.len(), 3);
    }
}
