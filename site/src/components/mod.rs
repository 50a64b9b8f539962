//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod center_title;
mod header;
mod loading;
mod not_found;
mod project_content;
mod project_detail;
mod related_links;

pub use center_title::CenterTitle;
pub use header::Header;
pub use loading::Loading;
pub use not_found::NotFound;
pub use project_content::ProjectContent;
pub use project_detail::ProjectDetail;
pub use related_links::RelatedLinks;
