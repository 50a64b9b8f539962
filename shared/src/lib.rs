//! ==============================================================================
//! lib.rs - shared types for the launchpad project page
//! ==============================================================================
//!
//! purpose:
//!     defines the project record, the view state of the project detail page
//!     and the pure rendering policy that decides what the page shows.
//!     nothing in here touches the browser, so all of it is tested natively.
//!
//! relationships:
//!     - used by: site (fetches projects, renders the page model)
//!
//! design rationale:
//!     the wasm crate only wires signals and markup. every decision about
//!     what to display (loading, content, not found, related links) lives in
//!     `page::PageModel`, which is a plain function of `ProjectState` and
//!     `PageContent`.
//!
//! ==============================================================================

pub mod content;
pub mod endpoint;
pub mod error;
pub mod page;
pub mod project;
pub mod state;

pub use content::{PageContent, RelatedLink};
pub use endpoint::project_url;
pub use error::FetchError;
pub use page::{ContentView, DescriptionBlock, PageModel, PageView, RelatedPanel, ShareTarget};
pub use project::{FundsRaised, Project, SocialKind, SocialLink, Socials};
pub use state::{ProjectState, RequestTracker, Ticket};
