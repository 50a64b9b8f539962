//! ==============================================================================
//! state.rs - view state of the project detail page
//! ==============================================================================
//!
//! a fetch is tagged with a generation when it starts. only the completion
//! holding the latest generation may write state, so a slow response for a
//! previous project id can never replace the current one.
//!
//! ==============================================================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::FetchError;
use crate::project::Project;

// ==============================================================================
// project state
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProjectState {
    /// nothing fetched yet, or a fetch is in flight
    #[default]
    Pending,
    Loaded(Project),
    /// the fetch failed for any reason
    Absent,
}

impl ProjectState {
    /// collapse a fetch outcome, every error maps to `Absent`
    pub fn from_fetch(result: Result<Project, FetchError>) -> Self {
        match result {
            Ok(project) => ProjectState::Loaded(project),
            Err(_) => ProjectState::Absent,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ProjectState::Pending)
    }

    pub fn project(&self) -> Option<&Project> {
        match self {
            ProjectState::Loaded(project) => Some(project),
            _ => None,
        }
    }
}

// ==============================================================================
// request tracker
// ==============================================================================

/// generation of a single fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// hands out fetch generations, clones share the same counter
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    current: Arc<AtomicU64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// start a new generation, every older ticket becomes stale
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }

    /// state to store for a finished fetch, `None` if the ticket is stale
    pub fn settle(
        &self,
        ticket: Ticket,
        result: Result<Project, FetchError>,
    ) -> Option<ProjectState> {
        self.is_current(ticket)
            .then(|| ProjectState::from_fetch(result))
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Project {
        Project {
            name: name.to_string(),
            ..Project::default()
        }
    }

    #[test]
    fn test_initial_state_is_pending() {
        let state = ProjectState::default();
        assert!(state.is_pending());
        assert!(state.project().is_none());
    }

    #[test]
    fn test_every_error_is_absent() {
        for err in [
            FetchError::Network("offline".into()),
            FetchError::Status(404),
            FetchError::Status(500),
            FetchError::Decode("expected object".into()),
        ] {
            assert_eq!(ProjectState::from_fetch(Err(err)), ProjectState::Absent);
        }
    }

    #[test]
    fn test_success_is_loaded() {
        let state = ProjectState::from_fetch(Ok(named("Foo")));
        assert_eq!(state.project().map(|p| p.name.as_str()), Some("Foo"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        // the first request finishes after the id already changed
        assert_eq!(tracker.settle(first, Ok(named("old"))), None);
        assert_eq!(
            tracker.settle(second, Ok(named("new"))),
            Some(ProjectState::Loaded(named("new")))
        );
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        assert_eq!(tracker.settle(first, Err(FetchError::Status(404))), None);
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_clones_share_generation() {
        let tracker = RequestTracker::new();
        let handle = tracker.clone();
        let ticket = tracker.begin();
        assert!(handle.is_current(ticket));
        handle.begin();
        assert!(!tracker.is_current(ticket));
    }
}
