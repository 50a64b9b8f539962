//! fetch error taxonomy

use thiserror::Error;

/// why a project fetch did not produce a project
///
/// the page collapses every variant into the same "not found" view, the
/// distinction only exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// request never got a response (dns, cors, offline)
    #[error("network error: {0}")]
    Network(String),
    /// server answered with a non-2xx status
    #[error("unexpected status {0}")]
    Status(u16),
    /// body was not a project record
    #[error("invalid project body: {0}")]
    Decode(String),
}
