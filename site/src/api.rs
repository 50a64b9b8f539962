//! ==============================================================================
//! api.rs - API client for the launchpad project endpoint
//! ==============================================================================

use gloo_net::http::Request;
use shared::{project_url, FetchError, Project};

/// Fetch one project record
///
/// non-2xx statuses are errors, the body is only decoded on success.
pub async fn fetch_project(api_url: &str, project_id: &str) -> Result<Project, FetchError> {
    let url = project_url(api_url, project_id);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Project>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
