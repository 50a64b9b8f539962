//! project endpoint url

/// build `{api_base}/projects/{id}`
///
/// a trailing `/` on the base is dropped. the id is percent-encoded as one
/// path segment but otherwise used as given.
pub fn project_url(api_base: &str, id: &str) -> String {
    format!(
        "{}/projects/{}",
        api_base.trim_end_matches('/'),
        urlencoding::encode(id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_id() {
        assert_eq!(
            project_url("https://api.example.com", "proj-1"),
            "https://api.example.com/projects/proj-1"
        );
    }

    #[test]
    fn test_trailing_slash_on_base() {
        assert_eq!(
            project_url("https://api.example.com/v1/", "proj-1"),
            "https://api.example.com/v1/projects/proj-1"
        );
    }

    #[test]
    fn test_id_is_one_segment() {
        assert_eq!(
            project_url("http://localhost", "a/b c"),
            "http://localhost/projects/a%2Fb%20c"
        );
    }
}
