use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Directory API returned {status} for {path}")]
    Api { status: StatusCode, path: String },

    #[error("No account matches username '{0}'")]
    NoMatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DirectoryError::NoMatch("ash".to_string());
        assert_eq!(error.to_string(), "No account matches username 'ash'");

        let error = DirectoryError::Api {
            status: StatusCode::NOT_FOUND,
            path: "/api/v1/accounts/999".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Directory API returned 404 Not Found for /api/v1/accounts/999"
        );
    }
}
