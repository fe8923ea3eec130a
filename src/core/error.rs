use crate::models::DraftField;

/// Why the country dataset could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("country service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("parse JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Why a person draft was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{0} is required")]
    MissingField(DraftField),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_response_body() {
        let err = LoadError::Status {
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"country service returned HTTP 404: {"message":"Not Found"}"#
        );
    }
}
