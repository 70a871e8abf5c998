//! Journey planner client error types.

/// Errors that can occur when talking to the journey planner.
#[derive(Debug, thiserror::Error)]
pub enum EnturError {
    /// Network or connection failure reaching the service
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("JSON parse error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// Client name cannot be sent as a header value
    #[error("invalid client name: {0:?}")]
    InvalidClientName(String),

    /// Canned response could not be loaded
    #[error("mock data error: {0}")]
    MockData(String),
}

impl EnturError {
    /// Build a decode error, keeping the first 500 characters of the body.
    pub(crate) fn decode(err: &serde_json::Error, body: &str) -> Self {
        EnturError::Decode {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EnturError::Api {
            status: 403,
            message: "Forbidden".into(),
        };
        assert_eq!(err.to_string(), "API error 403: Forbidden");

        let err = EnturError::InvalidClientName("bad\nname".into());
        assert_eq!(err.to_string(), "invalid client name: \"bad\\nname\"");
    }

    #[test]
    fn decode_truncates_body() {
        let body = "x".repeat(2000);
        let json_err = serde_json::from_str::<serde_json::Value>(&body).unwrap_err();
        let err = EnturError::decode(&json_err, &body);

        match err {
            EnturError::Decode { message, body } => {
                assert!(!message.is_empty());
                assert_eq!(body.unwrap().len(), 500);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
