//! Error types for GitLab connector operations

use compact_str::CompactString;
use thiserror::Error;

/// Structured error types for GitLab connector operations
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error with endpoint context
    #[error("Failed to parse JSON response from {endpoint}: {source}")]
    JsonParse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// GitLab API returned a non-success response
    #[error("GitLab API error (HTTP {status}): {message}")]
    GitlabApi { status: u16, message: CompactString },

    /// Configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create a JSON parsing error with endpoint context
    pub fn json_parse(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonParse { endpoint: endpoint.into(), source }
    }

    /// Create a GitLab API error
    pub fn gitlab_api(status: u16, message: impl Into<CompactString>) -> Self {
        Self::GitlabApi { status, message: message.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = ClientError::config("Instance URL cannot be empty");
        assert!(matches!(err, ClientError::Config(_)));
        assert_eq!(err.to_string(), "Configuration error: Instance URL cannot be empty");
    }

    #[test]
    fn test_gitlab_api_error() {
        let err = ClientError::gitlab_api(404, "404 Project Not Found");
        assert!(matches!(err, ClientError::GitlabApi { status: 404, .. }));
        assert_eq!(err.to_string(), "GitLab API error (HTTP 404): 404 Project Not Found");
    }
}
