//! Test utilities and common test fixtures for client modules

use serde_json::json;

use crate::client::config::{OAuthConfig, VcsConfig};


/// Create a JSON token-endpoint response
pub fn token_json_response(created_at: i64, expires_in: i64) -> serde_json::Value {
    json!({
        "access_token": "test-access-token",
        "token_type": "bearer",
        "refresh_token": "test-refresh-token",
        "created_at": created_at,
        "expires_in": expires_in
    })
}

/// Create a JSON project list response with two projects
pub fn projects_json_response() -> serde_json::Value {
    json!([
        {
            "id": 42,
            "name": "foo",
            "path_with_namespace": "group/foo",
            "web_url": "https://gitlab.example.com/group/foo"
        },
        {
            "id": 43,
            "name": "bar",
            "path_with_namespace": "group/bar",
            "web_url": "https://gitlab.example.com/group/bar"
        }
    ])
}

/// Create a JSON hook creation response
pub fn hook_json_response(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "push_events": true,
        "enable_ssl_verification": false
    })
}

/// Create a GitLab error response in the OAuth format
pub fn gitlab_error_response(error: &str, description: Option<&str>) -> serde_json::Value {
    let mut json = json!({
        "error": error
    });

    if let Some(desc) = description {
        json["error_description"] = json!(desc);
    }

    json
}

/// Create a GitLab error response in the message format
pub fn gitlab_error_response_2(message: &str) -> serde_json::Value {
    json!({
        "message": message
    })
}

/// Mock HTTP server for testing
pub struct MockServer {
    pub server: wiremock::MockServer,
}

impl MockServer {
    /// Start a new mock server
    pub async fn start() -> Self {
        let server = wiremock::MockServer::start().await;
        Self { server }
    }

    /// Get the base URL of the mock server
    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    /// Create a VCS descriptor pointing to this mock server
    pub fn test_vcs(&self) -> VcsConfig {
        VcsConfig::new(self.base_url())
    }

    /// Create an OAuth configuration whose token endpoint is this mock server
    pub fn test_oauth_config(&self) -> OAuthConfig {
        OAuthConfig::new(
            format!("{}/oauth/token", self.base_url()),
            "test-app-id",
            "test-app-secret",
            "https://bytebase.example.com/oauth/callback",
        )
    }
}

#[cfg(test)]
#[allow(clippy::module_inception)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_shapes() {
        let token = token_json_response(1000, 3600);
        assert_eq!(token["created_at"], 1000);
        assert_eq!(token["expires_in"], 3600);

        let projects = projects_json_response();
        assert_eq!(projects[0]["id"], 42);
        assert_eq!(projects[1]["path_with_namespace"], "group/bar");

        let hook = hook_json_response(7);
        assert_eq!(hook["id"], 7);
    }

    #[test]
    fn test_error_responses() {
        let error1 = gitlab_error_response("invalid_grant", Some("Code expired"));
        assert_eq!(error1["error"], "invalid_grant");
        assert_eq!(error1["error_description"], "Code expired");

        let error2 = gitlab_error_response_2("404 Project Not Found");
        assert_eq!(error2["message"], "404 Project Not Found");
    }
}
