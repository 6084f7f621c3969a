//! Caller-supplied configuration for GitLab connector operations

use std::time::Duration;

use compact_str::CompactString;

use super::error::{ClientError, Result};

/// OAuth application credentials for the authorization-code exchange
///
/// Supplied by the caller per call; never mutated or persisted here.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// Token endpoint URL of the OAuth application
    pub endpoint: CompactString,
    /// OAuth application ID
    pub application_id: CompactString,
    /// OAuth application secret
    pub secret: CompactString,
    /// Redirect URL registered with the OAuth application
    pub redirect_url: CompactString,
}

/// Descriptor for the target GitLab instance
#[derive(Debug, Clone)]
pub struct VcsConfig {
    /// GitLab instance base URL
    pub instance_url: CompactString,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(30) }
    }
}

impl RequestConfig {
    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl OAuthConfig {
    /// Create a new OAuth configuration
    pub fn new(
        endpoint: impl Into<CompactString>,
        application_id: impl Into<CompactString>,
        secret: impl Into<CompactString>,
        redirect_url: impl Into<CompactString>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            application_id: application_id.into(),
            secret: secret.into(),
            redirect_url: redirect_url.into(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(ClientError::config("OAuth endpoint cannot be empty"));
        }

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ClientError::config("OAuth endpoint must start with http:// or https://"));
        }

        if self.application_id.is_empty() {
            return Err(ClientError::config("OAuth application ID cannot be empty"));
        }

        if self.secret.is_empty() {
            return Err(ClientError::config("OAuth application secret cannot be empty"));
        }

        Ok(())
    }
}

impl VcsConfig {
    /// Create a new VCS instance descriptor
    pub fn new(instance_url: impl Into<CompactString>) -> Self {
        Self { instance_url: instance_url.into() }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.instance_url.is_empty() {
            return Err(ClientError::config("Instance URL cannot be empty"));
        }

        if !self.instance_url.starts_with("http://") && !self.instance_url.starts_with("https://") {
            return Err(ClientError::config("Instance URL must start with http:// or https://"));
        }

        Ok(())
    }
}
