//! GitLab connector modules
//!
//! Splits the connector into focused components: the HTTP operations,
//! caller-supplied configuration and error types.

pub mod api;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use api::GitlabConnector;
pub use config::{OAuthConfig, RequestConfig, VcsConfig};
pub use error::ClientError;

pub type Result<T> = std::result::Result<T, ClientError>;
