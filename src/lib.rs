//! Client-side GitLab adapter for CI/CD configuration services.
//!
//! Lets a VCS-integration wizard exchange an OAuth authorization code for
//! tokens, list the projects a user can manage webhooks on, and register a
//! push-event webhook on a chosen project. The connector is stateless; every
//! operation is a single request/response cycle against a GitLab-compatible
//! REST API, with configuration injected by the caller.

pub mod client;
pub mod domain;
pub mod id;

pub use client::{ClientError, GitlabConnector, OAuthConfig, RequestConfig, VcsConfig};
pub use domain::{ExternalRepositoryInfo, OAuthToken, WebhookInfo};
pub use id::ProjectId;
