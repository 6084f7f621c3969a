//! Core HTTP client for the GitLab integration operations

use compact_str::{format_compact, CompactString, ToCompactString};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::{
    config::{OAuthConfig, RequestConfig, VcsConfig},
    error::{ClientError, Result},
};
use crate::{
    domain::{ExternalRepositoryInfo, HookDto, OAuthToken, ProjectDto, TokenDto, WebhookInfo},
    id::ProjectId,
};

const GITLAB_API_PATH: &str = "api/v4";
const GITLAB_WEBHOOK_PATH: &str = "hook/gitlab";

/// Webhook management requires the token owner to be at least a project
/// maintainer; passed as a server-side filter when listing projects.
const MAINTAINER_ACCESS_LEVEL: u32 = 40;

/// Stateless client for the three GitLab integration operations: OAuth code
/// exchange, project listing and push-webhook registration
///
/// Each operation is one request/response cycle; concurrent calls are safe.
#[derive(Debug, Clone)]
pub struct GitlabConnector {
    client: Client,
}

/// GitLab API error response formats
#[derive(Debug, Deserialize)]
struct GitlabApiError {
    error: CompactString,
    error_description: Option<CompactString>,
}

#[derive(Debug, Deserialize)]
struct GitlabApiError2 {
    message: CompactString,
}

/// Request body for hook registration
#[derive(Debug, Serialize)]
struct HookPayload {
    url: CompactString,
    push_events: bool,
    push_events_branch_filter: CompactString,
    enable_ssl_verification: bool,
}

impl GitlabConnector {
    /// Create a new connector
    pub fn new(request: RequestConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(request.timeout)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { client })
    }

    /// Exchange an OAuth authorization code for access/refresh tokens
    #[instrument(skip(self, oauth, code), fields(endpoint = %oauth.endpoint))]
    pub async fn exchange_token(&self, oauth: &OAuthConfig, code: &str) -> Result<OAuthToken> {
        oauth.validate()?;

        debug!("Exchanging authorization code for tokens");

        let response = self
            .client
            .post(oauth.endpoint.as_str())
            .query(&[
                ("client_id", oauth.application_id.as_str()),
                ("client_secret", oauth.secret.as_str()),
                ("code", code),
                ("redirect_uri", oauth.redirect_url.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        let token: TokenDto = self.handle_response(response).await?;
        Ok(token.into())
    }

    /// Fetch the projects the token owner can manage webhooks on
    ///
    /// Returns the first page in server order; the sequence may be empty.
    #[instrument(skip(self, vcs, token), fields(instance_url = %vcs.instance_url))]
    pub async fn fetch_project_list(
        &self,
        vcs: &VcsConfig,
        token: &str,
    ) -> Result<Vec<ExternalRepositoryInfo>> {
        vcs.validate()?;

        let url = build_projects_url(vcs);
        let response = self
            .client
            .get(url.as_str())
            .bearer_auth(token)
            .send()
            .await?;

        let projects: Vec<ProjectDto> = self.handle_response(response).await?;
        debug!(project_count = projects.len(), "Successfully fetched projects");

        Ok(projects.into_iter().map(Into::into).collect())
    }

    /// Register a push-event webhook on a project
    ///
    /// The callback URL embeds a fresh v4 UUID, so every call produces a
    /// unique hook endpoint.
    #[instrument(
        skip(self, vcs, branch_filter, token),
        fields(instance_url = %vcs.instance_url, project_id = %project_id)
    )]
    pub async fn create_webhook(
        &self,
        vcs: &VcsConfig,
        project_id: ProjectId,
        branch_filter: &str,
        token: &str,
    ) -> Result<WebhookInfo> {
        vcs.validate()?;

        let callback_url =
            format_compact!("{}/{}/{}", vcs.instance_url, GITLAB_WEBHOOK_PATH, Uuid::new_v4());

        // Push events only. Merge request events stay unsubscribed: mysql and
        // postgres offer no safe DDL dry-run, so there is nothing useful to
        // report back on an open merge request.
        // See https://www.postgresql.org/message-id/CAMsr%2BYGiYQ7PYvYR2Voio37YdCpp79j5S%2BcmgVJMOLM2LnRQcA%40mail.gmail.com
        let payload = HookPayload {
            url: callback_url.clone(),
            push_events: true,
            push_events_branch_filter: branch_filter.into(),
            // TODO: re-enable ssl verification once self-signed instances are handled
            enable_ssl_verification: false,
        };

        let url = build_hooks_url(vcs, project_id);
        let response = self
            .client
            .post(url.as_str())
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;

        let hook: HookDto = self.handle_response(response).await?;
        debug!(hook_id = %hook.id, "Successfully created webhook");

        Ok(WebhookInfo {
            id: hook.id.to_compact_string(),
            url: callback_url,
        })
    }

    // Private helper methods

    /// Handle HTTP response and deserialize JSON
    async fn handle_response<T>(&self, response: Response) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url_path = response.url().path().to_string();
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| ClientError::json_parse(url_path, e))
        } else {
            Err(error_from_response(status.as_u16(), &body))
        }
    }
}

/// Map a non-success response to an error, extracting the GitLab error body
/// when it matches one of the documented formats
fn error_from_response(status: u16, body: &str) -> ClientError {
    if let Ok(api_error) = serde_json::from_str::<GitlabApiError>(body) {
        ClientError::gitlab_api(
            status,
            format_compact!(
                "{} {}",
                api_error.error,
                api_error.error_description.unwrap_or_default()
            ),
        )
    } else if let Ok(api_error2) = serde_json::from_str::<GitlabApiError2>(body) {
        ClientError::gitlab_api(status, api_error2.message)
    } else {
        ClientError::gitlab_api(status, body)
    }
}

/// Build URL for the project list endpoint
fn build_projects_url(vcs: &VcsConfig) -> CompactString {
    format_compact!(
        "{}/{}/projects?membership=true&simple=true&min_access_level={}",
        vcs.instance_url,
        GITLAB_API_PATH,
        MAINTAINER_ACCESS_LEVEL
    )
}

/// Build URL for the project hooks endpoint
fn build_hooks_url(vcs: &VcsConfig, project_id: ProjectId) -> CompactString {
    format_compact!(
        "{}/{}/projects/{}/hooks",
        vcs.instance_url,
        GITLAB_API_PATH,
        project_id
    )
}
