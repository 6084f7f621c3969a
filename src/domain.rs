// GitLab API Documentation: https://docs.gitlab.com/ee/api/api_resources.html
use compact_str::{CompactString, ToCompactString};
use serde::Deserialize;

use crate::id::{HookId, ProjectId};

/// Tokens produced by a single OAuth authorization-code exchange.
///
/// Not persisted here; ownership passes to the caller on return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthToken {
    pub access_token: CompactString,
    pub refresh_token: CompactString,
    /// Expiry in seconds since epoch; 0 means the token never expires.
    pub expires_ts: i64,
}

/// A remote project the authenticated user can register webhooks on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalRepositoryInfo {
    pub external_id: CompactString,
    pub name: CompactString,
    pub full_path: CompactString,
    pub web_url: CompactString,
}

/// A successfully registered push-event webhook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookInfo {
    pub id: CompactString,
    pub url: CompactString,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenDto {
    pub access_token: CompactString,
    pub refresh_token: CompactString,
    pub created_at: i64,
    pub expires_in: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectDto {
    pub id: ProjectId,
    pub name: CompactString,
    pub path_with_namespace: CompactString,
    pub web_url: CompactString,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookDto {
    pub id: HookId,
}

impl From<TokenDto> for OAuthToken {
    fn from(dto: TokenDto) -> Self {
        // GitLab's default config (as of 13.12) does not expire access tokens
        // and reports expires_in as 0; keep 0 as the "never expires" marker.
        // See https://gitlab.com/gitlab-org/gitlab/-/issues/21745.
        let expires_ts = if dto.expires_in == 0 {
            0
        } else {
            dto.created_at + dto.expires_in
        };

        Self {
            access_token: dto.access_token,
            refresh_token: dto.refresh_token,
            expires_ts,
        }
    }
}

impl From<ProjectDto> for ExternalRepositoryInfo {
    fn from(dto: ProjectDto) -> Self {
        Self {
            external_id: dto.id.to_compact_string(),
            name: dto.name,
            full_path: dto.path_with_namespace,
            web_url: dto.web_url,
        }
    }
}
