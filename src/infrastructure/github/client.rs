use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::types::{CreateIssueRequest, IssueResponse, RepositoryResponse};
use crate::domain::models::{
    Config, CreatedIssue, Credential, IssueDraft, RepositoryHandle, RepositoryRef,
};
use crate::domain::ports::{IssueTracker, TrackerError, TrackerResult};
use crate::infrastructure::logging::SecretScrubber;

const GITHUB_API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("wiki-publisher/", env!("CARGO_PKG_VERSION"));

/// Configuration for the GitHub HTTP client
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Base URL of the REST API, e.g. `https://api.github.com`
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl From<&Config> for GitHubClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            api_url: config.api_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// HTTP client for the GitHub REST API
///
/// Every request carries the bearer token, the JSON media type and a pinned
/// API version. Requests are never retried.
pub struct GitHubClient {
    http_client: ReqwestClient,
    base_url: String,
    scrubber: SecretScrubber,
}

impl GitHubClient {
    /// Create a new GitHub API client
    ///
    /// # Arguments
    /// * `config` - Client configuration
    /// * `credential` - Bearer token sent with every request
    ///
    /// # Example
    /// ```no_run
    /// use wiki_publisher::domain::models::Credential;
    /// use wiki_publisher::infrastructure::github::{GitHubClient, GitHubClientConfig};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let credential = Credential::new("ghp_example").expect("non-empty token");
    /// let client = GitHubClient::new(GitHubClientConfig::default(), &credential)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: GitHubClientConfig, credential: &Credential) -> TrackerResult<Self> {
        info!(
            api_url = %config.api_url,
            timeout_secs = config.timeout_secs,
            "Initializing GitHub API client"
        );

        let mut authorization =
            header::HeaderValue::from_str(&format!("Bearer {}", credential.expose())).map_err(
                |_| TrackerError::AuthenticationFailed("token contains invalid characters".to_string()),
            )?;
        authorization.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            header::HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| TrackerError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            scrubber: SecretScrubber::with_secret(credential.expose()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn network_error(&self, err: &reqwest::Error) -> TrackerError {
        TrackerError::Network(self.scrubber.scrub(&err.to_string()))
    }

    /// Handle HTTP response and convert to typed result
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> TrackerResult<T> {
        let status = response.status();
        debug!(%status, "Response status");

        if !status.is_success() {
            return Err(self.handle_error_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TrackerError::InvalidResponse(self.scrubber.scrub(&e.to_string())))
    }

    /// Handle error response and classify error type
    async fn handle_error_response(&self, response: Response) -> TrackerError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        let body = self.scrubber.scrub(&body);

        warn!("API error ({}): {}", status, body);

        TrackerError::from_status(status.as_u16(), body)
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    #[instrument(skip_all, fields(repository = %repository))]
    async fn get_repository(&self, repository: &RepositoryRef) -> TrackerResult<RepositoryHandle> {
        let url = self.url(&format!(
            "/repos/{}/{}",
            repository.owner(),
            repository.name()
        ));
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.network_error(&e))?;

        let repo: RepositoryResponse = self.handle_response(response).await?;
        if !repo.has_issues {
            warn!(repository = %repo.full_name, "Issues are disabled; every submission will fail");
        }

        Ok(repo.into())
    }

    #[instrument(skip_all, fields(repository = %repository.full_name, title = %draft.title))]
    async fn create_issue(
        &self,
        repository: &RepositoryHandle,
        draft: &IssueDraft,
    ) -> TrackerResult<CreatedIssue> {
        let url = self.url(&format!("/repos/{}/issues", repository.full_name));
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&CreateIssueRequest::from(draft))
            .send()
            .await
            .map_err(|e| self.network_error(&e))?;

        let issue: IssueResponse = self.handle_response(response).await?;
        info!(number = issue.number, url = %issue.html_url, "Issue created");

        Ok(issue.into())
    }
}
