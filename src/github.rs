use crate::error::{Result, StarChartError};
use crate::types::{RepoSlug, RepositoryDescriptor};
use futures::future::try_join_all;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("github-star-chart/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`GitHubClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the REST API. GitHub Enterprise hosts use `https://host/api/v3`.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

pub struct GitHubClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(token: String) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    pub fn with_config(token: String, config: ClientConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(StarChartError::InvalidBaseUrl(config.base_url));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            token,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Value sent in the `Authorization` header of every request.
    pub fn authorization_header(&self) -> String {
        format!("token {}", self.token)
    }

    /// Builds `{base}/repos/{owner}/{repo}`.
    ///
    /// `owner` and `repo` each become exactly one percent-encoded path segment,
    /// so a `/` or `?` inside a name cannot change the shape of the path.
    pub fn repo_url(&self, owner: &str, repo: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StarChartError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["repos", owner, repo]);
        Ok(url)
    }

    /// Fetches the metadata of a single repository.
    ///
    /// The body is returned as-is; no field is checked here. Any non-2xx
    /// status is an [`StarChartError::HttpError`] and is not retried.
    pub async fn fetch(&self, owner: &str, repo: &str) -> Result<RepositoryDescriptor> {
        let url = self.repo_url(owner, repo)?;
        debug!(%url, "Fetching repository metadata");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header(AUTHORIZATION, self.authorization_header())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(owner, repo, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            warn!(owner, repo, status = status.as_u16(), "GitHub API request failed");
            return Err(StarChartError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let descriptor: RepositoryDescriptor = serde_json::from_str(&body)?;
        info!(owner, repo, fields = descriptor.len(), "Fetched repository metadata");
        Ok(descriptor)
    }

    /// Fetches several repositories concurrently. Results keep the order of
    /// `slugs`; the first failure fails the whole batch.
    pub async fn fetch_many(&self, slugs: &[RepoSlug]) -> Result<Vec<RepositoryDescriptor>> {
        debug!(count = slugs.len(), "Fetching repositories");
        try_join_all(slugs.iter().map(|slug| self.fetch(&slug.owner, &slug.repo))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base_url: &str) -> GitHubClient {
        GitHubClient::with_config(
            "secret".to_string(),
            ClientConfig {
                base_url: base_url.to_string(),
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn builds_default_repo_url() {
        let client = GitHubClient::new("secret".to_string()).unwrap();
        let url = client.repo_url("rust-lang", "rust").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/repos/rust-lang/rust");
    }

    #[test]
    fn trailing_slash_does_not_double_up() {
        let client = client_for("https://api.github.com/");
        let url = client.repo_url("octocat", "Hello-World").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/repos/octocat/Hello-World");
    }

    #[test]
    fn keeps_enterprise_path_prefix() {
        let client = client_for("https://ghe.example.com/api/v3/");
        let url = client.repo_url("team", "service").unwrap();
        assert_eq!(url.as_str(), "https://ghe.example.com/api/v3/repos/team/service");
    }

    #[test]
    fn percent_encodes_each_segment() {
        let client = GitHubClient::new("secret".to_string()).unwrap();
        let url = client.repo_url("my org", "a/b?c#d").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.github.com/repos/my%20org/a%2Fb%3Fc%23d"
        );
        assert_eq!(url.path_segments().unwrap().count(), 3);
    }

    #[test]
    fn authorization_header_is_verbatim() {
        let client = GitHubClient::new("ghp_abc123".to_string()).unwrap();
        assert_eq!(client.authorization_header(), "token ghp_abc123");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        let result = GitHubClient::with_config(
            "secret".to_string(),
            ClientConfig {
                base_url: "mailto:someone@example.com".to_string(),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(StarChartError::InvalidBaseUrl(_))));

        let result = GitHubClient::with_config(
            "secret".to_string(),
            ClientConfig {
                base_url: "not a url".to_string(),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(StarChartError::InvalidBaseUrl(_))));
    }
}
