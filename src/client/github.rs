//! GitHub API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use super::{GitHubApi, Organization, Repository, RepositoryDetails};
use crate::error::{ApiError, Error, Result};

/// GitHub API base URL
const API_BASE_URL: &str = "https://api.github.com";

/// Identifying client header, required by the GitHub API
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// Versioned JSON media type for regular endpoints
const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

/// Raw media type, used for the readme endpoint
const ACCEPT_RAW: &str = "application/vnd.github.v3.raw";

/// Repository listings are fetched as a single page of this size.
/// Accounts with more repositories than this are truncated.
const LIST_PAGE_SIZE: u32 = 100;

/// GitHub API client
pub struct GitHubClient {
    http: HttpClient,
    base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub API client.
    ///
    /// `api_host` overrides the base URL (used for testing against a mock
    /// server); it falls back to the `FOLIO_API_HOST` environment variable,
    /// then to the real API.
    pub fn new(api_host: Option<&str>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url = api_host
            .map(str::to_string)
            .or_else(|| std::env::var("FOLIO_API_HOST").ok())
            .unwrap_or_else(|| API_BASE_URL.to_string());

        Ok(Self { http, base_url })
    }

    /// Issue a GET request and deserialize the JSON response
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(path, ACCEPT_JSON).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
            .map_err(Into::into)
    }

    /// Issue a GET request and return the raw response body
    async fn get_text(&self, path: &str) -> Result<String> {
        let response = self.request(path, ACCEPT_RAW).await?;
        response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))
            .map_err(Into::into)
    }

    /// Send the request and map failure statuses to API errors.
    ///
    /// Every non-2xx surfaces as `Upstream`, a 404 included: on the
    /// listing endpoints a 404 is an account-level failure, not a
    /// missing project. Only the single-repository fetch narrows a 404
    /// to `NotFound`, in `get_repo`.
    async fn request(&self, path: &str, accept: &str) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", accept)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| format!("Status {}", status));
            Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            }
            .into())
        }
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_user_repos(&self, account: &str) -> Result<Vec<Repository>> {
        let path = format!(
            "/users/{}/repos?per_page={}&sort=pushed",
            account, LIST_PAGE_SIZE
        );
        self.get_json(&path).await
    }

    async fn list_user_orgs(&self, account: &str) -> Result<Vec<Organization>> {
        let path = format!("/users/{}/orgs", account);
        self.get_json(&path).await
    }

    async fn list_org_repos(&self, org: &str) -> Result<Vec<Repository>> {
        let path = format!("/orgs/{}/repos?per_page={}&sort=pushed", org, LIST_PAGE_SIZE);
        self.get_json(&path).await
    }

    async fn get_repo(&self, owner: &str, repo: &str) -> Result<RepositoryDetails> {
        let path = format!("/repos/{}/{}", owner, repo);
        match self.get_json(&path).await {
            Err(Error::Api(ApiError::Upstream { status: 404, .. })) => {
                Err(ApiError::NotFound(format!("{}/{}", owner, repo)).into())
            }
            other => other,
        }
    }

    async fn get_readme(&self, owner: &str, repo: &str) -> Result<String> {
        let path = format!("/repos/{}/{}/readme", owner, repo);
        self.get_text(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GitHubClient::new(None);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_honors_host_override() {
        let client = GitHubClient::new(Some("http://localhost:9999")).unwrap();
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[tokio::test]
    async fn test_get_repo_maps_404_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/owner/missing-repo")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let client = GitHubClient::new(Some(&server.url())).unwrap();
        let err = client.get_repo("owner", "missing-repo").await.unwrap_err();

        match err {
            Error::Api(ApiError::NotFound(resource)) => {
                assert!(resource.contains("owner/missing-repo"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_user_repos_404_is_upstream_not_missing_repo() {
        // A 404 on the listing means the account does not exist; it must
        // not be reported as a missing repository.
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/ghost-account/repos?per_page=100&sort=pushed")
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let client = GitHubClient::new(Some(&server.url())).unwrap();
        let err = client.list_user_repos("ghost-account").await.unwrap_err();

        match err {
            Error::Api(ApiError::Upstream { status: 404, .. }) => (),
            other => panic!("Expected Upstream, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_user_repos_maps_500_to_upstream() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "GET",
                "/users/maxime/repos?per_page=100&sort=pushed",
            )
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = GitHubClient::new(Some(&server.url())).unwrap();
        let err = client.list_user_repos("maxime").await.unwrap_err();

        match err {
            Error::Api(ApiError::Upstream { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected Upstream, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_requests_carry_identifying_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/maxime/orgs")
            .match_header("user-agent", mockito::Matcher::Regex("^folio/".to_string()))
            .match_header("accept", "application/vnd.github.v3+json")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let client = GitHubClient::new(Some(&server.url())).unwrap();
        let orgs = client.list_user_orgs("maxime").await.unwrap();

        assert!(orgs.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_readme_uses_raw_media_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/maxime/folio/readme")
            .match_header("accept", "application/vnd.github.v3.raw")
            .with_status(200)
            .with_body("# Folio\n")
            .create_async()
            .await;

        let client = GitHubClient::new(Some(&server.url())).unwrap();
        let readme = client.get_readme("maxime", "folio").await.unwrap();

        assert_eq!(readme, "# Folio\n");
        mock.assert_async().await;
    }
}
