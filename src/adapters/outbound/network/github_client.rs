use crate::ports::outbound::{HttpClient, RepositoryMetadataProvider};
use crate::sbom_generation::domain::source_archive::normalize_repository_url;
use crate::sbom_generation::domain::RepositoryMetadata;
use crate::shared::Result;
use owo_colors::OwoColorize;
use serde::Deserialize;

const GITHUB_WEB_HOST: &str = "github.com";
const GITHUB_API_PREFIX: &str = "api.github.com/repos";
const ACCEPT_HEADER: &str = "application/vnd.github+json";

#[derive(Debug, Deserialize)]
struct GitHubRepository {
    #[serde(default)]
    license: Option<GitHubLicense>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GitHubLicense {
    #[serde(default)]
    spdx_id: Option<String>,
}

/// GitHubMetadataFetcher adapter reading license and description from the
/// GitHub repository API
///
/// `https://github.com/<owner>/<repo>` is queried as
/// `https://api.github.com/repos/<owner>/<repo>`. A non-success status is
/// reported as a warning and yields no metadata.
pub struct GitHubMetadataFetcher<H> {
    http_client: H,
    token: Option<String>,
}

impl<H: HttpClient> GitHubMetadataFetcher<H> {
    pub fn new(http_client: H, token: Option<String>) -> Self {
        Self {
            http_client,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Rewrites a `github.com` (or `www.github.com`) host to the REST API
    /// prefix, leaving the path intact. Other hosts are returned unchanged.
    fn api_url(repository_url: &str) -> String {
        let normalized = normalize_repository_url(repository_url);
        let (scheme, rest) = normalized
            .split_once("://")
            .unwrap_or(("https", normalized.as_str()));
        let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
        let host = host.strip_prefix("www.").unwrap_or(host);

        if host.eq_ignore_ascii_case(GITHUB_WEB_HOST) {
            format!("{}://{}/{}", scheme, GITHUB_API_PREFIX, path)
        } else {
            normalized
        }
    }
}

impl<H: HttpClient> RepositoryMetadataProvider for GitHubMetadataFetcher<H> {
    fn fetch_metadata(&self, repository_url: &str) -> Result<Option<RepositoryMetadata>> {
        let url = Self::api_url(repository_url);
        let authorization = self.token.as_ref().map(|t| format!("Bearer {}", t));

        let mut headers = vec![("Accept", ACCEPT_HEADER)];
        if let Some(authorization) = authorization.as_deref() {
            headers.push(("Authorization", authorization));
        }

        let response = self.http_client.get(&url, &headers)?;
        if !response.is_success() {
            eprintln!(
                "{}",
                format!(
                    "⚠️  Warning: GitHub API request for {} failed: {}",
                    repository_url,
                    response.status_message()
                )
                .yellow()
            );
            return Ok(None);
        }

        let repository: GitHubRepository = response.json()?;
        Ok(Some(RepositoryMetadata::new(
            repository.license.and_then(|l| l.spdx_id),
            repository.description,
        )))
    }
}
