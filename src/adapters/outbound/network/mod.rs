/// Network adapters for external API calls
mod github_client;
mod http_client;

pub use github_client::GitHubMetadataFetcher;
pub use http_client::ReqwestHttpClient;
