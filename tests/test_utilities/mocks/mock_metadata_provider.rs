use cocoa_sbom::prelude::*;
use std::collections::HashMap;

/// Mock RepositoryMetadataProvider; unknown repositories yield no metadata
#[derive(Default)]
pub struct MockMetadataProvider {
    metadata: HashMap<String, RepositoryMetadata>,
    failing: Vec<String>,
}

impl MockMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, repository_url: &str, license: &str, description: &str) -> Self {
        self.metadata.insert(
            repository_url.to_string(),
            RepositoryMetadata::new(Some(license.to_string()), Some(description.to_string())),
        );
        self
    }

    /// Simulates a transport error for `repository_url`
    pub fn with_failure(mut self, repository_url: &str) -> Self {
        self.failing.push(repository_url.to_string());
        self
    }
}

impl RepositoryMetadataProvider for MockMetadataProvider {
    fn fetch_metadata(&self, repository_url: &str) -> Result<Option<RepositoryMetadata>> {
        if self.failing.iter().any(|url| url == repository_url) {
            anyhow::bail!("Mock network failure for {}", repository_url);
        }
        Ok(self.metadata.get(repository_url).cloned())
    }
}
