use crate::sbom_generation::domain::RepositoryMetadata;
use crate::shared::Result;

/// RepositoryMetadataProvider port for enriching packages from their repository host
pub trait RepositoryMetadataProvider {
    /// Fetches license and description for a repository web URL
    ///
    /// # Returns
    /// `Ok(None)` when the host answered but had no metadata for us (the
    /// implementation reports the reason). The caller decides whether that
    /// drops the dependency.
    ///
    /// # Errors
    /// Returns an error for transport failures
    fn fetch_metadata(&self, repository_url: &str) -> Result<Option<RepositoryMetadata>>;
}
