use crate::sbom_generation::domain::source_archive::normalize_repository_url;
use crate::sbom_generation::domain::{
    DependencyRecord, ExtractionOutcome, PackageRequirement, Platform, ProjectObject,
    RepositoryMetadata, SkipReason,
};
use std::collections::HashMap;

/// A remote Swift package product selected from the project graph,
/// before metadata enrichment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftPackageCandidate {
    pub name: String,
    pub version: Option<String>,
    pub commit: Option<String>,
    /// Repository URL without `.git` suffix or trailing slash
    pub website: String,
}

impl SwiftPackageCandidate {
    fn new(product_name: &str, repository_url: &str, requirement: &PackageRequirement) -> Self {
        Self {
            name: product_name.to_string(),
            version: requirement.version.clone(),
            commit: requirement.commit().map(str::to_string),
            website: normalize_repository_url(repository_url),
        }
    }

    /// GitHub-hosted packages must be enriched before they are recorded
    pub fn requires_github_metadata(&self) -> bool {
        self.website.contains("github.com")
    }
}

/// SwiftPackageExtractor service turning project graph nodes into dependency records
pub struct SwiftPackageExtractor;

impl SwiftPackageExtractor {
    /// Selects remote package products whose package is a remote reference
    ///
    /// Local and binary packages, and products with no package, are ignored.
    /// Candidates keep the order of the product nodes in the project.
    pub fn select(objects: &[ProjectObject]) -> Vec<SwiftPackageCandidate> {
        let references: HashMap<&str, (&str, &PackageRequirement)> = objects
            .iter()
            .filter_map(|object| match object {
                ProjectObject::RemotePackageReference {
                    id,
                    repository_url,
                    requirement,
                } => Some((id.as_str(), (repository_url.as_str(), requirement))),
                _ => None,
            })
            .collect();

        objects
            .iter()
            .filter_map(|object| match object {
                ProjectObject::RemotePackageProductDependency {
                    product_name,
                    package: Some(package),
                    ..
                } => references
                    .get(package.as_str())
                    .map(|(url, requirement)| {
                        SwiftPackageCandidate::new(product_name, url, requirement)
                    }),
                _ => None,
            })
            .collect()
    }

    /// Builds the record for a candidate
    ///
    /// `metadata` is only consulted for GitHub-hosted packages; for those a
    /// missing value drops the dependency.
    pub fn extract(
        candidate: SwiftPackageCandidate,
        metadata: Option<RepositoryMetadata>,
    ) -> ExtractionOutcome {
        let metadata = if candidate.requires_github_metadata() {
            match metadata {
                Some(metadata) => metadata,
                None => {
                    return ExtractionOutcome::skipped(
                        candidate.name,
                        SkipReason::MetadataUnavailable,
                    )
                }
            }
        } else {
            RepositoryMetadata::default()
        };

        let built = DependencyRecord::builder(candidate.name.clone(), Platform::Spm)
            .version(candidate.version)
            .commit(candidate.commit)
            .license(metadata.license().map(str::to_string))
            .description(metadata.description().map(str::to_string))
            .source_repository(Some(candidate.website.clone()))
            .website(Some(candidate.website))
            .build();

        match built {
            Ok(record) => ExtractionOutcome::Included(record),
            Err(e) => ExtractionOutcome::skipped(
                candidate.name,
                SkipReason::InvalidRecord {
                    details: e.to_string(),
                },
            ),
        }
    }
}
