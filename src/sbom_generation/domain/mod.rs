pub mod dependency_record;
pub mod extraction;
pub mod pod;
pub mod project_object;
pub mod repository_metadata;
pub mod sbom_metadata;
pub mod source_archive;

pub use dependency_record::{Author, DependencyRecord, Platform};
pub use extraction::{ExtractionOutcome, SkipReason};
pub use pod::{
    CheckoutOptions, PodDependency, PodSource, PodSpecification, PodfileLock, TargetDefinition,
};
pub use project_object::{PackageRequirement, ProjectObject};
pub use repository_metadata::RepositoryMetadata;
pub use sbom_metadata::SbomMetadata;
