//! cocoa-sbom - SBOM generation tool for CocoaPods and Swift Package Manager projects
//!
//! This library reads the dependencies an iOS/macOS application declares in
//! `Podfile.lock` and in its Xcode project's Swift package references, and
//! emits a CycloneDX 1.4 JSON Software Bill of Materials (SBOM). It follows
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Dependency records, extractors and PURL policies
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use cocoa_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case with injected adapters
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     PodspecRepository::new(".", PodspecRepository::default_spec_repositories()),
//!     FileSystemReader::new(),
//!     GitHubMetadataFetcher::new(ReqwestHttpClient::new()?, None),
//!     StderrProgressReporter::new(false),
//! );
//!
//! // Execute
//! let request = SbomRequest::builder()
//!     .podfile_lock_path(Some(PathBuf::from("Podfile.lock")))
//!     .component_name("MyApp")
//!     .component_version("1.0.0")
//!     .output_path("sbom.json")
//!     .build()?;
//! let response = use_case.execute(&request)?;
//!
//! // Format output
//! let output = CycloneDxFormatter::new().format(&response.read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, PodspecRepository,
    };
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::adapters::outbound::network::{GitHubMetadataFetcher, ReqwestHttpClient};
    pub use crate::application::dto::{
        DownloadSummary, SbomRequest, SbomResponse, SkippedDependency,
    };
    pub use crate::application::read_models::{BomAssembler, ComponentView, SbomReadModel};
    pub use crate::application::use_cases::{DownloadArchivesUseCase, GenerateSbomUseCase};
    pub use crate::ports::outbound::{
        HttpClient, HttpResponse, OutputPresenter, PodSpecificationSource, PodfileLockReader,
        ProgressReporter, ProjectReader, RepositoryMetadataProvider, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        Author, CheckoutOptions, DependencyRecord, PackageRequirement, Platform, PodDependency,
        PodSource, PodSpecification, PodfileLock, ProjectObject, RepositoryMetadata,
        SbomMetadata, SkipReason, TargetDefinition,
    };
    pub use crate::sbom_generation::policies::{PurlOptions, PurlStrategy};
    pub use crate::sbom_generation::services::{PurlSynthesizer, SbomGenerator};
    pub use crate::shared::Result;
}
