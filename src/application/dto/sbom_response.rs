use crate::application::read_models::SbomReadModel;
use crate::sbom_generation::domain::{DependencyRecord, Platform, SkipReason};
use std::path::PathBuf;

/// A declared dependency that was left out of the BOM, and why
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDependency {
    pub name: String,
    pub platform: Platform,
    pub reason: SkipReason,
}

/// SbomResponse - Result of the SBOM generation use case
#[derive(Debug, Clone)]
pub struct SbomResponse {
    /// CocoaPods records followed by Swift package records, in extraction order
    pub records: Vec<DependencyRecord>,
    pub skipped: Vec<SkippedDependency>,
    /// The assembled BOM, ready for formatting
    pub read_model: SbomReadModel,
}

impl SbomResponse {
    pub fn new(
        records: Vec<DependencyRecord>,
        skipped: Vec<SkippedDependency>,
        read_model: SbomReadModel,
    ) -> Self {
        Self {
            records,
            skipped,
            read_model,
        }
    }
}

/// Outcome of an archive download pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: Vec<PathBuf>,
    /// Records without a download URL
    pub skipped: usize,
    /// Transport errors, non-success statuses and write failures
    pub failed: usize,
}
