use crate::application::dto::{SbomRequest, SbomResponse, SkippedDependency};
use crate::application::read_models::BomAssembler;
use crate::ports::outbound::{
    PodSpecificationSource, PodfileLockReader, ProgressReporter, ProjectReader,
    RepositoryMetadataProvider,
};
use crate::sbom_generation::domain::{
    DependencyRecord, ExtractionOutcome, Platform, RepositoryMetadata, SkipReason,
};
use crate::sbom_generation::services::{
    CocoaPodsExtractor, SbomGenerator, SwiftPackageCandidate, SwiftPackageExtractor,
};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::Path;

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Runs both extractors sequentially, concatenates their records
/// (CocoaPods first) and assembles the BOM.
///
/// # Type Parameters
/// * `LR` - PodfileLockReader implementation
/// * `SS` - PodSpecificationSource implementation
/// * `PJ` - ProjectReader implementation
/// * `MP` - RepositoryMetadataProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<LR, SS, PJ, MP, PR> {
    lockfile_reader: LR,
    specification_source: SS,
    project_reader: PJ,
    metadata_provider: MP,
    progress_reporter: PR,
}

impl<LR, SS, PJ, MP, PR> GenerateSbomUseCase<LR, SS, PJ, MP, PR>
where
    LR: PodfileLockReader,
    SS: PodSpecificationSource,
    PJ: ProjectReader,
    MP: RepositoryMetadataProvider,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        lockfile_reader: LR,
        specification_source: SS,
        project_reader: PJ,
        metadata_provider: MP,
        progress_reporter: PR,
    ) -> Self {
        Self {
            lockfile_reader,
            specification_source,
            project_reader,
            metadata_provider,
            progress_reporter,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// Per-dependency problems are reported and recorded in
    /// [`SbomResponse::skipped`]; only unreadable inputs fail the run.
    pub fn execute(&self, request: &SbomRequest) -> Result<SbomResponse> {
        if request.podfile_lock_path.is_none() && request.xcode_project_path.is_none() {
            return Err(SbomError::NoDependencySources {
                path: request.project_path.clone(),
            }
            .into());
        }

        let mut records = Vec::new();
        let mut skipped = Vec::new();

        if let Some(lockfile_path) = &request.podfile_lock_path {
            self.extract_cocoapods(lockfile_path, request, &mut records, &mut skipped)?;
        }
        let cocoapods_count = records.len();

        if let Some(project_path) = &request.xcode_project_path {
            self.extract_swift_packages(project_path, &mut records, &mut skipped)?;
        }

        self.progress_reporter.report(&format!(
            "✅ Collected {} dependencies ({} CocoaPods, {} Swift packages, {} skipped)",
            records.len(),
            cocoapods_count,
            records.len() - cocoapods_count,
            skipped.len()
        ));

        let metadata = SbomGenerator::generate_default_metadata(
            &request.component_name,
            &request.component_version,
        );
        let read_model = BomAssembler::assemble(&records, &metadata, &request.purl_options);

        Ok(SbomResponse::new(records, skipped, read_model))
    }

    fn extract_cocoapods(
        &self,
        lockfile_path: &Path,
        request: &SbomRequest,
        records: &mut Vec<DependencyRecord>,
        skipped: &mut Vec<SkippedDependency>,
    ) -> Result<()> {
        self.progress_reporter.report(&format!(
            "📖 Loading Podfile.lock from: {}",
            lockfile_path.display()
        ));

        let lockfile = self.lockfile_reader.read_podfile_lock(lockfile_path)?;
        self.progress_reporter
            .report(&format!("   - Resolved pods: {}", lockfile.pods.len()));

        let extractor = CocoaPodsExtractor::new(&lockfile, request.target.as_ref());

        for dependency in &lockfile.pods {
            if let Some(reason) = extractor.exclusion(dependency) {
                self.progress_reporter
                    .report(&format!("   - Skipping {}: {}", dependency.name, reason));
                skipped.push(SkippedDependency {
                    name: dependency.name.clone(),
                    platform: Platform::CocoaPods,
                    reason,
                });
                continue;
            }

            let outcome = match self.specification_source.find_specification(dependency) {
                Ok(specification) => extractor.extract(dependency, specification.as_ref()),
                Err(e) => ExtractionOutcome::skipped(
                    dependency.name.clone(),
                    SkipReason::SpecificationUnreadable {
                        details: e.to_string(),
                    },
                ),
            };
            self.collect(outcome, Platform::CocoaPods, records, skipped);
        }

        Ok(())
    }

    fn extract_swift_packages(
        &self,
        project_path: &Path,
        records: &mut Vec<DependencyRecord>,
        skipped: &mut Vec<SkippedDependency>,
    ) -> Result<()> {
        self.progress_reporter.report(&format!(
            "📖 Loading Xcode project from: {}",
            project_path.display()
        ));

        let objects = self.project_reader.read_project_objects(project_path)?;
        let candidates = SwiftPackageExtractor::select(&objects);
        self.progress_reporter.report(&format!(
            "   - Remote Swift packages: {}",
            candidates.len()
        ));

        for candidate in candidates {
            let metadata = self.fetch_metadata(&candidate);
            let outcome = SwiftPackageExtractor::extract(candidate, metadata);
            self.collect(outcome, Platform::Spm, records, skipped);
        }

        Ok(())
    }

    /// Fetches repository metadata for GitHub-hosted candidates
    fn fetch_metadata(&self, candidate: &SwiftPackageCandidate) -> Option<RepositoryMetadata> {
        if !candidate.requires_github_metadata() {
            return None;
        }

        self.progress_reporter.report(&format!(
            "🔍 Fetching GitHub metadata for {}...",
            candidate.name
        ));

        match self.metadata_provider.fetch_metadata(&candidate.website) {
            Ok(metadata) => metadata,
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to fetch metadata for {}: {}",
                    candidate.name, e
                ));
                None
            }
        }
    }

    fn collect(
        &self,
        outcome: ExtractionOutcome,
        platform: Platform,
        records: &mut Vec<DependencyRecord>,
        skipped: &mut Vec<SkippedDependency>,
    ) {
        match outcome {
            ExtractionOutcome::Included(record) => records.push(record),
            ExtractionOutcome::Skipped { name, reason } => {
                let message = format!("Skipping {} ({}): {}", name, platform, reason);
                match reason {
                    SkipReason::NotWhitelistedForRelease { .. } => {
                        self.progress_reporter.report(&format!("   - {}", message))
                    }
                    _ => self
                        .progress_reporter
                        .report_error(&format!("⚠️  Warning: {}", message)),
                }
                skipped.push(SkippedDependency {
                    name,
                    platform,
                    reason,
                });
            }
        }
    }
}
