use crate::sbom_generation::domain::pod::RELEASE_CONFIGURATION;
use crate::sbom_generation::domain::source_archive::normalize_repository_url;
use crate::sbom_generation::domain::{
    DependencyRecord, ExtractionOutcome, Platform, PodDependency, PodSpecification, PodfileLock,
    SkipReason, TargetDefinition,
};

/// CocoaPodsExtractor service turning resolved pods into dependency records
///
/// Specification lookup happens outside (it needs I/O); this service only
/// applies the target filter and projects the resolved fields.
pub struct CocoaPodsExtractor<'a> {
    lockfile: &'a PodfileLock,
    target: Option<&'a TargetDefinition>,
}

impl<'a> CocoaPodsExtractor<'a> {
    pub fn new(lockfile: &'a PodfileLock, target: Option<&'a TargetDefinition>) -> Self {
        Self { lockfile, target }
    }

    /// Reason the dependency is filtered out before resolution, if any
    pub fn exclusion(&self, dependency: &PodDependency) -> Option<SkipReason> {
        let target = self.target?;
        if target.is_whitelisted_for_configuration(&dependency.name, RELEASE_CONFIGURATION) {
            None
        } else {
            Some(SkipReason::NotWhitelistedForRelease {
                target: target.name.clone(),
            })
        }
    }

    /// Builds the record for one pod from its resolved specification
    pub fn extract(
        &self,
        dependency: &PodDependency,
        specification: Option<&PodSpecification>,
    ) -> ExtractionOutcome {
        if let Some(reason) = self.exclusion(dependency) {
            return ExtractionOutcome::skipped(&dependency.name, reason);
        }

        let Some(spec) = specification else {
            return ExtractionOutcome::skipped(&dependency.name, SkipReason::SpecificationNotFound);
        };

        let website = spec
            .homepage
            .clone()
            .or_else(|| spec.source.git.as_deref().map(normalize_repository_url));

        let built = DependencyRecord::builder(dependency.name.clone(), Platform::CocoaPods)
            .version(spec.version.clone().or_else(|| dependency.version.clone()))
            .requires(dependency.requirement.clone())
            .license(spec.license.clone())
            .authors(spec.authors.clone())
            .summary(spec.summary.clone())
            .description(spec.description.clone())
            .website(website)
            .tag(spec.source.tag.clone())
            .commit(self.lockfile.commit_for(&dependency.name).map(str::to_string))
            .source_repository(spec.source.base_url().map(str::to_string))
            .build();

        match built {
            Ok(record) => ExtractionOutcome::Included(record),
            Err(e) => ExtractionOutcome::skipped(
                &dependency.name,
                SkipReason::InvalidRecord {
                    details: e.to_string(),
                },
            ),
        }
    }
}
