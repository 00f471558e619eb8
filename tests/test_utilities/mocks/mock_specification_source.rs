use cocoa_sbom::prelude::*;
use std::collections::HashMap;

/// Mock PodSpecificationSource keyed by root pod name
#[derive(Default)]
pub struct MockSpecificationSource {
    specs: HashMap<String, PodSpecification>,
}

impl MockSpecificationSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a GitHub-hosted pod released under `version`
    pub fn with_github_pod(mut self, name: &str, version: &str, repository: &str, license: &str) -> Self {
        self.specs.insert(
            name.to_string(),
            PodSpecification {
                name: name.to_string(),
                version: Some(version.to_string()),
                license: Some(license.to_string()),
                authors: vec![Author::new(format!("{} Authors", name), None)],
                summary: Some(format!("{} summary", name)),
                description: None,
                homepage: None,
                source: PodSource {
                    git: Some(format!("{}.git", repository)),
                    http: None,
                    tag: None,
                },
            },
        );
        self
    }

    pub fn with_spec(mut self, spec: PodSpecification) -> Self {
        self.specs.insert(spec.name.clone(), spec);
        self
    }
}

impl PodSpecificationSource for MockSpecificationSource {
    fn find_specification(&self, dependency: &PodDependency) -> Result<Option<PodSpecification>> {
        Ok(self.specs.get(dependency.root_name()).cloned())
    }
}
