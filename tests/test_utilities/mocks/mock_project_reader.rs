use cocoa_sbom::prelude::*;
use std::path::Path;

/// Mock ProjectReader returning a fixed object graph
#[derive(Default)]
pub struct MockProjectReader {
    objects: Vec<ProjectObject>,
}

impl MockProjectReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a remote package reference and one product depending on it
    pub fn with_remote_package(
        mut self,
        product_name: &str,
        repository_url: &str,
        requirement: PackageRequirement,
    ) -> Self {
        let index = self.objects.len();
        let package_id = format!("REF{:04}", index);
        self.objects.push(ProjectObject::RemotePackageProductDependency {
            id: format!("PRD{:04}", index),
            product_name: product_name.to_string(),
            package: Some(package_id.clone()),
        });
        self.objects.push(ProjectObject::RemotePackageReference {
            id: package_id,
            repository_url: repository_url.to_string(),
            requirement,
        });
        self
    }

    /// Adds a product backed by a local package
    pub fn with_local_package(mut self, product_name: &str) -> Self {
        let index = self.objects.len();
        let package_id = format!("LOC{:04}", index);
        self.objects.push(ProjectObject::RemotePackageProductDependency {
            id: format!("PRD{:04}", index),
            product_name: product_name.to_string(),
            package: Some(package_id.clone()),
        });
        self.objects.push(ProjectObject::Other {
            id: package_id,
            isa: "XCLocalSwiftPackageReference".to_string(),
        });
        self
    }
}

impl ProjectReader for MockProjectReader {
    fn read_project_objects(&self, _project_path: &Path) -> Result<Vec<ProjectObject>> {
        Ok(self.objects.clone())
    }
}
