//! Typed nodes of an Xcode project object graph.

/// Version requirement of a remote Swift package reference
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRequirement {
    pub version: Option<String>,
    pub revision: Option<String>,
    pub branch: Option<String>,
}

impl PackageRequirement {
    /// Pinned source revision; a branch requirement counts equally
    pub fn commit(&self) -> Option<&str> {
        self.revision
            .as_deref()
            .filter(|r| !r.is_empty())
            .or(self.branch.as_deref())
    }
}

/// A node from the `objects` table of project.pbxproj
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectObject {
    /// `XCSwiftPackageProductDependency`
    RemotePackageProductDependency {
        id: String,
        product_name: String,
        /// Id of the package reference node, absent for local products
        package: Option<String>,
    },
    /// `XCRemoteSwiftPackageReference`
    RemotePackageReference {
        id: String,
        repository_url: String,
        requirement: PackageRequirement,
    },
    /// Any other `isa`, including `XCLocalSwiftPackageReference`
    Other { id: String, isa: String },
}

impl ProjectObject {
    pub fn id(&self) -> &str {
        match self {
            ProjectObject::RemotePackageProductDependency { id, .. }
            | ProjectObject::RemotePackageReference { id, .. }
            | ProjectObject::Other { id, .. } => id,
        }
    }
}
