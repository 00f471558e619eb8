use crate::sbom_generation::domain::ProjectObject;
use crate::shared::Result;
use std::path::Path;

/// ProjectReader port for reading an Xcode project's object graph
pub trait ProjectReader {
    /// Reads the typed objects of a project
    ///
    /// # Arguments
    /// * `project_path` - An `.xcodeproj` bundle or its `project.pbxproj` file
    ///
    /// # Returns
    /// All objects in file order
    ///
    /// # Errors
    /// Returns an error if the project cannot be read or parsed
    fn read_project_objects(&self, project_path: &Path) -> Result<Vec<ProjectObject>>;
}
