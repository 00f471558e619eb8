use crate::sbom_generation::domain::{PodDependency, PodSpecification};
use crate::shared::Result;

/// PodSpecificationSource port for resolving a pod's specification
pub trait PodSpecificationSource {
    /// Looks up the resolved specification for a lockfile entry
    ///
    /// # Returns
    /// `Ok(None)` when no specification exists for the pod at its resolved version
    ///
    /// # Errors
    /// Returns an error if a specification exists but cannot be read or parsed
    fn find_specification(&self, dependency: &PodDependency) -> Result<Option<PodSpecification>>;
}
