use crate::sbom_generation::domain::PodfileLock;
use crate::shared::Result;
use std::path::Path;

/// PodfileLockReader port for reading CocoaPods lockfiles
pub trait PodfileLockReader {
    /// Reads and parses the Podfile.lock at `lockfile_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The YAML is malformed
    fn read_podfile_lock(&self, lockfile_path: &Path) -> Result<PodfileLock>;
}
