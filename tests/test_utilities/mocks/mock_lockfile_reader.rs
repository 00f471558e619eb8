use cocoa_sbom::prelude::*;
use std::path::Path;

/// Mock PodfileLockReader for testing
pub struct MockPodfileLockReader {
    pub lockfile: PodfileLock,
    pub should_fail: bool,
}

impl MockPodfileLockReader {
    pub fn new(lockfile: PodfileLock) -> Self {
        Self {
            lockfile,
            should_fail: false,
        }
    }

    /// Lockfile resolving the given `(name, version)` pods
    pub fn with_pods(pods: &[(&str, &str)]) -> Self {
        let pods = pods
            .iter()
            .map(|(name, version)| PodDependency::new(*name, Some(version.to_string()), None))
            .collect();
        Self::new(PodfileLock {
            pods,
            ..Default::default()
        })
    }

    pub fn with_failure() -> Self {
        Self {
            lockfile: PodfileLock::default(),
            should_fail: true,
        }
    }

    /// Pins `name` to `commit` through the lockfile's checkout options
    pub fn with_commit(mut self, name: &str, commit: &str) -> Self {
        self.lockfile.checkout_options.insert(
            name.to_string(),
            CheckoutOptions {
                commit: Some(commit.to_string()),
            },
        );
        self
    }
}

impl PodfileLockReader for MockPodfileLockReader {
    fn read_podfile_lock(&self, _lockfile_path: &Path) -> Result<PodfileLock> {
        if self.should_fail {
            anyhow::bail!("Mock Podfile.lock read failure");
        }
        Ok(self.lockfile.clone())
    }
}
