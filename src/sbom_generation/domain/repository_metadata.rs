/// License and description reported by a repository host for a package
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryMetadata {
    license: Option<String>,
    description: Option<String>,
}

impl RepositoryMetadata {
    pub fn new(license: Option<String>, description: Option<String>) -> Self {
        Self {
            license,
            description,
        }
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
