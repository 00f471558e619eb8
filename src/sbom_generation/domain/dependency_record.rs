use super::source_archive;
use crate::shared::Result;
use std::fmt;

/// Maximum length for dependency names
const MAX_NAME_LENGTH: usize = 255;

/// Dependency ecosystem a record was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    CocoaPods,
    Spm,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::CocoaPods => "cocoapods",
            Platform::Spm => "spm",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Author value object (name plus optional email)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    name: String,
    email: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            name: name.into(),
            email: email.filter(|e| !e.is_empty()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} <{}>", self.name, email),
            None => f.write_str(&self.name),
        }
    }
}

/// One third-party dependency, independent of the ecosystem it came from.
///
/// Records are immutable once built. The download URL is derived at build
/// time from the source repository and the `commit > tag > version` ref
/// precedence, so it can never disagree with the record's own refs.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyRecord {
    name: String,
    version: Option<String>,
    requires: Option<String>,
    platform: Platform,
    license: Option<String>,
    authors: Vec<Author>,
    summary: Option<String>,
    description: Option<String>,
    website: Option<String>,
    download_url: Option<String>,
    tag: Option<String>,
    commit: Option<String>,
}

impl DependencyRecord {
    pub fn builder(name: impl Into<String>, platform: Platform) -> DependencyRecordBuilder {
        DependencyRecordBuilder::new(name.into(), platform)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn requires(&self) -> Option<&str> {
        self.requires.as_deref()
    }

    /// Component type; every dependency is recorded as a library
    pub fn component_type(&self) -> &'static str {
        "library"
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn commit(&self) -> Option<&str> {
        self.commit.as_deref()
    }
}

/// Builder for [`DependencyRecord`]
#[derive(Debug, Clone)]
pub struct DependencyRecordBuilder {
    record: DependencyRecord,
    source_repository: Option<String>,
}

impl DependencyRecordBuilder {
    fn new(name: String, platform: Platform) -> Self {
        Self {
            record: DependencyRecord {
                name,
                version: None,
                requires: None,
                platform,
                license: None,
                authors: Vec::new(),
                summary: None,
                description: None,
                website: None,
                download_url: None,
                tag: None,
                commit: None,
            },
            source_repository: None,
        }
    }

    pub fn version(mut self, version: Option<String>) -> Self {
        self.record.version = non_empty(version);
        self
    }

    pub fn requires(mut self, requires: Option<String>) -> Self {
        self.record.requires = non_empty(requires);
        self
    }

    pub fn license(mut self, license: Option<String>) -> Self {
        self.record.license = non_empty(license);
        self
    }

    pub fn authors(mut self, authors: Vec<Author>) -> Self {
        self.record.authors = authors;
        self
    }

    pub fn summary(mut self, summary: Option<String>) -> Self {
        self.record.summary = non_empty(summary);
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.record.description = non_empty(description);
        self
    }

    pub fn website(mut self, website: Option<String>) -> Self {
        self.record.website = non_empty(website);
        self
    }

    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.record.tag = non_empty(tag);
        self
    }

    pub fn commit(mut self, commit: Option<String>) -> Self {
        self.record.commit = non_empty(commit);
        self
    }

    /// Repository (git or http) the source archive is fetched from
    pub fn source_repository(mut self, url: Option<String>) -> Self {
        self.source_repository = non_empty(url);
        self
    }

    pub fn build(self) -> Result<DependencyRecord> {
        let mut record = self.record;

        if record.name.is_empty() {
            anyhow::bail!("Dependency name cannot be empty");
        }
        if record.name.len() > MAX_NAME_LENGTH {
            anyhow::bail!(
                "Dependency name is too long ({} bytes). Maximum allowed: {} bytes",
                record.name.len(),
                MAX_NAME_LENGTH
            );
        }

        record.download_url = source_archive::archive_url(
            self.source_repository.as_deref(),
            record.commit.as_deref(),
            record.tag.as_deref(),
            record.version.as_deref(),
        );

        Ok(record)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
