//! CocoaPods value objects: lockfile entries, resolved specifications and
//! target definitions.

use super::Author;
use std::collections::HashMap;

/// Build configuration a pod must be whitelisted for when a target filter applies
pub const RELEASE_CONFIGURATION: &str = "Release";

/// A resolved pod as listed in Podfile.lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodDependency {
    pub name: String,
    /// Version resolved by the lockfile
    pub version: Option<String>,
    /// Requirement declared in the Podfile, e.g. `~> 5.6`
    pub requirement: Option<String>,
}

impl PodDependency {
    pub fn new(name: impl Into<String>, version: Option<String>, requirement: Option<String>) -> Self {
        Self {
            name: name.into(),
            version,
            requirement,
        }
    }

    /// Root specification name (`Firebase/Core` -> `Firebase`)
    pub fn root_name(&self) -> &str {
        root_name(&self.name)
    }
}

pub fn root_name(name: &str) -> &str {
    name.split('/').next().unwrap_or(name)
}

/// Where a pod's source code lives
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PodSource {
    pub git: Option<String>,
    pub http: Option<String>,
    pub tag: Option<String>,
}

impl PodSource {
    /// Base URL for archive derivation: git if present, otherwise http
    pub fn base_url(&self) -> Option<&str> {
        self.git
            .as_deref()
            .filter(|g| !g.is_empty())
            .or(self.http.as_deref())
    }
}

/// The resolved specification of a pod (the fields a podspec provides)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PodSpecification {
    pub name: String,
    pub version: Option<String>,
    pub license: Option<String>,
    pub authors: Vec<Author>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub source: PodSource,
}

/// `CHECKOUT OPTIONS` entry of Podfile.lock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutOptions {
    pub commit: Option<String>,
}

/// Parsed Podfile.lock contents the extractor consumes
#[derive(Debug, Clone, Default)]
pub struct PodfileLock {
    pub pods: Vec<PodDependency>,
    pub checkout_options: HashMap<String, CheckoutOptions>,
}

impl PodfileLock {
    /// Lockfile commit pinned for a pod (looked up by root name)
    pub fn commit_for(&self, pod_name: &str) -> Option<&str> {
        self.checkout_options
            .get(pod_name)
            .or_else(|| self.checkout_options.get(root_name(pod_name)))
            .and_then(|options| options.commit.as_deref())
    }
}

/// A Podfile target definition selecting which pods apply to which build configurations
///
/// Pods without a whitelist entry are included in every configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetDefinition {
    pub name: String,
    pub configuration_whitelist: HashMap<String, Vec<String>>,
}

impl TargetDefinition {
    pub fn new(name: impl Into<String>, configuration_whitelist: HashMap<String, Vec<String>>) -> Self {
        Self {
            name: name.into(),
            configuration_whitelist,
        }
    }

    pub fn is_whitelisted_for_configuration(&self, pod_name: &str, configuration: &str) -> bool {
        let whitelist = self
            .configuration_whitelist
            .get(pod_name)
            .or_else(|| self.configuration_whitelist.get(root_name(pod_name)));

        match whitelist {
            None => true,
            Some(configurations) => configurations
                .iter()
                .any(|c| c.eq_ignore_ascii_case(configuration)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_name_of_subspec() {
        let dep = PodDependency::new("Firebase/Core", Some("10.0.0".to_string()), None);
        assert_eq!(dep.root_name(), "Firebase");
        assert_eq!(root_name("Alamofire"), "Alamofire");
    }

    #[test]
    fn test_source_base_url_prefers_git() {
        let source = PodSource {
            git: Some("https://github.com/a/b.git".to_string()),
            http: Some("https://cdn.example.com/b.zip".to_string()),
            tag: None,
        };
        assert_eq!(source.base_url(), Some("https://github.com/a/b.git"));

        let http_only = PodSource {
            git: None,
            http: Some("https://cdn.example.com/b".to_string()),
            tag: None,
        };
        assert_eq!(http_only.base_url(), Some("https://cdn.example.com/b"));
    }

    #[test]
    fn test_commit_for_subspec_uses_root_checkout() {
        let mut lock = PodfileLock::default();
        lock.checkout_options.insert(
            "Firebase".to_string(),
            CheckoutOptions {
                commit: Some("deadbeef".to_string()),
            },
        );
        assert_eq!(lock.commit_for("Firebase/Core"), Some("deadbeef"));
        assert_eq!(lock.commit_for("Alamofire"), None);
    }

    #[test]
    fn test_pod_without_whitelist_is_included() {
        let target = TargetDefinition::new("App", HashMap::new());
        assert!(target.is_whitelisted_for_configuration("Alamofire", RELEASE_CONFIGURATION));
    }

    #[test]
    fn test_debug_only_pod_is_not_whitelisted_for_release() {
        let mut whitelist = HashMap::new();
        whitelist.insert("FLEX".to_string(), vec!["Debug".to_string()]);
        whitelist.insert("Sentry".to_string(), vec!["release".to_string()]);
        let target = TargetDefinition::new("App", whitelist);

        assert!(!target.is_whitelisted_for_configuration("FLEX", RELEASE_CONFIGURATION));
        assert!(target.is_whitelisted_for_configuration("Sentry", RELEASE_CONFIGURATION));
    }
}
