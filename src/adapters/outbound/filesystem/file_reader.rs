use super::pbxproj;
use crate::ports::outbound::{PodfileLockReader, ProjectReader};
use crate::sbom_generation::domain::{CheckoutOptions, PodDependency, PodfileLock, ProjectObject};
use crate::shared::error::SbomError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use serde_yaml_ng::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const PODFILE_LOCK_NAME: &str = "Podfile.lock";
const PBXPROJ_NAME: &str = "project.pbxproj";
const XCODEPROJ_EXTENSION: &str = "xcodeproj";

/// Dependency inputs found in a project directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredSources {
    pub podfile_lock: Option<PathBuf>,
    pub xcode_project: Option<PathBuf>,
}

/// FileSystemReader adapter for reading CocoaPods and Xcode inputs
///
/// This adapter implements both PodfileLockReader and ProjectReader ports.
/// All reads go through the regular-file and size checks in `shared::security`.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Looks for `Podfile.lock` and the first `*.xcodeproj` (by name) in `project_dir`
    pub fn discover_sources(&self, project_dir: &Path) -> Result<DiscoveredSources> {
        if !project_dir.is_dir() {
            return Err(SbomError::InvalidProjectPath {
                path: project_dir.to_path_buf(),
                reason: "Path does not exist or is not a directory".to_string(),
            }
            .into());
        }

        let lockfile = project_dir.join(PODFILE_LOCK_NAME);
        let podfile_lock = lockfile.is_file().then_some(lockfile);

        let entries = fs::read_dir(project_dir).map_err(|e| SbomError::InvalidProjectPath {
            path: project_dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut projects: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_dir()
                    && path.extension().and_then(|ext| ext.to_str()) == Some(XCODEPROJ_EXTENSION)
            })
            .collect();
        projects.sort();

        Ok(DiscoveredSources {
            podfile_lock,
            xcode_project: projects.into_iter().next(),
        })
    }

    fn parse_podfile_lock(content: &str) -> std::result::Result<PodfileLock, String> {
        let document: Value = serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?;
        if !document.is_mapping() {
            return Err("expected a YAML mapping at the top level".to_string());
        }

        let requirements = Self::parse_requirements(document.get("DEPENDENCIES"));

        let pods = match document.get("PODS") {
            Some(Value::Sequence(entries)) => entries
                .iter()
                .filter_map(|entry| match entry {
                    Value::String(spec) => Some(spec.as_str()),
                    // Pods with dependencies are single-key maps: `Name (1.0): [deps]`
                    Value::Mapping(map) => map.keys().next().and_then(Value::as_str),
                    _ => None,
                })
                .map(|spec| {
                    let (name, version) = split_name_and_parenthesized(spec);
                    let requirement = requirements.get(name).cloned().flatten();
                    PodDependency::new(name, version, requirement)
                })
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(_) => return Err("PODS must be a list".to_string()),
        };

        let checkout_options = match document.get("CHECKOUT OPTIONS") {
            Some(Value::Mapping(map)) => map
                .iter()
                .filter_map(|(name, options)| {
                    let name = name.as_str()?;
                    let commit = options
                        .get(":commit")
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    Some((name.to_string(), CheckoutOptions { commit }))
                })
                .collect(),
            _ => HashMap::new(),
        };

        Ok(PodfileLock {
            pods,
            checkout_options,
        })
    }

    /// `DEPENDENCIES` entries: `Name (~> 1.0)`, `Name (from `path`)` or `Name`
    fn parse_requirements(section: Option<&Value>) -> HashMap<String, Option<String>> {
        let Some(Value::Sequence(entries)) = section else {
            return HashMap::new();
        };
        entries
            .iter()
            .filter_map(Value::as_str)
            .map(|entry| {
                let (name, requirement) = split_name_and_parenthesized(entry);
                (name.to_string(), requirement)
            })
            .collect()
    }

    fn project_file(project_path: &Path) -> PathBuf {
        if project_path.is_dir() {
            project_path.join(PBXPROJ_NAME)
        } else {
            project_path.to_path_buf()
        }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PodfileLockReader for FileSystemReader {
    fn read_podfile_lock(&self, lockfile_path: &Path) -> Result<PodfileLock> {
        if !lockfile_path.exists() {
            return Err(SbomError::PodfileLockNotFound {
                path: lockfile_path.to_path_buf(),
                suggestion: "Run `pod install` first, or specify the correct path with the --podfile-lock option.".to_string(),
            }
            .into());
        }

        let content = read_checked(lockfile_path, PODFILE_LOCK_NAME).map_err(|e| {
            SbomError::FileReadError {
                path: lockfile_path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        Self::parse_podfile_lock(&content).map_err(|details| {
            SbomError::PodfileLockParseError {
                path: lockfile_path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}

impl ProjectReader for FileSystemReader {
    fn read_project_objects(&self, project_path: &Path) -> Result<Vec<ProjectObject>> {
        let pbxproj_path = Self::project_file(project_path);
        let content = read_checked(&pbxproj_path, PBXPROJ_NAME).map_err(|e| {
            SbomError::FileReadError {
                path: pbxproj_path.clone(),
                details: e.to_string(),
            }
        })?;

        pbxproj::parse_project_objects(&content).map_err(|e| {
            SbomError::ProjectParseError {
                path: pbxproj_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// Splits `Name (detail)` into the name and the parenthesized detail
fn split_name_and_parenthesized(entry: &str) -> (&str, Option<String>) {
    match entry.split_once(" (") {
        Some((name, rest)) => (
            name.trim(),
            Some(rest.trim_end().trim_end_matches(')').to_string()).filter(|d| !d.is_empty()),
        ),
        None => (entry.trim(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PODFILE_LOCK: &str = r#"PODS:
  - Alamofire (5.6.0)
  - Firebase/Core (10.0.0):
    - FirebaseAnalytics (= 10.0.0)
  - FirebaseAnalytics (10.0.0)
  - SnapKit (5.0.1)

DEPENDENCIES:
  - Alamofire (~> 5.6)
  - Firebase/Core
  - SnapKit (from `https://github.com/SnapKit/SnapKit.git`, commit `abc123`)

CHECKOUT OPTIONS:
  SnapKit:
    :commit: abc123
    :git: https://github.com/SnapKit/SnapKit.git

COCOAPODS: 1.12.1
"#;

    #[test]
    fn test_parse_pods_in_lockfile_order() {
        let lockfile = FileSystemReader::parse_podfile_lock(PODFILE_LOCK).unwrap();
        let names: Vec<&str> = lockfile.pods.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Alamofire", "Firebase/Core", "FirebaseAnalytics", "SnapKit"]
        );
        assert_eq!(lockfile.pods[1].version.as_deref(), Some("10.0.0"));
    }

    #[test]
    fn test_parse_requirements_and_checkout_options() {
        let lockfile = FileSystemReader::parse_podfile_lock(PODFILE_LOCK).unwrap();
        assert_eq!(lockfile.pods[0].requirement.as_deref(), Some("~> 5.6"));
        assert_eq!(lockfile.pods[1].requirement, None);
        assert_eq!(lockfile.pods[2].requirement, None);
        assert_eq!(lockfile.commit_for("SnapKit"), Some("abc123"));
        assert_eq!(lockfile.commit_for("Alamofire"), None);
    }

    #[test]
    fn test_parse_lockfile_without_pods() {
        let lockfile = FileSystemReader::parse_podfile_lock("COCOAPODS: 1.12.1\n").unwrap();
        assert!(lockfile.pods.is_empty());
    }

    #[test]
    fn test_parse_invalid_lockfile() {
        assert!(FileSystemReader::parse_podfile_lock("PODS: [unclosed").is_err());
        assert!(FileSystemReader::parse_podfile_lock("- just\n- a list\n").is_err());
    }

    #[test]
    fn test_read_podfile_lock_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let reader = FileSystemReader::new();
        let result = reader.read_podfile_lock(&temp_dir.path().join(PODFILE_LOCK_NAME));

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Podfile.lock not found"));
    }

    #[test]
    fn test_read_podfile_lock_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PODFILE_LOCK_NAME);
        fs::write(&path, "PODS: [unclosed").unwrap();

        let result = FileSystemReader::new().read_podfile_lock(&path);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse Podfile.lock"));
    }

    #[test]
    fn test_read_project_objects_from_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let bundle = temp_dir.path().join("App.xcodeproj");
        fs::create_dir(&bundle).unwrap();
        fs::write(
            bundle.join(PBXPROJ_NAME),
            "{ objects = { P1 = { isa = XCSwiftPackageProductDependency; productName = Kit; }; }; }",
        )
        .unwrap();

        let objects = FileSystemReader::new().read_project_objects(&bundle).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].id(), "P1");
    }

    #[test]
    fn test_read_project_objects_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join(PBXPROJ_NAME);
        fs::write(&file, "{ objects = ").unwrap();

        let result = FileSystemReader::new().read_project_objects(&file);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse Xcode project"));
    }

    #[test]
    fn test_discover_sources() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PODFILE_LOCK_NAME), "PODS: []").unwrap();
        fs::create_dir(temp_dir.path().join("Zeta.xcodeproj")).unwrap();
        fs::create_dir(temp_dir.path().join("Alpha.xcodeproj")).unwrap();

        let sources = FileSystemReader::new()
            .discover_sources(temp_dir.path())
            .unwrap();
        assert_eq!(
            sources.podfile_lock,
            Some(temp_dir.path().join(PODFILE_LOCK_NAME))
        );
        assert_eq!(
            sources.xcode_project,
            Some(temp_dir.path().join("Alpha.xcodeproj"))
        );
    }

    #[test]
    fn test_discover_sources_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let sources = FileSystemReader::new()
            .discover_sources(temp_dir.path())
            .unwrap();
        assert_eq!(sources, DiscoveredSources::default());
    }

    #[test]
    fn test_discover_sources_invalid_directory() {
        let result = FileSystemReader::new().discover_sources(Path::new("/nonexistent/dir"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid project path"));
    }

    #[test]
    fn test_split_name_and_parenthesized() {
        assert_eq!(
            split_name_and_parenthesized("Alamofire (5.6.0)"),
            ("Alamofire", Some("5.6.0".to_string()))
        );
        assert_eq!(split_name_and_parenthesized("Firebase/Core"), ("Firebase/Core", None));
    }
}
