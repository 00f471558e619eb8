use crate::ports::outbound::PodSpecificationSource;
use crate::sbom_generation::domain::{Author, PodDependency, PodSource, PodSpecification};
use crate::shared::error::SbomError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use serde::Deserialize;
use std::cell::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const LOCAL_PODSPECS_DIR: &str = "Pods/Local Podspecs";
const PODSPEC_SUFFIX: &str = ".podspec.json";
/// `<repos>/<repo>/Specs/<shard>/<shard>/<shard>/<Name>` is the deepest trunk layout
const POD_DIR_MAX_DEPTH: usize = 6;

/// Pod directory candidates keyed by directory name, in repository then walk order
type PodDirectoryIndex = HashMap<String, Vec<PathBuf>>;

/// PodspecRepository adapter resolving specifications from JSON podspecs
///
/// Lookup order for a pod's root name:
/// 1. `<project>/Pods/Local Podspecs/<root>.podspec.json`
/// 2. Each spec repository, searched for `<root>/<version>/<root>.podspec.json`
///
/// Spec repositories are walked once, on the first lookup that reaches them.
pub struct PodspecRepository {
    project_dir: PathBuf,
    spec_repositories: Vec<PathBuf>,
    pod_directories: OnceCell<PodDirectoryIndex>,
}

impl PodspecRepository {
    pub fn new(project_dir: impl Into<PathBuf>, spec_repositories: Vec<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            spec_repositories,
            pod_directories: OnceCell::new(),
        }
    }

    /// `~/.cocoapods/repos`, when a home directory is known
    pub fn default_spec_repositories() -> Vec<PathBuf> {
        std::env::var_os("HOME")
            .map(|home| vec![PathBuf::from(home).join(".cocoapods").join("repos")])
            .unwrap_or_default()
    }

    fn local_podspec(&self, root_name: &str) -> Option<PathBuf> {
        let path = self
            .project_dir
            .join(LOCAL_PODSPECS_DIR)
            .join(format!("{}{}", root_name, PODSPEC_SUFFIX));
        path.is_file().then_some(path)
    }

    fn repository_podspec(&self, root_name: &str, version: &str) -> Option<PathBuf> {
        let file_name = format!("{}{}", root_name, PODSPEC_SUFFIX);

        self.pod_directories()
            .get(root_name)?
            .iter()
            .map(|dir| dir.join(version).join(&file_name))
            .find(|candidate| candidate.is_file())
    }

    fn pod_directories(&self) -> &PodDirectoryIndex {
        self.pod_directories
            .get_or_init(|| index_pod_directories(&self.spec_repositories))
    }

    fn load(path: &Path) -> Result<PodSpecification> {
        let content = read_checked(path, "podspec")?;
        let podspec: PodspecJson =
            serde_json::from_str(&content).map_err(|e| SbomError::PodspecParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        Ok(podspec.into())
    }
}

impl PodSpecificationSource for PodspecRepository {
    fn find_specification(&self, dependency: &PodDependency) -> Result<Option<PodSpecification>> {
        let root_name = dependency.root_name();

        let path = self.local_podspec(root_name).or_else(|| {
            dependency
                .version
                .as_deref()
                .and_then(|version| self.repository_podspec(root_name, version))
        });

        path.map(|path| Self::load(&path)).transpose()
    }
}

fn index_pod_directories(spec_repositories: &[PathBuf]) -> PodDirectoryIndex {
    let mut index = PodDirectoryIndex::new();

    for repo in spec_repositories.iter().filter(|repo| repo.is_dir()) {
        let directories = WalkDir::new(repo)
            .min_depth(1)
            .max_depth(POD_DIR_MAX_DEPTH)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != ".git")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_dir());

        for entry in directories {
            if let Some(name) = entry.file_name().to_str() {
                index
                    .entry(name.to_string())
                    .or_default()
                    .push(entry.path().to_path_buf());
            }
        }
    }

    index
}

#[derive(Debug, Deserialize)]
struct PodspecJson {
    name: String,
    version: Option<String>,
    license: Option<LicenseJson>,
    authors: Option<AuthorsJson>,
    author: Option<AuthorsJson>,
    summary: Option<String>,
    description: Option<String>,
    homepage: Option<String>,
    #[serde(default)]
    source: SourceJson,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LicenseJson {
    Name(String),
    Detailed {
        #[serde(rename = "type")]
        kind: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AuthorsJson {
    Single(String),
    List(Vec<String>),
    Map(serde_json::Map<String, serde_json::Value>),
}

#[derive(Debug, Default, Deserialize)]
struct SourceJson {
    git: Option<String>,
    http: Option<String>,
    tag: Option<String>,
}

impl AuthorsJson {
    fn into_authors(self) -> Vec<Author> {
        match self {
            AuthorsJson::Single(name) => vec![Author::new(name, None)],
            AuthorsJson::List(names) => names.into_iter().map(|n| Author::new(n, None)).collect(),
            AuthorsJson::Map(map) => map
                .into_iter()
                .map(|(name, email)| {
                    let email = email.as_str().map(str::to_string).filter(|e| !e.is_empty());
                    Author::new(name, email)
                })
                .collect(),
        }
    }
}

impl From<PodspecJson> for PodSpecification {
    fn from(json: PodspecJson) -> Self {
        let license = json.license.and_then(|license| match license {
            LicenseJson::Name(name) => Some(name),
            LicenseJson::Detailed { kind } => kind,
        });

        PodSpecification {
            name: json.name,
            version: json.version,
            license,
            authors: json
                .authors
                .or(json.author)
                .map(AuthorsJson::into_authors)
                .unwrap_or_default(),
            summary: json.summary,
            description: json.description,
            homepage: json.homepage,
            source: PodSource {
                git: json.source.git,
                http: json.source.http,
                tag: json.source.tag,
            },
        }
    }
}
