use crate::sbom_generation::domain::TargetDefinition;
use crate::sbom_generation::policies::PurlOptions;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::PathBuf;

/// Component version used when neither the CLI nor the config sets one
pub const DEFAULT_COMPONENT_VERSION: &str = "0.0.0";

/// SbomRequest - Immutable run configuration for the SBOM generation use case
///
/// Built once from CLI arguments and the config file, then passed by
/// reference to every component.
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Project directory used for discovery and podspec lookup
    pub project_path: PathBuf,
    /// Podfile.lock to read; `None` disables the CocoaPods path
    pub podfile_lock_path: Option<PathBuf>,
    /// `.xcodeproj` bundle to read; `None` disables the Swift package path
    pub xcode_project_path: Option<PathBuf>,
    /// Name of the application the BOM describes
    pub component_name: String,
    pub component_version: String,
    pub output_path: PathBuf,
    /// Where to download source archives; `None` skips downloading
    pub download_dir: Option<PathBuf>,
    pub purl_options: PurlOptions,
    /// Only pods whitelisted for Release in this target are included
    pub target: Option<TargetDefinition>,
}

impl SbomRequest {
    pub fn builder() -> SbomRequestBuilder {
        SbomRequestBuilder::default()
    }
}

/// Builder for [`SbomRequest`]
///
/// `build` rejects configuration errors before any extraction runs.
#[derive(Debug, Default)]
pub struct SbomRequestBuilder {
    project_path: Option<PathBuf>,
    podfile_lock_path: Option<PathBuf>,
    xcode_project_path: Option<PathBuf>,
    component_name: Option<String>,
    component_version: Option<String>,
    output_path: Option<PathBuf>,
    download_dir: Option<PathBuf>,
    purl_options: PurlOptions,
    target: Option<TargetDefinition>,
}

impl SbomRequestBuilder {
    pub fn project_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_path = Some(path.into());
        self
    }

    pub fn podfile_lock_path(mut self, path: Option<PathBuf>) -> Self {
        self.podfile_lock_path = path;
        self
    }

    pub fn xcode_project_path(mut self, path: Option<PathBuf>) -> Self {
        self.xcode_project_path = path;
        self
    }

    pub fn component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = Some(name.into());
        self
    }

    pub fn component_version(mut self, version: impl Into<String>) -> Self {
        self.component_version = Some(version.into());
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn download_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.download_dir = dir;
        self
    }

    pub fn purl_options(mut self, options: PurlOptions) -> Self {
        self.purl_options = options;
        self
    }

    pub fn target(mut self, target: Option<TargetDefinition>) -> Self {
        self.target = target;
        self
    }

    pub fn build(self) -> Result<SbomRequest> {
        let component_name = self
            .component_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| validation("Component name is required (use --name)"))?;

        let component_version = match self.component_version {
            Some(version) if version.trim().is_empty() => {
                return Err(validation(
                    "Component version must not be empty (use --component-version)",
                )
                .into());
            }
            Some(version) => version.trim().to_string(),
            None => DEFAULT_COMPONENT_VERSION.to_string(),
        };

        let output_path = self
            .output_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| validation("Output file path is required (use --output)"))?;

        if self.purl_options.download_url_param.trim().is_empty() {
            return Err(validation("Download URL parameter name must not be empty").into());
        }

        if matches!(&self.download_dir, Some(dir) if dir.as_os_str().is_empty()) {
            return Err(validation("Download directory must not be empty").into());
        }

        Ok(SbomRequest {
            project_path: self.project_path.unwrap_or_else(|| PathBuf::from(".")),
            podfile_lock_path: self.podfile_lock_path,
            xcode_project_path: self.xcode_project_path,
            component_name,
            component_version,
            output_path,
            download_dir: self.download_dir,
            purl_options: self.purl_options,
            target: self.target,
        })
    }
}

fn validation(message: &str) -> SbomError {
    SbomError::Validation {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_generation::policies::PurlStrategy;

    fn valid_builder() -> SbomRequestBuilder {
        SbomRequest::builder()
            .project_path("/app")
            .component_name("MyApp")
            .component_version("1.0.0")
            .output_path("/app/sbom.json")
    }

    #[test]
    fn test_build_valid_request() {
        let request = valid_builder().build().unwrap();

        assert_eq!(request.project_path, PathBuf::from("/app"));
        assert_eq!(request.component_name, "MyApp");
        assert_eq!(request.component_version, "1.0.0");
        assert_eq!(request.output_path, PathBuf::from("/app/sbom.json"));
        assert!(request.download_dir.is_none());
        assert_eq!(request.purl_options.strategy, PurlStrategy::Default);
    }

    #[test]
    fn test_project_path_defaults_to_current_dir() {
        let request = SbomRequest::builder()
            .component_name("MyApp")
            .component_version("1.0.0")
            .output_path("sbom.json")
            .build()
            .unwrap();
        assert_eq!(request.project_path, PathBuf::from("."));
    }

    #[test]
    fn test_missing_component_name() {
        let result = SbomRequest::builder()
            .component_version("1.0.0")
            .output_path("sbom.json")
            .build();
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Component name is required"));
    }

    #[test]
    fn test_blank_component_name() {
        let result = valid_builder().component_name("   ").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_absent_component_version_uses_default() {
        let request = SbomRequest::builder()
            .component_name("MyApp")
            .output_path("sbom.json")
            .build()
            .unwrap();
        assert_eq!(request.component_version, DEFAULT_COMPONENT_VERSION);
    }

    #[test]
    fn test_blank_component_version() {
        let result = valid_builder().component_version("  ").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_component_version() {
        let result = valid_builder().component_version("").build();
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Component version must not be empty"));
    }

    #[test]
    fn test_missing_output_path() {
        let result = SbomRequest::builder()
            .component_name("MyApp")
            .component_version("1.0.0")
            .build();
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Output file path is required"));
    }

    #[test]
    fn test_empty_download_url_param() {
        let options = PurlOptions {
            download_url_param: String::new(),
            ..PurlOptions::default()
        };
        let result = valid_builder().purl_options(options).build();
        assert!(result.is_err());
    }
}
