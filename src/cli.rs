use clap::Parser;
use std::path::PathBuf;

use cocoa_sbom::sbom_generation::policies::PurlStrategy;

/// Generate CycloneDX SBOMs for CocoaPods and Swift Package Manager dependencies
#[derive(Parser, Debug)]
#[command(name = "cocoa-sbom")]
#[command(version)]
#[command(
    about = "Generate CycloneDX SBOMs for CocoaPods and Swift Package Manager dependencies",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Path to Podfile.lock (defaults to <path>/Podfile.lock when present)
    #[arg(long, value_name = "FILE")]
    pub podfile_lock: Option<PathBuf>,

    /// Path to an .xcodeproj bundle or project.pbxproj (defaults to the first *.xcodeproj in <path>)
    #[arg(long, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Name of the application the SBOM describes
    #[arg(short, long)]
    pub name: Option<String>,

    /// Version of the application the SBOM describes
    #[arg(long, value_name = "VERSION")]
    pub component_version: Option<String>,

    /// Output file path for the CycloneDX JSON document
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Download every dependency's source archive into this directory
    #[arg(short, long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// PURL strategy: default, platform, github, generic or legacy
    #[arg(long, value_name = "STRATEGY")]
    pub purl_strategy: Option<PurlStrategy>,

    /// Append the download URL to every PURL, not only pkg:generic ones
    #[arg(long)]
    pub always_append_download_url: bool,

    /// Query parameter name carrying the download URL
    #[arg(long, value_name = "NAME")]
    pub download_url_param: Option<String>,

    /// Legacy strategy only: never emit pkg:github PURLs
    #[arg(long)]
    pub always_generic: bool,

    /// Additional CocoaPods spec repository directory (repeatable)
    #[arg(long = "spec-repo", value_name = "DIR")]
    pub spec_repos: Vec<PathBuf>,

    /// Path to config file (auto-discovers cocoa-sbom.config.yml if not specified)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show progress and diagnostics for every dependency
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = Args::try_parse_from(["cocoa-sbom", "-n", "MyApp", "-o", "sbom.json"]).unwrap();
        assert_eq!(args.name.as_deref(), Some("MyApp"));
        assert_eq!(args.output, Some(PathBuf::from("sbom.json")));
        assert!(args.purl_strategy.is_none());
        assert!(!args.verbose);
        assert!(args.spec_repos.is_empty());
    }

    #[test]
    fn test_parse_purl_options() {
        let args = Args::try_parse_from([
            "cocoa-sbom",
            "--purl-strategy",
            "Legacy",
            "--always-generic",
            "--always-append-download-url",
            "--download-url-param",
            "vcs_url",
        ])
        .unwrap();
        assert_eq!(args.purl_strategy, Some(PurlStrategy::Legacy));
        assert!(args.always_generic);
        assert!(args.always_append_download_url);
        assert_eq!(args.download_url_param.as_deref(), Some("vcs_url"));
    }

    #[test]
    fn test_parse_invalid_purl_strategy() {
        let result = Args::try_parse_from(["cocoa-sbom", "--purl-strategy", "npm"]);
        let error = result.unwrap_err().to_string();
        assert!(error.contains("Invalid PURL strategy"));
    }

    #[test]
    fn test_parse_repeated_spec_repos() {
        let args = Args::try_parse_from([
            "cocoa-sbom",
            "--spec-repo",
            "/repos/trunk",
            "--spec-repo",
            "/repos/private",
        ])
        .unwrap();
        assert_eq!(
            args.spec_repos,
            vec![PathBuf::from("/repos/trunk"), PathBuf::from("/repos/private")]
        );
    }
}
