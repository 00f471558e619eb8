mod cli;
mod config;

use cli::Args;
use cocoa_sbom::adapters::outbound::console::StderrProgressReporter;
use cocoa_sbom::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, PodspecRepository,
};
use cocoa_sbom::adapters::outbound::formatters::CycloneDxFormatter;
use cocoa_sbom::adapters::outbound::network::{GitHubMetadataFetcher, ReqwestHttpClient};
use cocoa_sbom::application::dto::SbomRequest;
use cocoa_sbom::application::use_cases::{DownloadArchivesUseCase, GenerateSbomUseCase};
use cocoa_sbom::ports::outbound::{OutputPresenter, SbomFormatter};
use cocoa_sbom::sbom_generation::policies::{PurlOptions, PurlStrategy};
use cocoa_sbom::shared::error::{ExitCode, SbomError};
use cocoa_sbom::shared::Result;
use config::ConfigFile;
use std::path::{Path, PathBuf};
use std::process;

const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config = load_config(&args, &project_path)?.unwrap_or_default();
    let verbose = args.verbose || config.verbose.unwrap_or(false);

    let purl_options = merge_purl_options(&args, &config)?;
    let (podfile_lock_path, xcode_project_path) = resolve_sources(&args, &config, &project_path)?;
    let output_path = args
        .output
        .clone()
        .or_else(|| config.output.as_ref().map(|p| resolve_relative(&project_path, p)));
    let download_dir = args
        .download_dir
        .clone()
        .or_else(|| config.download_dir.as_ref().map(|p| resolve_relative(&project_path, p)));

    let mut builder = SbomRequest::builder()
        .project_path(project_path.clone())
        .podfile_lock_path(podfile_lock_path)
        .xcode_project_path(xcode_project_path)
        .download_dir(download_dir)
        .purl_options(purl_options)
        .target(config.target.map(Into::into));
    if let Some(name) = args.name.or(config.name) {
        builder = builder.component_name(name);
    }
    if let Some(version) = args.component_version.or(config.component_version) {
        builder = builder.component_version(version);
    }
    if let Some(output) = output_path {
        builder = builder.output_path(output);
    }
    let request = builder.build()?;

    let spec_repositories = if !args.spec_repos.is_empty() {
        args.spec_repos
    } else {
        config
            .spec_repos
            .unwrap_or_else(PodspecRepository::default_spec_repositories)
    };
    let github_token = std::env::var(GITHUB_TOKEN_ENV).ok();

    // Create adapters (Dependency Injection)
    let use_case = GenerateSbomUseCase::new(
        FileSystemReader::new(),
        PodspecRepository::new(project_path, spec_repositories),
        FileSystemReader::new(),
        GitHubMetadataFetcher::new(ReqwestHttpClient::new()?, github_token),
        StderrProgressReporter::new(verbose),
    );

    let response = use_case.execute(&request)?;

    if verbose {
        eprintln!("📝 Generating CycloneDX JSON format output...");
    }
    let formatted_output = CycloneDxFormatter::new().format(&response.read_model)?;
    FileSystemWriter::new(request.output_path.clone()).present(&formatted_output)?;

    if let Some(download_dir) = &request.download_dir {
        let downloader =
            DownloadArchivesUseCase::new(ReqwestHttpClient::new()?, StderrProgressReporter::new(verbose));
        downloader.execute(&response.records, download_dir)?;
    }

    eprintln!("✅ Output complete: {}", request.output_path.display());
    Ok(())
}

/// Loads `--config`, or auto-discovers the config file in the project directory
fn load_config(args: &Args, project_path: &Path) -> Result<Option<ConfigFile>> {
    if let Some(config_path) = &args.config {
        let config = config::load_config_from_path(config_path)?;
        eprintln!("📄 Loaded config from: {}", config_path.display());
        return Ok(Some(config));
    }

    let config = config::discover_config(project_path)?;
    if config.is_some() {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            project_path.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(config)
}

/// CLI flags take precedence over the config file
fn merge_purl_options(args: &Args, config: &ConfigFile) -> Result<PurlOptions> {
    let defaults = PurlOptions::default();
    let strategy = match (args.purl_strategy, config.purl_strategy.as_deref()) {
        (Some(strategy), _) => strategy,
        (None, Some(name)) => name
            .parse::<PurlStrategy>()
            .map_err(|message| SbomError::Validation { message })?,
        (None, None) => defaults.strategy,
    };

    Ok(PurlOptions {
        strategy,
        always_append_download_url: args.always_append_download_url
            || config.always_append_download_url.unwrap_or(false),
        download_url_param: args
            .download_url_param
            .clone()
            .or_else(|| config.download_url_param.clone())
            .unwrap_or(defaults.download_url_param),
        always_generic: args.always_generic || config.always_generic.unwrap_or(false),
    })
}

/// Explicit paths win; otherwise the project directory is searched
fn resolve_sources(
    args: &Args,
    config: &ConfigFile,
    project_path: &Path,
) -> Result<(Option<PathBuf>, Option<PathBuf>)> {
    let explicit_lockfile = args
        .podfile_lock
        .clone()
        .or_else(|| config.podfile_lock.as_ref().map(|p| resolve_relative(project_path, p)));
    let explicit_project = args
        .project
        .clone()
        .or_else(|| config.project.as_ref().map(|p| resolve_relative(project_path, p)));

    if explicit_lockfile.is_some() || explicit_project.is_some() {
        return Ok((explicit_lockfile, explicit_project));
    }

    let discovered = FileSystemReader::new().discover_sources(project_path)?;
    Ok((discovered.podfile_lock, discovered.xcode_project))
}

/// Config file paths are relative to the project directory
fn resolve_relative(project_path: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_path.join(path)
    }
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| SbomError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(SbomError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
