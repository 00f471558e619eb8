use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The BOM was written (and archives fetched, when requested)
    Success = 0,
    /// Configuration, I/O, parse or network error
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM generation.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Podfile.lock not found: {path}\n\n💡 Hint: {suggestion}")]
    PodfileLockNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse Podfile.lock: {path}\nDetails: {details}\n\n💡 Hint: Run `pod install` to regenerate the lockfile")]
    PodfileLockParseError { path: PathBuf, details: String },

    #[error("Failed to parse Xcode project: {path}\nDetails: {details}\n\n💡 Hint: Please verify that project.pbxproj is a valid property list")]
    ProjectParseError { path: PathBuf, details: String },

    #[error("Failed to parse podspec: {path}\nDetails: {details}")]
    PodspecParseError { path: PathBuf, details: String },

    #[error("No dependency sources found in: {path}\n\n💡 Hint: The directory must contain a Podfile.lock or an *.xcodeproj bundle (or pass --podfile-lock / --project)")]
    NoDependencySources { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to download {url}\nDetails: {details}")]
    DownloadError { url: String, details: String },
}
