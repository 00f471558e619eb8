use crate::application::dto::DownloadSummary;
use crate::ports::outbound::{HttpClient, ProgressReporter};
use crate::sbom_generation::domain::DependencyRecord;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// DownloadArchivesUseCase - Fetches the source archive of every record
///
/// Records without a download URL are skipped. A failing download is
/// reported and counted; the remaining archives are still attempted.
pub struct DownloadArchivesUseCase<H, PR> {
    http_client: H,
    progress_reporter: PR,
}

impl<H, PR> DownloadArchivesUseCase<H, PR>
where
    H: HttpClient,
    PR: ProgressReporter,
{
    pub fn new(http_client: H, progress_reporter: PR) -> Self {
        Self {
            http_client,
            progress_reporter,
        }
    }

    /// Downloads archives into `output_dir`, creating it if needed
    ///
    /// # Errors
    /// Fails only when the output directory cannot be created.
    pub fn execute(&self, records: &[DependencyRecord], output_dir: &Path) -> Result<DownloadSummary> {
        fs::create_dir_all(output_dir).map_err(|e| SbomError::FileWriteError {
            path: output_dir.to_path_buf(),
            details: e.to_string(),
        })?;

        self.progress_reporter.report(&format!(
            "📥 Downloading source archives to: {}",
            output_dir.display()
        ));

        let mut summary = DownloadSummary::default();
        let total = records.len();

        for (index, record) in records.iter().enumerate() {
            self.progress_reporter
                .report_progress(index, total, Some(record.name()));

            let Some(url) = record.download_url() else {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: No download URL for {}, skipping",
                    record.name()
                ));
                summary.skipped += 1;
                continue;
            };

            let destination = output_dir.join(archive_file_name(record));
            match self.download(url, &destination) {
                Ok(()) => summary.downloaded.push(destination),
                Err(e) => {
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Failed to download {}: {}",
                        record.name(),
                        e
                    ));
                    summary.failed += 1;
                }
            }
        }

        self.progress_reporter
            .report_progress(total, total, Some("done"));
        self.progress_reporter.report_completion(&format!(
            "📦 Downloaded {} archives ({} skipped, {} failed)",
            summary.downloaded.len(),
            summary.skipped,
            summary.failed
        ));

        Ok(summary)
    }

    fn download(&self, url: &str, destination: &Path) -> Result<()> {
        let response = self.http_client.get(url, &[])?;
        if !response.is_success() {
            return Err(SbomError::DownloadError {
                url: url.to_string(),
                details: response.status_message(),
            }
            .into());
        }

        fs::write(destination, &response.body).map_err(|e| SbomError::FileWriteError {
            path: destination.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}

/// `<name>-<version|commit|tag>.tar.gz`, with subspec and package path
/// separators reduced to the last segment and ref separators
/// (`feature/login`) replaced by `-`
fn archive_file_name(record: &DependencyRecord) -> String {
    let base = record.name().rsplit('/').next().unwrap_or(record.name());
    match record.version().or(record.commit()).or(record.tag()) {
        Some(reference) => format!("{}-{}.tar.gz", base, reference.replace(['/', '\\'], "-")),
        None => format!("{}.tar.gz", base),
    }
}
