/// Use cases module containing application business logic orchestration
mod download_archives;
mod generate_sbom;

pub use download_archives::DownloadArchivesUseCase;
pub use generate_sbom::GenerateSbomUseCase;
