/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod formatter;
pub mod http_client;
pub mod lockfile_reader;
pub mod output_presenter;
pub mod pod_specification_source;
pub mod progress_reporter;
pub mod project_reader;
pub mod repository_metadata_provider;

pub use formatter::SbomFormatter;
pub use http_client::{HttpClient, HttpResponse};
pub use lockfile_reader::PodfileLockReader;
pub use output_presenter::OutputPresenter;
pub use pod_specification_source::PodSpecificationSource;
pub use progress_reporter::ProgressReporter;
pub use project_reader::ProjectReader;
pub use repository_metadata_provider::RepositoryMetadataProvider;
