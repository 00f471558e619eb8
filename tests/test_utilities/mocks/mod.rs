/// Mock implementations for testing
mod mock_http_client;
mod mock_lockfile_reader;
mod mock_metadata_provider;
mod mock_progress_reporter;
mod mock_project_reader;
mod mock_specification_source;

pub use mock_http_client::MockHttpClient;
pub use mock_lockfile_reader::MockPodfileLockReader;
pub use mock_metadata_provider::MockMetadataProvider;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_reader::MockProjectReader;
pub use mock_specification_source::MockSpecificationSource;
