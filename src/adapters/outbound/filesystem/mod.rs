/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod pbxproj;
mod podspec_repository;

pub use file_reader::{DiscoveredSources, FileSystemReader, PODFILE_LOCK_NAME};
pub use file_writer::FileSystemWriter;
pub use podspec_repository::PodspecRepository;
