use crate::sbom_generation::domain::SbomMetadata;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Name reported in `metadata.tools`
pub const TOOL_NAME: &str = "cocoa-sbom";

/// SbomGenerator service for generating SBOM metadata
///
/// Creates document metadata conforming to the CycloneDX specification:
/// a fresh `urn:uuid` serial number and an ISO-8601 UTC timestamp.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata for the scanned application
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the SBOM
    /// * `tool_version` - Version of the tool
    /// * `component_name` - Name of the application the SBOM describes
    /// * `component_version` - Version of that application
    pub fn generate_metadata(
        tool_name: &str,
        tool_version: &str,
        component_name: &str,
        component_version: &str,
    ) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        SbomMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            serial_number,
            component_name.to_string(),
            component_version.to_string(),
        )
    }

    /// Generates SBOM metadata identifying this tool by its compile-time version
    pub fn generate_default_metadata(component_name: &str, component_version: &str) -> SbomMetadata {
        Self::generate_metadata(
            TOOL_NAME,
            env!("CARGO_PKG_VERSION"),
            component_name,
            component_version,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = SbomGenerator::generate_metadata("test-tool", "1.0.0", "MyApp", "3.2.1");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert_eq!(metadata.component_name(), "MyApp");
        assert_eq!(metadata.component_version(), "3.2.1");
        assert!(metadata.serial_number().starts_with("urn:uuid:"));
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = SbomGenerator::generate_default_metadata("MyApp", "1.0");

        assert_eq!(metadata.tool_name(), "cocoa-sbom");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_generate_metadata_timestamp_is_utc() {
        let metadata = SbomGenerator::generate_default_metadata("MyApp", "1.0");
        let timestamp = metadata.timestamp();

        assert!(timestamp.contains('T'));
        assert!(timestamp.ends_with('Z'));
    }

    #[test]
    fn test_generate_metadata_unique_serial_numbers() {
        let first = SbomGenerator::generate_default_metadata("MyApp", "1.0");
        let second = SbomGenerator::generate_default_metadata("MyApp", "1.0");

        assert_ne!(first.serial_number(), second.serial_number());
    }

    #[test]
    fn test_generate_metadata_uuid_format() {
        let metadata = SbomGenerator::generate_default_metadata("MyApp", "1.0");
        let uuid_part = metadata.serial_number().strip_prefix("urn:uuid:").unwrap();

        assert_eq!(uuid_part.len(), 36);
        assert_eq!(uuid_part.matches('-').count(), 4);
    }
}
