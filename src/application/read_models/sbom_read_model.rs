//! SBOM read model for query operations

use super::component_view::ComponentView;

/// Main read model for SBOM data
#[derive(Debug, Clone)]
pub struct SbomReadModel {
    pub metadata: SbomMetadataView,
    /// Components in extractor emission order
    pub components: Vec<ComponentView>,
}

/// View representation of SBOM metadata
#[derive(Debug, Clone)]
pub struct SbomMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub serial_number: String,
    /// The application the BOM describes
    pub component_name: String,
    pub component_version: String,
}
