//! Assembles the BOM read model from dependency records.

use super::component_view::ComponentView;
use super::sbom_read_model::{SbomMetadataView, SbomReadModel};
use crate::sbom_generation::domain::{DependencyRecord, SbomMetadata};
use crate::sbom_generation::policies::PurlOptions;
use crate::sbom_generation::services::PurlSynthesizer;

/// Builds the BOM envelope and maps every record to a component
///
/// Component order equals record order; records are never sorted or merged.
pub struct BomAssembler;

impl BomAssembler {
    pub fn assemble(
        records: &[DependencyRecord],
        metadata: &SbomMetadata,
        purl_options: &PurlOptions,
    ) -> SbomReadModel {
        SbomReadModel {
            metadata: Self::build_metadata(metadata),
            components: records
                .iter()
                .map(|record| Self::build_component(record, purl_options))
                .collect(),
        }
    }

    fn build_metadata(metadata: &SbomMetadata) -> SbomMetadataView {
        SbomMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            serial_number: metadata.serial_number().to_string(),
            component_name: metadata.component_name().to_string(),
            component_version: metadata.component_version().to_string(),
        }
    }

    fn build_component(record: &DependencyRecord, purl_options: &PurlOptions) -> ComponentView {
        let author = if record.authors().is_empty() {
            None
        } else {
            Some(
                record
                    .authors()
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        };

        ComponentView {
            component_type: record.component_type().to_string(),
            name: record.name().to_string(),
            version: record.version().map(str::to_string),
            purl: PurlSynthesizer::synthesize(record, purl_options),
            author,
            description: record
                .summary()
                .or(record.description())
                .map(str::to_string),
            license: record.license().map(str::to_string),
        }
    }
}
