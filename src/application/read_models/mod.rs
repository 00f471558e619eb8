//! Read models for CQRS-lite pattern
//!
//! View-optimized structs holding the assembled BOM, ready for a formatter.

pub mod bom_assembler;
pub mod component_view;
pub mod sbom_read_model;

pub use bom_assembler::BomAssembler;
pub use component_view::ComponentView;
pub use sbom_read_model::{SbomMetadataView, SbomReadModel};
