//! Component view structs for read model

/// View representation of a BOM component, derived from one dependency record
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentView {
    pub component_type: String,
    pub name: String,
    pub version: Option<String>,
    /// Package URL; `None` is emitted as `null`
    pub purl: Option<String>,
    /// Comma-joined `Name <email>` list
    pub author: Option<String>,
    pub description: Option<String>,
    /// SPDX-like license identifier
    pub license: Option<String>,
}
