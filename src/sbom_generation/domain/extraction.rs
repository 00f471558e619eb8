use super::DependencyRecord;
use std::fmt;

/// Why a declared dependency was left out of the BOM
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The target definition does not whitelist the pod for Release builds
    NotWhitelistedForRelease { target: String },
    /// No specification could be resolved for the pod
    SpecificationNotFound,
    /// A specification exists but could not be read or parsed
    SpecificationUnreadable { details: String },
    /// Repository metadata was required but could not be fetched
    MetadataUnavailable,
    /// The extracted fields did not form a valid record
    InvalidRecord { details: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotWhitelistedForRelease { target } => write!(
                f,
                "not whitelisted for the Release configuration of target '{}'",
                target
            ),
            SkipReason::SpecificationNotFound => write!(f, "no specification found"),
            SkipReason::SpecificationUnreadable { details } => {
                write!(f, "specification could not be loaded: {}", details)
            }
            SkipReason::MetadataUnavailable => write!(f, "repository metadata unavailable"),
            SkipReason::InvalidRecord { details } => write!(f, "invalid record: {}", details),
        }
    }
}

/// Result of running one declared dependency through an extractor
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Included(DependencyRecord),
    Skipped { name: String, reason: SkipReason },
}

impl ExtractionOutcome {
    pub fn skipped(name: impl Into<String>, reason: SkipReason) -> Self {
        ExtractionOutcome::Skipped {
            name: name.into(),
            reason,
        }
    }

    pub fn into_record(self) -> Option<DependencyRecord> {
        match self {
            ExtractionOutcome::Included(record) => Some(record),
            ExtractionOutcome::Skipped { .. } => None,
        }
    }
}
