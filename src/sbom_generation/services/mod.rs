mod cocoapods_extractor;
mod purl_synthesizer;
mod sbom_generator;
mod swift_package_extractor;

pub use cocoapods_extractor::CocoaPodsExtractor;
pub use purl_synthesizer::PurlSynthesizer;
pub use sbom_generator::{SbomGenerator, TOOL_NAME};
pub use swift_package_extractor::{SwiftPackageCandidate, SwiftPackageExtractor};
