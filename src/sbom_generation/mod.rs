/// Domain layer - dependency normalization and BOM synthesis
///
/// Pure business logic with no I/O: dependency records, the two
/// ecosystem extractors and Package URL synthesis.
pub mod domain;
pub mod policies;
pub mod services;
