/// Ports module defining interfaces for hexagonal architecture
///
/// The application core drives infrastructure exclusively through these
/// outbound (driven) ports.
pub mod outbound;
