//! Telemetry bootstrap shared by the diwan binaries.

pub mod tracing;
