// ==========================================
// Retouch SLA Checker - Configuration Layer
// ==========================================
// Immutable engine configuration, supplied once per run.
// No ambient state: the engine never reads config on its own.
// ==========================================

pub mod engine_config;

pub use engine_config::{CategorySpec, EngineConfig};
