// ==========================================
// Retouch SLA Checker - Core Library
// ==========================================
// Deterministic SLA evaluation over garment-photography records:
// three workflow categories (Stills, Model, Mannequin), business-day
// allowances, and a studio-residency classification per record.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - types and the tabular model
pub mod domain;

// Configuration layer - immutable engine configuration
pub mod config;

// Import layer - Excel/CSV loading
pub mod importer;

// Engine layer - the SLA evaluation rules
pub mod engine;

// Export - processed-table serialization
pub mod exporter;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

pub use config::{CategorySpec, EngineConfig};
pub use domain::{Category, Cell, DataTable, ResidencyState, SlaVerdict};
pub use engine::{
    business_days, EngineError, EngineOutput, RunSummary, SlaEngine,
};
pub use exporter::CsvExporter;
pub use importer::{ImportError, UniversalFileParser};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Retouch SLA Checker";
