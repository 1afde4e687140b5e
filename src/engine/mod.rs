// ==========================================
// Retouch SLA Checker - Engine Layer
// ==========================================
// The SLA evaluation engine: deterministic, single-pass, pure.
// Every rule degrades to unknown/blank; only a missing scan-in
// column aborts the run.
// ==========================================

pub mod advisory;
pub mod aggregator;
pub mod busdays;
pub mod columns;
pub mod dates;
pub mod error;
pub mod orchestrator;
pub mod residency;
pub mod sla;

pub use advisory::AdvisoryNoteGenerator;
pub use aggregator::aggregate_status;
pub use busdays::business_days;
pub use columns::{letter_to_index, matches_by_name, ColumnPruner, ColumnResolver, ScanColumns};
pub use dates::DateNormalizer;
pub use error::{EngineError, EngineResult};
pub use orchestrator::{CategoryBreaches, EngineOutput, RunSummary, SlaEngine};
pub use residency::ResidencyClassifier;
pub use sla::SlaEvaluator;
