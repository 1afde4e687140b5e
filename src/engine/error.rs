// ==========================================
// Retouch SLA Checker - Engine Error Types
// ==========================================
// Only configuration-level problems abort a run. Everything
// per-field or per-record degrades to unknown/blank instead.
// ==========================================

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum EngineError {
    /// Fatal: without a scan-in column no meaningful processing is
    /// possible. Surfaced as a load-time rejection, no partial output.
    #[error("could not find a 'Scan In Date' column (no header contains both 'scan' and 'in')")]
    MissingScanInColumn,
}

/// Result alias for the engine
pub type EngineResult<T> = Result<T, EngineError>;
