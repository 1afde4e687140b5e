// ==========================================
// Retouch SLA Checker - Domain Layer
// ==========================================
// Types and the tabular data model. No file I/O,
// no engine logic.
// ==========================================

pub mod table;
pub mod types;

pub use table::{Cell, DataTable};
pub use types::{
    Category, ResidencyState, SlaVerdict, AWAITING_MODEL_SHOT, LATE, SCANNED_OUT,
    SCANNED_OUT_NEVER_SHOT,
};
