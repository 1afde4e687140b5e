// ==========================================
// Retouch SLA Checker - Import Layer
// ==========================================
// External data loading: Excel and CSV into the in-memory table.
// No SLA logic lives here.
// ==========================================

pub mod error;
pub mod file_parser;

pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
