// ==========================================
// Retouch SLA Checker - Import Error Types
// ==========================================
// thiserror derive, one variant group per concern.
// ==========================================

use thiserror::Error;

/// Import-layer error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (only .xlsx/.csv are accepted)")]
    UnsupportedFormat(String),

    #[error("failed to read file: {0}")]
    FileReadError(String),

    #[error("failed to parse Excel workbook: {0}")]
    ExcelParseError(String),

    #[error("failed to parse CSV: {0}")]
    CsvParseError(String),

    // ===== Structure errors =====
    #[error("the workbook has no worksheets")]
    NoWorksheet,

    #[error("the file has no header row")]
    MissingHeaderRow,

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result alias for the import layer
pub type ImportResult<T> = Result<T, ImportError>;
