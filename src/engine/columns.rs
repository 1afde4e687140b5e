// ==========================================
// Retouch SLA Checker - Column Pruner & Resolver
// ==========================================
// The two external-format heuristics, kept as explicit pure
// functions so they stay independently testable:
//   letter_to_index  - spreadsheet letter -> zero-based position
//   matches_by_name  - case-insensitive substring match on headers
// ==========================================

use crate::domain::DataTable;
use crate::engine::error::{EngineError, EngineResult};
use std::collections::BTreeSet;
use tracing::{debug, warn};

// ==========================================
// Pure helpers
// ==========================================

/// Convert a spreadsheet column letter to a zero-based index using
/// base-26 arithmetic: A=0, Z=25, AA=26, AB=27, ...
///
/// Returns None for empty or non-alphabetic input.
pub fn letter_to_index(letters: &str) -> Option<usize> {
    let trimmed = letters.trim().to_uppercase();
    if trimmed.is_empty() {
        return None;
    }

    let mut value: usize = 0;
    for ch in trimmed.chars() {
        if !ch.is_ascii_uppercase() {
            return None;
        }
        value = value * 26 + (ch as usize - 'A' as usize + 1);
    }
    Some(value - 1)
}

/// True when the header contains every given substring, case-insensitively.
pub fn matches_by_name(header: &str, parts: &[&str]) -> bool {
    let lower = header.to_lowercase();
    parts.iter().all(|p| lower.contains(p))
}

// ==========================================
// ColumnPruner
// ==========================================
// Drops a fixed, position-addressed set of columns. Indices refer to
// the column order at resolution time; anything out of range is
// ignored silently.
pub struct ColumnPruner;

impl ColumnPruner {
    pub fn prune(&self, table: &mut DataTable, letters: &[String]) {
        let indices: BTreeSet<usize> = letters
            .iter()
            .filter_map(|l| {
                let idx = letter_to_index(l);
                if idx.is_none() {
                    warn!(letter = %l, "ignoring unparseable column letter");
                }
                idx
            })
            .collect();

        let indices: Vec<usize> = indices.into_iter().collect();
        debug!(?indices, "pruning columns by position");
        table.drop_columns_at(&indices);
    }
}

// ==========================================
// ColumnResolver
// ==========================================
// Locates the scan-in/scan-out columns by name heuristics. The first
// matching header in table order wins. Scan-in is mandatory;
// scan-out degrades to "always unknown" when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanColumns {
    pub scan_in: String,
    pub scan_out: Option<String>,
}

pub struct ColumnResolver;

impl ColumnResolver {
    pub fn resolve(&self, table: &DataTable) -> EngineResult<ScanColumns> {
        let scan_in = table
            .columns()
            .iter()
            .find(|c| matches_by_name(c, &["scan", "in"]))
            .cloned()
            .ok_or(EngineError::MissingScanInColumn)?;

        let scan_out = table
            .columns()
            .iter()
            .find(|c| matches_by_name(c, &["scan", "out"]))
            .cloned();

        if scan_out.is_none() {
            warn!("no scan-out column found; treating scan-out as always unknown");
        }

        Ok(ScanColumns { scan_in, scan_out })
    }
}
