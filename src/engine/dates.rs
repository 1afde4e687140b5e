// ==========================================
// Retouch SLA Checker - Date Normalizer
// ==========================================
// Coerces heterogeneous cells into calendar dates. Ambiguous
// numeric dates are read day-first: "03/04/2024" is 3 April,
// never March 4th. Failure is never an error; the cell becomes
// an explicit unknown (blank).
// ==========================================

use crate::domain::{Cell, DataTable};
use crate::engine::columns::matches_by_name;
use chrono::NaiveDate;
use tracing::debug;

// ==========================================
// Parse attempts
// ==========================================
// An ordered chain of pure attempt functions, tried in sequence
// until one succeeds.

type ParseAttempt = fn(&str) -> Option<NaiveDate>;

const ATTEMPTS: &[ParseAttempt] = &[parse_day_first_numeric, parse_explicit_patterns];

/// Day-first flexible numeric parse: d/m/y with '/', '-' or '.'
/// separators and two- or four-digit years.
fn parse_day_first_numeric(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split(['/', '-', '.']).collect();
    if parts.len() != 3 {
        return None;
    }

    let day: u32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;
    let year: i32 = parts[2].trim().parse().ok()?;
    // Two-digit years are 2000-based; anything else four-digit only
    let year = match parts[2].trim().len() {
        2 => 2000 + year,
        4 => year,
        _ => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Fixed ordered list of explicit textual patterns: day/month/year,
/// day-month-name-year, then ISO.
fn parse_explicit_patterns(text: &str) -> Option<NaiveDate> {
    const PATTERNS: &[&str] = &[
        "%d/%m/%Y",
        "%d-%m-%Y",
        "%d/%m/%y",
        "%d %B %Y",
        "%d %b %Y",
        "%d-%B-%Y",
        "%d-%b-%Y",
        "%Y-%m-%d",
        "%Y/%m/%d",
    ];

    PATTERNS
        .iter()
        .find_map(|pattern| NaiveDate::parse_from_str(text, pattern).ok())
}

// ==========================================
// DateNormalizer
// ==========================================
pub struct DateNormalizer;

impl DateNormalizer {
    /// Normalize a single cell to a calendar date, if possible.
    ///
    /// Order, first success wins: pass-through for cells that already
    /// hold a date, then the attempt chain on the text, then the attempt
    /// chain on the substring before the first space (dropping a trailing
    /// time-of-day), then unknown.
    pub fn normalize_cell(&self, cell: &Cell) -> Option<NaiveDate> {
        match cell {
            Cell::Date(d) => Some(*d),
            Cell::Blank => None,
            Cell::Int(n) => self.normalize_text(&n.to_string()),
            Cell::Text(s) => self.normalize_text(s),
        }
    }

    fn normalize_text(&self, text: &str) -> Option<NaiveDate> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(date) = run_attempts(trimmed) {
            return Some(date);
        }

        // Retry on the prefix before the first space (trailing time-of-day)
        if let Some((prefix, _)) = trimmed.split_once(' ') {
            return run_attempts(prefix);
        }

        None
    }

    /// Normalize every cell of every date-bearing column in place.
    ///
    /// A column is date-bearing when its name contains "date"
    /// (case-insensitive) or it is one of the scan columns. Cells that
    /// fail every attempt become blank, never an error.
    pub fn normalize_table(&self, table: &mut DataTable, scan_columns: &[&str]) {
        let targets: Vec<usize> = table
            .columns()
            .iter()
            .enumerate()
            .filter(|(_, name)| {
                matches_by_name(name, &["date"]) || scan_columns.contains(&name.as_str())
            })
            .map(|(idx, _)| idx)
            .collect();

        debug!(columns = targets.len(), "normalizing date columns");

        for row in 0..table.row_count() {
            for &col in &targets {
                let normalized = match self.normalize_cell(table.cell(row, col)) {
                    Some(date) => Cell::Date(date),
                    None => Cell::Blank,
                };
                table.set_cell(row, col, normalized);
            }
        }
    }
}

fn run_attempts(text: &str) -> Option<NaiveDate> {
    ATTEMPTS.iter().find_map(|attempt| attempt(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn normalize(text: &str) -> Option<NaiveDate> {
        DateNormalizer.normalize_cell(&Cell::text(text))
    }

    #[test]
    fn test_day_first_preference() {
        // 03/04/2024 is 3 April, not March 4th
        assert_eq!(normalize("03/04/2024"), Some(date(2024, 4, 3)));
        assert_eq!(normalize("31/01/2024"), Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_invalid_day_first_is_unknown_not_a_guess() {
        // Month 25 is invalid day-first; must not fall back to a
        // month-first misparse
        assert_eq!(normalize("13/25/2024"), None);
    }

    #[test]
    fn test_separators_and_short_years() {
        assert_eq!(normalize("3-4-2024"), Some(date(2024, 4, 3)));
        assert_eq!(normalize("3.4.2024"), Some(date(2024, 4, 3)));
        assert_eq!(normalize("03/04/24"), Some(date(2024, 4, 3)));
    }

    #[test]
    fn test_month_name_patterns() {
        assert_eq!(normalize("31 January 2024"), Some(date(2024, 1, 31)));
        assert_eq!(normalize("31 Jan 2024"), Some(date(2024, 1, 31)));
        assert_eq!(normalize("31-Jan-2024"), Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_iso_pattern() {
        assert_eq!(normalize("2024-01-31"), Some(date(2024, 1, 31)));
        assert_eq!(normalize("2024/01/31"), Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_trailing_time_of_day_retry() {
        assert_eq!(normalize("31/01/2024 09:30:00"), Some(date(2024, 1, 31)));
        assert_eq!(normalize("2024-01-31 00:00:00"), Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_garbage_is_unknown() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("not a date"), None);
        assert_eq!(normalize("2024"), None);
    }

    #[test]
    fn test_date_cell_passes_through() {
        let d = date(2024, 6, 1);
        assert_eq!(DateNormalizer.normalize_cell(&Cell::Date(d)), Some(d));
    }

    #[test]
    fn test_normalize_table_targets_date_columns_only() {
        let mut table = DataTable::new(vec![
            "Item".into(),
            "Scan In".into(),
            "Photo Still Date".into(),
        ]);
        table.push_row(vec![
            Cell::text("01/02/2024"),
            Cell::text("01/02/2024"),
            Cell::text("05/02/2024"),
        ]);

        DateNormalizer.normalize_table(&mut table, &["Scan In"]);

        // "Item" is not date-bearing and keeps its text
        assert_eq!(table.cell(0, 0), &Cell::Text("01/02/2024".into()));
        assert_eq!(table.cell(0, 1), &Cell::Date(date(2024, 2, 1)));
        assert_eq!(table.cell(0, 2), &Cell::Date(date(2024, 2, 5)));
    }

    #[test]
    fn test_normalize_table_unparseable_becomes_blank() {
        let mut table = DataTable::new(vec!["Photo Still Date".into()]);
        table.push_row(vec![Cell::text("pending")]);

        DateNormalizer.normalize_table(&mut table, &[]);
        assert_eq!(table.cell(0, 0), &Cell::Blank);
    }
}
