// ==========================================
// Retouch SLA Checker - Tabular Data Model
// ==========================================
// The engine operates on an in-memory table with named, ordered
// columns. Column order matters: pruning is positional and the
// scan-column heuristics return the first match in table order.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Cell - one table value
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Date(NaiveDate),
    Int(i64),
    Text(String),
    Blank,
}

impl Cell {
    /// Text cells that are empty or whitespace-only count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Blank => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// The calendar date, if this cell holds one.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.trim().is_empty() {
            Cell::Blank
        } else {
            Cell::Text(s)
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Cell::Int(n) => write!(f, "{}", n),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Blank => Ok(()),
        }
    }
}

// ==========================================
// DataTable - named ordered columns x rows
// ==========================================
// Rows are kept rectangular: every row has exactly one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Zero-based index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a row, padding or truncating to the current column count.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Blank);
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.rows[row][col]
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) {
        self.rows[row][col] = value;
    }

    /// The date held at (row, column name), if the cell is a known date.
    pub fn date_at(&self, row: usize, column: &str) -> Option<NaiveDate> {
        self.column_index(column)
            .and_then(|col| self.rows[row][col].as_date())
    }

    /// Write a whole column: appended when new, replaced in place when a
    /// column of that name already exists. The cell vector must match the
    /// row count.
    pub fn set_column(&mut self, name: impl Into<String>, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.rows.len());
        let name = name.into();
        if let Some(col) = self.column_index(&name) {
            for (row, cell) in self.rows.iter_mut().zip(cells) {
                row[col] = cell;
            }
        } else {
            self.columns.push(name);
            for (row, cell) in self.rows.iter_mut().zip(cells) {
                row.push(cell);
            }
        }
    }

    /// Drop the columns at the given positional indices.
    ///
    /// Indices address the current column order. Out-of-range indices are
    /// ignored silently; duplicates are harmless.
    pub fn drop_columns_at(&mut self, indices: &[usize]) {
        let keep: Vec<bool> = (0..self.columns.len())
            .map(|i| !indices.contains(&i))
            .collect();

        let mut idx = 0;
        self.columns.retain(|_| {
            let k = keep[idx];
            idx += 1;
            k
        });

        for row in &mut self.rows {
            let mut idx = 0;
            row.retain(|_| {
                let k = keep[idx];
                idx += 1;
                k
            });
        }
    }

    /// Keep only the rows for which the predicate holds.
    pub fn retain_rows<F>(&mut self, mut pred: F)
    where
        F: FnMut(&[Cell]) -> bool,
    {
        self.rows.retain(|row| pred(row));
    }
}
