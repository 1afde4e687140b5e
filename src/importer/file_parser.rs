// ==========================================
// Retouch SLA Checker - File Parsers
// ==========================================
// Collaborator surface: Excel (.xlsx) / CSV (.csv) into a DataTable.
// Column order is preserved exactly as found in the file; the
// positional column pruner depends on it.
// ==========================================

use crate::domain::{Cell, DataTable};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Data, Reader, Xlsx};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// FileParser trait
// ==========================================
pub trait FileParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<DataTable>;
}

// ==========================================
// CSV parser
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<DataTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolerate ragged rows
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.is_empty() {
            return Err(ImportError::MissingHeaderRow);
        }

        let mut table = DataTable::new(headers);
        for result in reader.records() {
            let record = result?;
            let row: Vec<Cell> = record.iter().map(|v| Cell::text(v.trim())).collect();

            // Skip fully blank rows
            if row.iter().all(Cell::is_blank) {
                continue;
            }
            table.push_row(row);
        }

        Ok(table)
    }
}

// ==========================================
// Excel parser
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    /// Native Excel dates survive as dates; everything else is text.
    fn convert_cell(cell: &Data) -> Cell {
        match cell {
            Data::Empty => Cell::Blank,
            Data::String(s) => Cell::text(s.trim()),
            Data::Int(n) => Cell::Int(*n),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => Cell::Date(naive.date()),
                None => Cell::text(cell.to_string()),
            },
            _ => Cell::text(cell.to_string().trim()),
        }
    }
}

impl FileParser for ExcelParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<DataTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)?;

        // First worksheet only
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::NoWorksheet);
        }
        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows.next().ok_or(ImportError::MissingHeaderRow)?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut table = DataTable::new(headers);
        for data_row in rows {
            let row: Vec<Cell> = data_row.iter().map(Self::convert_cell).collect();

            if row.iter().all(Cell::is_blank) {
                continue;
            }
            table.push_row(row);
        }

        Ok(table)
    }
}

// ==========================================
// Universal parser (dispatch by extension)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<DataTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_table(path),
            "xlsx" => ExcelParser.parse_table(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
