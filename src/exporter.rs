// ==========================================
// Retouch SLA Checker - CSV Exporter
// ==========================================
// Collaborator surface: lossless serialization of the processed
// table. Dates go out as ISO (YYYY-MM-DD), integers as digits,
// blanks as empty fields.
// ==========================================

use crate::domain::DataTable;
use crate::importer::ImportResult;
use csv::WriterBuilder;
use std::path::Path;

pub struct CsvExporter;

impl CsvExporter {
    pub fn write<P: AsRef<Path>>(&self, table: &DataTable, path: P) -> ImportResult<()> {
        let mut writer = WriterBuilder::new().from_path(path.as_ref())?;

        writer.write_record(table.columns())?;
        for row in table.rows() {
            let record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            writer.write_record(&record)?;
        }
        writer.flush()?;

        Ok(())
    }
}
