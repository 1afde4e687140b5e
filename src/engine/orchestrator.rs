// ==========================================
// Retouch SLA Checker - Engine Orchestrator
// ==========================================
// Single pass: prune -> resolve -> normalize -> scan-in filter ->
// per-category SLA -> notes -> days in studio -> status roll-up.
// Later stages only write derived columns; nothing removes records
// after the scan-in filter.
// ==========================================

use crate::config::EngineConfig;
use crate::domain::{Category, Cell, DataTable, ResidencyState, LATE};
use crate::engine::advisory::AdvisoryNoteGenerator;
use crate::engine::aggregator::aggregate_status;
use crate::engine::columns::{ColumnPruner, ColumnResolver};
use crate::engine::dates::DateNormalizer;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::residency::ResidencyClassifier;
use crate::engine::sla::SlaEvaluator;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, instrument};

// ==========================================
// Run summary
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct CategoryBreaches {
    pub category: Category,
    pub breached_records: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_dropped_missing_scan_in: usize,
    pub rows_evaluated: usize,
    pub late_records: usize,
    pub breaches_by_category: Vec<CategoryBreaches>,
}

/// The processed table plus run statistics.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub table: DataTable,
    pub summary: RunSummary,
}

// ==========================================
// SlaEngine
// ==========================================
pub struct SlaEngine {
    config: EngineConfig,
}

impl SlaEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Run the full evaluation pass over a loaded table.
    ///
    /// The only fatal condition is a missing scan-in column; every
    /// other irregularity degrades to unknown/blank per field or a
    /// silent per-record drop.
    #[instrument(skip(self, table), fields(rows = table.row_count()))]
    pub fn run(&self, mut table: DataTable, today: NaiveDate) -> EngineResult<EngineOutput> {
        let rows_loaded = table.row_count();

        // 1) prune position-addressed columns
        ColumnPruner.prune(&mut table, &self.config.pruned_columns);

        // 2) resolve scan columns (fatal when scan-in is missing)
        let scan = ColumnResolver.resolve(&table)?;
        info!(scan_in = %scan.scan_in, scan_out = ?scan.scan_out, "resolved scan columns");

        // 3) normalize every date-bearing column
        let mut scan_names = vec![scan.scan_in.as_str()];
        if let Some(out) = scan.scan_out.as_deref() {
            scan_names.push(out);
        }
        DateNormalizer.normalize_table(&mut table, &scan_names);

        // 4) drop records without a usable scan-in date
        let scan_in_idx = table
            .column_index(&scan.scan_in)
            .ok_or(EngineError::MissingScanInColumn)?;
        table.retain_rows(|row| row[scan_in_idx].as_date().is_some());
        let rows_dropped = rows_loaded - table.row_count();
        let rows = table.row_count();
        info!(
            dropped = rows_dropped,
            kept = rows,
            "applied mandatory scan-in filter"
        );

        let scan_out_idx = scan
            .scan_out
            .as_deref()
            .and_then(|c| table.column_index(c));

        // 5) per-category SLA evaluation; categories without a photo
        //    column are skipped wholesale (no columns added)
        let mut row_flags: Vec<Vec<&'static str>> = vec![Vec::new(); rows];
        let mut breaches_by_category = Vec::new();

        for spec in &self.config.categories {
            let Some(photo_idx) = table.column_index(&spec.photo_column) else {
                info!(
                    category = %spec.category,
                    column = %spec.photo_column,
                    "photo column absent, skipping category"
                );
                for flags in &mut row_flags {
                    flags.push("");
                }
                continue;
            };
            let upload_idx = table.column_index(&spec.upload_column);

            let mut flag_cells = Vec::with_capacity(rows);
            let mut overage_cells = Vec::with_capacity(rows);
            let mut breached_records = 0;

            for row in 0..rows {
                let photo = table.cell(row, photo_idx).as_date();
                let upload = upload_idx.and_then(|col| table.cell(row, col).as_date());

                match SlaEvaluator.evaluate(photo, upload, today, spec.allowance_days) {
                    Some(verdict) => {
                        if verdict.breached {
                            breached_records += 1;
                        }
                        row_flags[row].push(verdict.flag());
                        flag_cells.push(Cell::text(verdict.flag()));
                        overage_cells.push(Cell::Int(verdict.overage_days));
                    }
                    None => {
                        // photo date unknown: no verdict, blank fields
                        row_flags[row].push("");
                        flag_cells.push(Cell::Blank);
                        overage_cells.push(Cell::Blank);
                    }
                }
            }

            table.set_column(spec.category.flag_column(), flag_cells);
            table.set_column(spec.category.overage_column(), overage_cells);
            breaches_by_category.push(CategoryBreaches {
                category: spec.category,
                breached_records,
            });
        }

        // 6) advisory notes (independent of the Stills verdict)
        let stills_photo_idx = self
            .config
            .categories
            .iter()
            .find(|s| s.category == Category::Stills)
            .and_then(|s| table.column_index(&s.photo_column));

        let note_cells: Vec<Cell> = (0..rows)
            .map(|row| {
                let stills_photo = stills_photo_idx.and_then(|col| table.cell(row, col).as_date());
                let scan_out = scan_out_idx.and_then(|col| table.cell(row, col).as_date());
                match AdvisoryNoteGenerator.evaluate(
                    stills_photo,
                    scan_out,
                    today,
                    self.config.advisory_threshold_days,
                ) {
                    Some(note) => Cell::text(note),
                    None => Cell::Blank,
                }
            })
            .collect();
        table.set_column("Notes", note_cells);

        // 7) studio residency
        let shot_indices: Vec<usize> = self
            .config
            .shot_columns()
            .iter()
            .filter_map(|name| table.column_index(name))
            .collect();

        let residency_cells: Vec<Cell> = (0..rows)
            .map(|row| {
                let scan_in = table.cell(row, scan_in_idx).as_date();
                let scan_out = scan_out_idx.and_then(|col| table.cell(row, col).as_date());
                let all_blank = shot_indices
                    .iter()
                    .all(|&col| table.cell(row, col).as_date().is_none());

                match ResidencyClassifier.classify(scan_in, scan_out, all_blank, today) {
                    ResidencyState::InStudio(days) => Cell::Int(days),
                    ResidencyState::Unknown => Cell::Blank,
                    state => Cell::text(state.to_string()),
                }
            })
            .collect();
        table.set_column("Days in Studio", residency_cells);

        // 8) aggregate status
        let mut late_records = 0;
        let status_cells: Vec<Cell> = row_flags
            .iter()
            .map(|flags| {
                let status = aggregate_status(flags.iter().copied());
                if status == LATE {
                    late_records += 1;
                }
                Cell::text(status)
            })
            .collect();
        table.set_column("SLA status", status_cells);

        let summary = RunSummary {
            rows_loaded,
            rows_dropped_missing_scan_in: rows_dropped,
            rows_evaluated: rows,
            late_records,
            breaches_by_category,
        };
        info!(
            late = summary.late_records,
            evaluated = summary.rows_evaluated,
            "engine pass complete"
        );

        Ok(EngineOutput { table, summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Config without pruning, so fixtures can stay narrow.
    fn test_config() -> EngineConfig {
        EngineConfig {
            pruned_columns: Vec::new(),
            ..EngineConfig::default()
        }
    }

    fn fixture_table() -> DataTable {
        DataTable::new(vec![
            "Item".into(),
            "Scan In Date".into(),
            "Scan Out Date".into(),
            "Photo Still Date".into(),
            "Still Upload Date".into(),
            "Photo Model Date".into(),
            "Model Upload Date".into(),
            "Photo Mannequin Date".into(),
            "Mannequin Upload Date".into(),
        ])
    }

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| Cell::text(*c)).collect()
    }

    #[test]
    fn test_breach_scenario_open_interval() {
        // photo Mon 15th, no upload, today Mon 22nd (5 business days),
        // allowance 2 -> 3 over, LATE
        let mut table = fixture_table();
        table.push_row(row(&[
            "GAR001",
            "15/01/2024",
            "",
            "15/01/2024",
            "",
            "",
            "",
            "",
            "",
        ]));

        let output = SlaEngine::new(test_config())
            .run(table, date(2024, 1, 22))
            .unwrap();
        let t = &output.table;

        let flag_col = t.column_index("Stills Out of SLA").unwrap();
        let days_col = t.column_index("Day(s) out of SLA - STILLS").unwrap();
        let status_col = t.column_index("SLA status").unwrap();
        assert_eq!(t.cell(0, flag_col), &Cell::Text("LATE".into()));
        assert_eq!(t.cell(0, days_col), &Cell::Int(3));
        assert_eq!(t.cell(0, status_col), &Cell::Text("LATE".into()));
        assert_eq!(output.summary.late_records, 1);
    }

    #[test]
    fn test_all_on_track_even_with_skipped_category() {
        // no Model photo date at all; Stills/Mannequin uploaded next day
        let mut table = fixture_table();
        table.push_row(row(&[
            "GAR002",
            "15/01/2024",
            "",
            "15/01/2024",
            "16/01/2024",
            "",
            "",
            "15/01/2024",
            "16/01/2024",
        ]));

        let output = SlaEngine::new(test_config())
            .run(table, date(2024, 3, 1))
            .unwrap();
        let t = &output.table;

        let status_col = t.column_index("SLA status").unwrap();
        assert_eq!(t.cell(0, status_col), &Cell::Blank);
        assert_eq!(output.summary.late_records, 0);
    }

    #[test]
    fn test_rows_without_scan_in_are_dropped_silently() {
        let mut table = fixture_table();
        table.push_row(row(&["GAR003", "", "", "15/01/2024", "", "", "", "", ""]));
        table.push_row(row(&["GAR004", "garbage", "", "", "", "", "", "", ""]));
        table.push_row(row(&["GAR005", "15/01/2024", "", "", "", "", "", "", ""]));

        let output = SlaEngine::new(test_config())
            .run(table, date(2024, 1, 22))
            .unwrap();

        assert_eq!(output.summary.rows_loaded, 3);
        assert_eq!(output.summary.rows_dropped_missing_scan_in, 2);
        assert_eq!(output.table.row_count(), 1);
    }

    #[test]
    fn test_missing_scan_in_column_aborts() {
        let mut table = DataTable::new(vec!["Item".into(), "Photo Still Date".into()]);
        table.push_row(row(&["GAR006", "15/01/2024"]));

        let result = SlaEngine::new(test_config()).run(table, date(2024, 1, 22));
        assert!(matches!(result, Err(EngineError::MissingScanInColumn)));
    }

    #[test]
    fn test_residency_precedence_never_shot() {
        let mut table = fixture_table();
        // scanned in and out, nothing ever shot
        table.push_row(row(&[
            "GAR007",
            "15/01/2024",
            "19/01/2024",
            "",
            "",
            "",
            "",
            "",
            "",
        ]));
        // scanned in and out, stills shot
        table.push_row(row(&[
            "GAR008",
            "15/01/2024",
            "19/01/2024",
            "16/01/2024",
            "",
            "",
            "",
            "",
            "",
        ]));

        let output = SlaEngine::new(test_config())
            .run(table, date(2024, 1, 22))
            .unwrap();
        let t = &output.table;
        let col = t.column_index("Days in Studio").unwrap();

        assert_eq!(
            t.cell(0, col),
            &Cell::Text("SCANNED OUT AND NEVER SHOT".into())
        );
        assert_eq!(t.cell(1, col), &Cell::Text("SCANNED OUT".into()));
    }

    #[test]
    fn test_in_studio_day_count() {
        let mut table = fixture_table();
        table.push_row(row(&["GAR009", "15/01/2024", "", "", "", "", "", "", ""]));

        let output = SlaEngine::new(test_config())
            .run(table, date(2024, 1, 22))
            .unwrap();
        let t = &output.table;
        let col = t.column_index("Days in Studio").unwrap();
        assert_eq!(t.cell(0, col), &Cell::Int(5));
    }

    #[test]
    fn test_advisory_note_can_co_occur_with_breach() {
        let mut table = fixture_table();
        table.push_row(row(&[
            "GAR010",
            "15/01/2024",
            "",
            "15/01/2024",
            "",
            "",
            "",
            "",
            "",
        ]));

        let output = SlaEngine::new(test_config())
            .run(table, date(2024, 1, 22))
            .unwrap();
        let t = &output.table;

        let notes_col = t.column_index("Notes").unwrap();
        let flag_col = t.column_index("Stills Out of SLA").unwrap();
        assert_eq!(
            t.cell(0, notes_col),
            &Cell::Text("Awaiting model shot".into())
        );
        assert_eq!(t.cell(0, flag_col), &Cell::Text("LATE".into()));
    }

    #[test]
    fn test_advisory_note_without_scan_out_column() {
        // scan-out column entirely absent: scan-out degrades to
        // always-unknown and the note can still fire
        let mut table = DataTable::new(vec![
            "Item".into(),
            "Scan In Date".into(),
            "Photo Still Date".into(),
        ]);
        table.push_row(row(&["GAR011", "15/01/2024", "15/01/2024"]));

        let output = SlaEngine::new(test_config())
            .run(table, date(2024, 1, 22))
            .unwrap();
        let t = &output.table;
        let notes_col = t.column_index("Notes").unwrap();
        assert_eq!(
            t.cell(0, notes_col),
            &Cell::Text("Awaiting model shot".into())
        );
    }

    #[test]
    fn test_output_column_order() {
        let mut table = fixture_table();
        table.push_row(row(&["GAR012", "15/01/2024", "", "", "", "", "", "", ""]));

        let output = SlaEngine::new(test_config())
            .run(table, date(2024, 1, 22))
            .unwrap();
        let cols = output.table.columns();
        let tail: Vec<&str> = cols[cols.len() - 9..].iter().map(|s| s.as_str()).collect();
        assert_eq!(
            tail,
            vec![
                "Stills Out of SLA",
                "Day(s) out of SLA - STILLS",
                "Model Out of SLA",
                "Day(s) out of SLA - MODEL",
                "Mannequin Out of SLA",
                "Day(s) out of SLA - MANNEQUIN",
                "Notes",
                "Days in Studio",
                "SLA status",
            ]
        );
    }

    #[test]
    fn test_skipped_category_adds_no_columns() {
        let mut table = DataTable::new(vec![
            "Item".into(),
            "Scan In Date".into(),
            "Photo Still Date".into(),
        ]);
        table.push_row(row(&["GAR013", "15/01/2024", "16/01/2024"]));

        let output = SlaEngine::new(test_config())
            .run(table, date(2024, 1, 22))
            .unwrap();
        let t = &output.table;
        assert!(t.column_index("Model Out of SLA").is_none());
        assert!(t.column_index("Day(s) out of SLA - MANNEQUIN").is_none());
        assert!(t.column_index("Stills Out of SLA").is_some());
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let mut table = fixture_table();
        table.push_row(row(&[
            "GAR014",
            "15/01/2024",
            "",
            "15/01/2024",
            "",
            "",
            "",
            "",
            "",
        ]));

        let today = date(2024, 1, 22);
        let engine = SlaEngine::new(test_config());
        let first = engine.run(table, today).unwrap();
        let second = engine.run(first.table.clone(), today).unwrap();

        // previously computed SLA columns are not date-named, so they
        // are not re-normalized; the derived values come out identical
        for name in [
            "Stills Out of SLA",
            "Day(s) out of SLA - STILLS",
            "Days in Studio",
            "SLA status",
        ] {
            let a = first.table.column_index(name).unwrap();
            let b = second.table.column_index(name).unwrap();
            assert_eq!(first.table.cell(0, a), second.table.cell(0, b), "{}", name);
        }
    }
}
