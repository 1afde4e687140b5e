// ==========================================
// Retouch SLA Checker - CLI Entry Point
// ==========================================
// Load a spreadsheet, run the SLA engine against a reference date,
// write the processed table back out as CSV.
// ==========================================

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use retouch_sla::{logging, CsvExporter, EngineConfig, SlaEngine, UniversalFileParser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "retouch-sla",
    version,
    about = "Batch evaluation of studio photography SLA breaches"
)]
struct Cli {
    /// Input spreadsheet (.xlsx or .csv)
    input: PathBuf,

    /// Reference "today" date (YYYY-MM-DD); defaults to the current date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Output CSV path; defaults to check_retouch_processed_{today}.csv
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print a machine-readable JSON run summary to stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    tracing::info!("==================================================");
    tracing::info!("{} v{}", retouch_sla::APP_NAME, retouch_sla::VERSION);
    tracing::info!(reference_date = %today);
    tracing::info!("==================================================");

    let table = UniversalFileParser
        .parse(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    tracing::info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded input table"
    );

    let engine = SlaEngine::new(EngineConfig::default());
    let output = engine.run(table, today).context("SLA evaluation failed")?;

    let out_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("check_retouch_processed_{}.csv", today)));
    CsvExporter
        .write(&output.table, &out_path)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::info!(path = %out_path.display(), "wrote processed table");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output.summary)?);
    }

    Ok(())
}
