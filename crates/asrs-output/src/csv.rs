//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `transactions.csv`
//! - `overlaps.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, OverlapRow, RunSummaryRow, TransactionRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    transactions: Writer<File>,
    overlaps: Writer<File>,
    summary: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut transactions = Writer::from_path(dir.join("transactions.csv"))?;
        transactions.write_record([
            "transaction_id",
            "robot_id",
            "target_aisle",
            "target_level",
            "travel_secs",
            "extraction_secs",
            "total_secs",
            "valid",
        ])?;

        let mut overlaps = Writer::from_path(dir.join("overlaps.csv"))?;
        overlaps.write_record(["aisle", "level", "visits", "overlaps", "delay_secs"])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record([
            "transactions",
            "valid",
            "flagged",
            "avg_transaction_secs",
            "total_distance_m",
            "total_overlaps",
            "total_delay_secs",
            "system_cost",
            "cost_per_transaction",
        ])?;

        Ok(Self { transactions, overlaps, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_transactions(&mut self, rows: &[TransactionRow]) -> OutputResult<()> {
        for row in rows {
            self.transactions.write_record(&[
                row.transaction_id.to_string(),
                row.robot_id.to_string(),
                row.target_aisle.to_string(),
                row.target_level.to_string(),
                row.travel_secs.to_string(),
                row.extraction_secs.to_string(),
                row.total_secs.to_string(),
                (row.valid as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_overlaps(&mut self, rows: &[OverlapRow]) -> OutputResult<()> {
        for row in rows {
            self.overlaps.write_record(&[
                row.aisle.to_string(),
                row.level.to_string(),
                row.visits.to_string(),
                row.overlaps.to_string(),
                row.delay_secs.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.transactions.to_string(),
            row.valid.to_string(),
            row.flagged.to_string(),
            row.avg_transaction_secs.to_string(),
            row.total_distance_m.to_string(),
            row.total_overlaps.to_string(),
            row.total_delay_secs.to_string(),
            row.system_cost.to_string(),
            row.cost_per_transaction.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.transactions.flush()?;
        self.overlaps.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
