//! Integration tests for asrs-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{OverlapRow, RunSummaryRow, TransactionRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn tx_row(id: u32) -> TransactionRow {
        TransactionRow {
            transaction_id: id,
            robot_id: (id % 3) as u16,
            target_aisle: 1,
            target_level: 2,
            travel_secs: 12.5,
            extraction_secs: 2.0,
            total_secs: 14.5,
            valid: true,
        }
    }

    fn summary_row() -> RunSummaryRow {
        RunSummaryRow {
            transactions: 10,
            valid: 9,
            flagged: 1,
            avg_transaction_secs: 14.5,
            total_distance_m: 321.0,
            total_overlaps: 2,
            total_delay_secs: 5.0,
            system_cost: 131.0,
            cost_per_transaction: 13.1,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("transactions.csv").exists());
        assert!(dir.path().join("overlaps.csv").exists());
        assert!(dir.path().join("run_summary.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("transactions.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "transaction_id",
                "robot_id",
                "target_aisle",
                "target_level",
                "travel_secs",
                "extraction_secs",
                "total_secs",
                "valid"
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("overlaps.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["aisle", "level", "visits", "overlaps", "delay_secs"]);
    }

    #[test]
    fn csv_transaction_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![tx_row(0), tx_row(1), tx_row(2)];
        w.write_transactions(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("transactions.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[1][0], "1");
        assert_eq!(&records[1][4], "12.5");
        assert_eq!(&records[1][7], "1");
    }

    #[test]
    fn csv_overlap_and_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_overlaps(&[OverlapRow {
            aisle: 0,
            level: 1,
            visits: 3,
            overlaps: 2,
            delay_secs: 5.0,
        }])
        .unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "10");
        assert_eq!(&records[0][8], "13.1");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn nan_cost_serializes() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut row = summary_row();
        row.cost_per_transaction = f64::NAN;
        w.write_summary(&row).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("run_summary.csv")).unwrap();
        let records: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&records[0][8], "NaN");
    }
}
