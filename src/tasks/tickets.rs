//! Gold ticket sales task
//!
//! Opens the SQLite database `ticket-sales.db`, sums `units * price` over
//! rows of the `tickets` table where `type = 'Gold'`, and writes the total
//! to `ticket-sales-gold.txt` (`0` when no such rows exist).

use rusqlite::Connection;
use std::fs;
use std::path::Path;

use super::{require_input, TaskError};

pub fn gold_ticket_sales(data_dir: &Path) -> Result<(), TaskError> {
    let db_path = require_input(data_dir, "ticket-sales.db")?;
    let conn = Connection::open(&db_path)?;

    // SUM over an empty set is NULL
    let total: Option<f64> = conn.query_row(
        "SELECT SUM(units * price) FROM tickets WHERE type = 'Gold'",
        [],
        |row| row.get(0),
    )?;

    fs::write(
        data_dir.join("ticket-sales-gold.txt"),
        format_total(total.unwrap_or(0.0)),
    )?;
    Ok(())
}

/// Format the total without a trailing `.0` when it is integral
fn format_total(total: f64) -> String {
    if total.fract() == 0.0 {
        format!("{total:.0}")
    } else {
        total.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_db(dir: &Path, rows: &[(&str, i64, f64)]) {
        let conn = Connection::open(dir.join("ticket-sales.db")).unwrap();
        conn.execute(
            "CREATE TABLE tickets (type TEXT, units INTEGER, price REAL)",
            [],
        )
        .unwrap();
        for (ticket_type, units, price) in rows {
            conn.execute(
                "INSERT INTO tickets (type, units, price) VALUES (?1, ?2, ?3)",
                rusqlite::params![ticket_type, units, price],
            )
            .unwrap();
        }
    }

    fn written_total(dir: &Path) -> String {
        std::fs::read_to_string(dir.join("ticket-sales-gold.txt")).unwrap()
    }

    #[test]
    fn test_sums_gold_rows_only() {
        let temp = TempDir::new().unwrap();
        create_db(
            temp.path(),
            &[
                ("Gold", 2, 100.0),
                ("Silver", 5, 50.0),
                ("Gold", 1, 25.5),
            ],
        );

        gold_ticket_sales(temp.path()).unwrap();
        assert_eq!(written_total(temp.path()), "225.5");
    }

    #[test]
    fn test_integral_total_has_no_decimal() {
        let temp = TempDir::new().unwrap();
        create_db(temp.path(), &[("Gold", 3, 10.0)]);

        gold_ticket_sales(temp.path()).unwrap();
        assert_eq!(written_total(temp.path()), "30");
    }

    #[test]
    fn test_no_gold_rows_writes_zero() {
        let temp = TempDir::new().unwrap();
        create_db(temp.path(), &[("Silver", 5, 50.0)]);

        gold_ticket_sales(temp.path()).unwrap();
        assert_eq!(written_total(temp.path()), "0");
    }

    #[test]
    fn test_missing_database() {
        let temp = TempDir::new().unwrap();
        let err = gold_ticket_sales(temp.path()).unwrap_err();
        assert!(matches!(err, TaskError::InvalidPath(_)));
    }

    #[test]
    fn test_missing_table_is_db_error() {
        let temp = TempDir::new().unwrap();
        // Valid but empty database file
        let conn = Connection::open(temp.path().join("ticket-sales.db")).unwrap();
        conn.execute("CREATE TABLE other (x INTEGER)", []).unwrap();
        drop(conn);

        let err = gold_ticket_sales(temp.path()).unwrap_err();
        assert!(matches!(err, TaskError::Db(_)));
    }
}
