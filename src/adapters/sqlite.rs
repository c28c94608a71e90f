use crate::domain::model::ResultTable;
use crate::domain::ports::Sink;
use crate::utils::error::Result;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SqliteSink {
    db_path: PathBuf,
    table_name: String,
}

impl SqliteSink {
    pub fn new(db_path: impl Into<PathBuf>, table_name: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            table_name: table_name.into(),
        }
    }
}

impl Sink for SqliteSink {
    fn destination(&self) -> String {
        format!("{}#{}", self.db_path.display(), self.table_name)
    }

    fn persist(&self, table: &ResultTable) -> Result<()> {
        persist_to_database(table, &self.db_path, &self.table_name)
    }
}

/// Replaces `table_name` in the SQLite file at `db_path` with the contents of
/// `table`.
///
/// Drop, create and inserts run in one transaction: on failure the previous
/// table survives untouched. The connection lives only for this call.
pub fn persist_to_database(
    table: &ResultTable,
    db_path: impl AsRef<Path>,
    table_name: &str,
) -> Result<()> {
    let db_path = db_path.as_ref();
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut conn = Connection::open(db_path)?;
    let ident = quote_identifier(table_name);

    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        r#"
        DROP TABLE IF EXISTS {ident};
        CREATE TABLE {ident} (
            "Country" TEXT,
            "Language" TEXT,
            "Language_Hash" TEXT,
            "Time" REAL
        );
        "#
    ))?;

    {
        let mut stmt = tx.prepare(&format!(
            r#"INSERT INTO {ident} ("Country", "Language", "Language_Hash", "Time") VALUES (?1, ?2, ?3, ?4)"#
        ))?;
        for row in table.rows() {
            stmt.execute(params![
                row.country,
                row.language,
                row.language_hash,
                row.processing_seconds
            ])?;
        }
    }

    tx.commit()?;

    tracing::info!(
        "Data saved to {} in table {}.",
        db_path.display(),
        table_name
    );
    Ok(())
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::NormalizedRow;
    use crate::utils::error::EtlError;
    use tempfile::TempDir;

    fn sample_table(names: &[&str]) -> ResultTable {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| NormalizedRow {
                country: name.to_string(),
                language: "English".to_string(),
                language_hash: "649df08a448ee3fa90f3746baaf6b0907df42c91".to_string(),
                processing_seconds: i as f64 * 0.001,
            })
            .collect()
    }

    fn read_countries(db_path: &Path, table_name: &str) -> Vec<(String, f64)> {
        let conn = Connection::open(db_path).unwrap();
        let mut stmt = conn
            .prepare(&format!(
                r#"SELECT "Country", "Time" FROM {} ORDER BY rowid"#,
                quote_identifier(table_name)
            ))
            .unwrap();
        stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .unwrap()
            .collect::<rusqlite::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_persist_creates_table_with_column_types() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("countries.db");

        persist_to_database(&sample_table(&["Chile", "Kenya"]), &db_path, "countries").unwrap();

        let conn = Connection::open(&db_path).unwrap();
        let mut stmt = conn.prepare("PRAGMA table_info(countries)").unwrap();
        let columns: Vec<(String, String)> = stmt
            .query_map([], |row| Ok((row.get(1)?, row.get(2)?)))
            .unwrap()
            .collect::<rusqlite::Result<Vec<_>>>()
            .unwrap();

        assert_eq!(
            columns,
            vec![
                ("Country".to_string(), "TEXT".to_string()),
                ("Language".to_string(), "TEXT".to_string()),
                ("Language_Hash".to_string(), "TEXT".to_string()),
                ("Time".to_string(), "REAL".to_string()),
            ]
        );

        let rows = read_countries(&db_path, "countries");
        assert_eq!(rows, vec![("Chile".to_string(), 0.0), ("Kenya".to_string(), 0.001)]);
    }

    #[test]
    fn test_persist_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("countries.db");

        persist_to_database(&sample_table(&["A", "B", "C"]), &db_path, "countries").unwrap();
        persist_to_database(&sample_table(&["D"]), &db_path, "countries").unwrap();

        let rows = read_countries(&db_path, "countries");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "D");
    }

    #[test]
    fn test_persist_keeps_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("dupes.db");

        persist_to_database(&sample_table(&["Niger", "Niger"]), &db_path, "countries").unwrap();

        assert_eq!(read_countries(&db_path, "countries").len(), 2);
    }

    #[test]
    fn test_persist_quotes_table_name() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("odd.db");
        let table_name = "country \"stats\"; DROP";

        persist_to_database(&sample_table(&["Peru"]), &db_path, table_name).unwrap();

        assert_eq!(read_countries(&db_path, table_name)[0].0, "Peru");
    }

    #[test]
    fn test_locked_database_fails_and_keeps_previous_table() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("countries.db");

        persist_to_database(&sample_table(&["A", "B", "C"]), &db_path, "countries").unwrap();

        let holder = Connection::open(&db_path).unwrap();
        holder.execute_batch("BEGIN IMMEDIATE").unwrap();

        let result = persist_to_database(&sample_table(&["D"]), &db_path, "countries");
        assert!(matches!(result, Err(EtlError::DatabaseError(_))));
        assert!(result.unwrap_err().is_fatal());

        holder.execute_batch("ROLLBACK").unwrap();

        let rows = read_countries(&db_path, "countries");
        let names: Vec<&str> = rows.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_sink_destination() {
        let sink = SqliteSink::new("countries.db", "countries");
        assert_eq!(sink.destination(), "countries.db#countries");
    }
}
