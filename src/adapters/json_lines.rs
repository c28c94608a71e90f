use crate::domain::model::ResultTable;
use crate::domain::ports::Sink;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sink for JsonLinesSink {
    fn destination(&self) -> String {
        self.path.display().to_string()
    }

    fn persist(&self, table: &ResultTable) -> Result<()> {
        persist_to_file(table, &self.path)
    }
}

/// Writes one JSON object per row, newline terminated, no enclosing array.
pub fn write_json_lines<W: Write>(table: &ResultTable, writer: &mut W) -> Result<()> {
    for row in table.rows() {
        serde_json::to_writer(&mut *writer, &row)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

pub fn persist_to_file(table: &ResultTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_json_lines(table, &mut writer)?;
    writer.flush()?;

    tracing::info!("Data saved to {}.", path.display());
    Ok(())
}
