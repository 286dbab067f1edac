// src/table/write.rs

use anyhow::{Context, Result};
use std::{fs::File, io::Write, path::Path};

use super::Table;

/// Serialize `table` as CSV: header row, then one record per row.
pub fn write_csv<W: Write>(table: &Table, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);

    writer
        .write_record(table.headers())
        .context("writing CSV header")?;
    for (i, row) in table.rows().enumerate() {
        writer
            .write_record(&row)
            .with_context(|| format!("writing CSV row {}", i + 1))?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}

/// Create (or truncate) `path` and write the table into it.
pub fn write_csv_file(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
    write_csv(table, file).with_context(|| format!("writing {:?}", path))
}
