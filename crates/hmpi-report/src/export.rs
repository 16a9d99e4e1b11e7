use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use hmpi_aggregate::IndexedRow;
use hmpi_ingest::required_columns;

/// Header of the indexed export: required input columns, then the indices.
pub const EXPORT_COLUMNS: [&str; 16] = [
    "State",
    "District",
    "Location",
    "Longitude",
    "Latitude",
    "Cd",
    "Cr",
    "Cu",
    "Pb",
    "Mn",
    "Ni",
    "Fe",
    "Zn",
    "HPI",
    "HEI",
    "CI",
];

/// Writes indexed rows as CSV.
///
/// Input cells keep the text they were uploaded with. Indices are written at
/// full precision; rounding is left to whoever displays them.
pub fn write_indexed_csv<W: Write>(writer: W, rows: &[IndexedRow<'_>]) -> Result<()> {
    let input_columns = required_columns();
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(EXPORT_COLUMNS)
        .context("write export header")?;
    for (index, indexed) in rows.iter().enumerate() {
        let mut record: Vec<String> = input_columns
            .iter()
            .map(|name| indexed.row.column(name).unwrap_or_default().to_string())
            .collect();
        record.extend([indexed.hpi, indexed.hei, indexed.ci].map(|value| value.to_string()));
        out.write_record(&record)
            .with_context(|| format!("write export row {}", index + 1))?;
    }
    out.flush().context("flush export")?;
    Ok(())
}

pub fn write_indexed_csv_file(path: &Path, rows: &[IndexedRow<'_>]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_indexed_csv(BufWriter::new(file), rows)
        .with_context(|| format!("write {}", path.display()))
}
