use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use hmpi_model::{MetalKey, MetalMap};

use crate::error::IngestError;
use crate::row::{DataRow, MetalCell};

/// Non-metal columns every measurement table carries, in export order.
pub const IDENTIFYING_COLUMNS: [&str; 5] =
    ["State", "District", "Location", "Longitude", "Latitude"];

/// All 13 required columns: identifying columns followed by the metals.
pub fn required_columns() -> Vec<&'static str> {
    IDENTIFYING_COLUMNS
        .into_iter()
        .chain(MetalKey::ALL.into_iter().map(MetalKey::symbol))
        .collect()
}

/// How metal cells that are not non-negative decimals are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Keep the row and read the cell as absent.
    #[default]
    Lenient,
    /// Fail the whole parse on the first such cell.
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    pub mode: ParseMode,
}

impl IngestOptions {
    pub fn strict() -> Self {
        Self {
            mode: ParseMode::Strict,
        }
    }
}

/// A metal cell that was read as absent under the lenient policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnparseableCell {
    /// 1-based line in the source text.
    pub line: u64,
    pub metal: MetalKey,
    pub raw: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    /// Rows in source order.
    pub rows: Vec<DataRow>,
    pub unparseable: Vec<UnparseableCell>,
    /// Header names beyond the required 13, ignored on import.
    pub extra_columns: Vec<String>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Positions of the required columns within a header row.
struct ColumnLayout {
    identifying: [usize; 5],
    metals: MetalMap<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &[String]) -> Result<Self, IngestError> {
        let find = |name: &str| headers.iter().position(|header| header == name);
        let missing: Vec<String> = required_columns()
            .into_iter()
            .filter(|name| find(*name).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::MissingHeaders { missing });
        }
        let identifying = IDENTIFYING_COLUMNS.map(|name| find(name).unwrap_or_default());
        let metals = MetalMap::from_fn(|metal| find(metal.symbol()).unwrap_or_default());
        Ok(Self {
            identifying,
            metals,
        })
    }

    fn is_required(&self, index: usize) -> bool {
        self.identifying.contains(&index) || self.metals.values().any(|column| *column == index)
    }
}

fn cell(record: &StringRecord, index: usize) -> String {
    record.get(index).map(normalize_cell).unwrap_or_default()
}

/// Parses CSV text with the lenient cell policy.
pub fn parse_table(text: &str) -> Result<Vec<DataRow>, IngestError> {
    parse_table_with_options(text, &IngestOptions::default()).map(|table| table.rows)
}

/// Parses CSV text whose header row contains the 13 required columns.
///
/// Column order is free and extra columns are ignored. Short rows are padded
/// with empty cells and fully blank rows are skipped.
pub fn parse_table_with_options(
    text: &str,
    options: &IngestOptions,
) -> Result<ParsedTable, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(normalize_header).collect();
    let layout = ColumnLayout::from_headers(&headers)?;
    let extra_columns = headers
        .iter()
        .enumerate()
        .filter(|(index, header)| !layout.is_required(*index) && !header.is_empty())
        .map(|(_, header)| header.clone())
        .collect();

    let mut table = ParsedTable {
        extra_columns,
        ..ParsedTable::default()
    };
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);
        let [state, district, location, longitude, latitude] =
            layout.identifying.map(|index| cell(&record, index));
        let metals = MetalMap::from_fn(|metal| MetalCell::new(cell(&record, layout.metals[metal])));
        for (metal, metal_cell) in metals.iter() {
            if !metal_cell.reading.is_unparseable() {
                continue;
            }
            if options.mode == ParseMode::Strict {
                return Err(IngestError::InvalidCell {
                    line,
                    column: metal,
                    value: metal_cell.raw.clone(),
                });
            }
            table.unparseable.push(UnparseableCell {
                line,
                metal,
                raw: metal_cell.raw.clone(),
            });
        }
        table.rows.push(DataRow {
            state,
            district,
            location,
            longitude,
            latitude,
            metals,
        });
    }

    tracing::debug!(rows = table.rows.len(), "parsed measurement table");
    if !table.unparseable.is_empty() {
        tracing::warn!(
            cells = table.unparseable.len(),
            "unparseable metal cells read as absent"
        );
    }
    Ok(table)
}

pub fn read_table(path: &Path) -> Result<Vec<DataRow>, IngestError> {
    read_table_with_options(path, &IngestOptions::default()).map(|table| table.rows)
}

pub fn read_table_with_options(
    path: &Path,
    options: &IngestOptions,
) -> Result<ParsedTable, IngestError> {
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_table_with_options(&text, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_columns_are_identifying_then_metals() {
        let columns = required_columns();
        assert_eq!(columns.len(), 13);
        assert_eq!(&columns[..5], &IDENTIFYING_COLUMNS);
        assert_eq!(columns[5], "Cd");
        assert_eq!(columns[12], "Zn");
    }

    #[test]
    fn headers_are_trimmed_and_bom_stripped() {
        assert_eq!(normalize_header("\u{feff}State "), "State");
        assert_eq!(normalize_header("  Sample   Id "), "Sample Id");
    }
}
