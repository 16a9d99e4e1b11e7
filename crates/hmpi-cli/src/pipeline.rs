//! Command pipeline: argument parsing helpers and report assembly.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{debug, info};

use hmpi_aggregate::{
    AggregateStats, GroupMean, IndexedRow, RowGroup, district_label, group_by, group_by_district,
    group_by_state, group_label, rank_groups_by_metal, summarize,
};
use hmpi_ingest::{DataRow, IngestOptions, ParsedTable, read_table_with_options};
use hmpi_model::{ConcentrationSample, ConcentrationUnit, MetalKey};
use hmpi_report::ReportSummary;
use hmpi_standards::{NamedProfile, StandardsRegistry};

/// Parses one `METAL=VALUE` argument, e.g. `Pb=0.02`.
pub fn parse_assignment(text: &str) -> Result<(MetalKey, f64)> {
    let (metal, value) = text
        .split_once('=')
        .ok_or_else(|| anyhow!("expected METAL=VALUE, got '{text}'"))?;
    let metal: MetalKey = metal.parse()?;
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid concentration for {metal}: '{}'", value.trim()))?;
    Ok((metal, value))
}

/// Builds a sample from `METAL=VALUE` arguments in mg/L.
///
/// Metals not mentioned are 0. Naming a metal twice is an error.
pub fn sample_from_assignments<I, S>(assignments: I) -> Result<ConcentrationSample>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sample = ConcentrationSample::zero();
    let mut seen = [false; MetalKey::COUNT];
    for assignment in assignments {
        let (metal, value) = parse_assignment(assignment.as_ref())?;
        if std::mem::replace(&mut seen[metal.index()], true) {
            bail!("{metal} given more than once");
        }
        sample.set(metal, value)?;
    }
    Ok(sample)
}

/// Built-in profiles, extended by `profiles_file` when given.
pub fn load_registry(profiles_file: Option<&Path>) -> Result<StandardsRegistry> {
    match profiles_file {
        Some(path) => StandardsRegistry::with_profiles_file(path)
            .with_context(|| format!("load profiles from {}", path.display())),
        None => Ok(StandardsRegistry::builtin()),
    }
}

/// The named profile, or the registry default when no name is given.
pub fn select_profile<'r>(
    registry: &'r StandardsRegistry,
    name: Option<&str>,
) -> Result<&'r NamedProfile> {
    match name {
        Some(name) => Ok(registry.resolve(name)?),
        None => Ok(registry.default_profile()),
    }
}

pub fn ingest(path: &Path, strict: bool) -> Result<ParsedTable> {
    let options = if strict {
        IngestOptions::strict()
    } else {
        IngestOptions::default()
    };
    let table = read_table_with_options(path, &options)
        .with_context(|| format!("read {}", path.display()))?;
    info!(
        rows = table.rows.len(),
        unparseable = table.unparseable.len(),
        "loaded measurement table"
    );
    if !table.extra_columns.is_empty() {
        debug!(columns = ?table.extra_columns, "ignored extra columns");
    }
    Ok(table)
}

/// Column that rows are rolled up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    State,
    District,
}

impl GroupField {
    pub fn label(self) -> &'static str {
        match self {
            GroupField::State => "State",
            GroupField::District => "District",
        }
    }

    /// Group key for `row`; districts are qualified by their state.
    fn key(self, row: &DataRow) -> String {
        match self {
            GroupField::State => group_label(&row.state),
            GroupField::District => district_label(&row.state, &row.district),
        }
    }

    fn group_rows(self, rows: &[DataRow]) -> Vec<RowGroup<'_, String>> {
        match self {
            GroupField::State => group_by_state(rows),
            GroupField::District => group_by_district(rows),
        }
    }
}

impl fmt::Display for GroupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which groups to rank and by which metal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingRequest {
    pub metal: MetalKey,
    pub field: GroupField,
    pub top: usize,
}

#[derive(Debug, Clone)]
pub struct MetalRanking {
    pub request: RankingRequest,
    /// Input unit the means are displayed in.
    pub unit: ConcentrationUnit,
    pub groups: Vec<GroupMean<String>>,
}

impl MetalRanking {
    /// Mean of `group` converted back into the input unit.
    pub fn display_mean(&self, group: &GroupMean<String>) -> f64 {
        self.unit.from_mg_per_l(group.mean_mg)
    }
}

/// Everything a `report` run prints.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub summary: ReportSummary,
    pub overall: AggregateStats,
    pub unparseable: usize,
    pub grouped_by: Option<GroupField>,
    pub groups: Vec<AggregateStats>,
    pub ranking: Option<MetalRanking>,
}

/// Assembles the report for `table` once it has been indexed.
pub fn build_report(
    table: &ParsedTable,
    indexed: &[IndexedRow<'_>],
    unit: ConcentrationUnit,
    profile: &NamedProfile,
    group: Option<GroupField>,
    ranking: Option<RankingRequest>,
) -> ReportData {
    let summary = ReportSummary::build(&table.rows, indexed, unit, profile);
    let overall = summarize("All rows", indexed);
    let groups: Vec<AggregateStats> = group
        .map(|field| {
            group_by(indexed, |row: &IndexedRow<'_>| field.key(row.row))
                .iter()
                .map(|group| summarize(&group.key, group.rows.iter().copied()))
                .collect()
        })
        .unwrap_or_default();
    debug!(groups = groups.len(), "summarized groups");
    let ranking = ranking.map(|request| {
        let groups = request.field.group_rows(&table.rows);
        MetalRanking {
            request,
            unit,
            groups: rank_groups_by_metal(&groups, request.metal, unit, Some(request.top)),
        }
    });
    ReportData {
        summary,
        overall,
        unparseable: table.unparseable.len(),
        grouped_by: group,
        groups,
        ranking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_parsing() {
        assert_eq!(parse_assignment("Pb=0.02").ok(), Some((MetalKey::Pb, 0.02)));
        assert_eq!(parse_assignment("zn= 4 ").ok(), Some((MetalKey::Zn, 4.0)));
        assert!(parse_assignment("Pb").is_err());
        assert!(parse_assignment("Hg=0.1").is_err());
        assert!(parse_assignment("Pb=lots").is_err());
    }

    #[test]
    fn group_field_reads_its_column() {
        let row = DataRow {
            state: "Kerala".to_string(),
            district: "Idukki".to_string(),
            ..DataRow::default()
        };
        assert_eq!(GroupField::State.key(&row), "Kerala");
        assert_eq!(GroupField::District.key(&row), "Idukki, Kerala");
    }
}
