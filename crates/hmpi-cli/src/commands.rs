use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use hmpi_aggregate::to_indexed_rows;
use hmpi_cli::pipeline::{
    GroupField, RankingRequest, build_report, ingest, load_registry, sample_from_assignments,
    select_profile,
};
use hmpi_core::evaluate;
use hmpi_model::MetalKey;
use hmpi_report::{format_number, write_indexed_csv_file, write_summary_json};

use crate::cli::{CalcArgs, ReportArgs, StandardsArgs};
use crate::summary::apply_table_style;
use crate::types::{CalcResult, ReportResult};

pub fn run_profiles(args: &StandardsArgs) -> Result<()> {
    let registry = load_registry(args.profiles_file.as_deref())?;
    let selected = select_profile(&registry, args.profile.as_deref())?;
    let mut table = Table::new();
    let mut header = vec!["Profile".to_string(), "Slug".to_string()];
    header.extend(MetalKey::ALL.iter().map(|metal| format!("{metal} (mg/L)")));
    table.set_header(header);
    apply_table_style(&mut table);
    for named in registry.profiles() {
        let marker = if named.name == selected.name { " *" } else { "" };
        let mut row = vec![format!("{}{marker}", named.name), named.slug()];
        row.extend(named.profile.iter().map(|(_, limit)| limit.to_string()));
        table.add_row(row);
    }
    println!("{table}");
    for named in registry.profiles() {
        if let Some(description) = &named.description {
            println!("{}: {description}", named.name);
        }
    }
    Ok(())
}

pub fn run_calc(args: &CalcArgs) -> Result<CalcResult> {
    let registry = load_registry(args.standards.profiles_file.as_deref())?;
    let named = select_profile(&registry, args.standards.profile.as_deref())?;
    let sample = sample_from_assignments(&args.values)?;
    let result = evaluate(&sample, &named.profile);
    info!(
        profile = %named.name,
        hpi = %format_number(result.hpi, 2),
        overall = %result.overall(),
        "evaluated sample"
    );
    Ok(CalcResult {
        profile: named.name.clone(),
        sample,
        result,
        top: args.top,
    })
}

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let span = info_span!("report", input = %args.input.display());
    let _guard = span.enter();

    let registry = load_registry(args.standards.profiles_file.as_deref())?;
    let named = select_profile(&registry, args.standards.profile.as_deref())?;
    let table = ingest(&args.input, args.strict)?;
    let indexed = to_indexed_rows(&table.rows, args.unit, &named.profile);

    if let Some(path) = &args.output {
        write_indexed_csv_file(path, &indexed)?;
        info!(path = %path.display(), rows = indexed.len(), "wrote indexed table");
    }

    let ranking = args.metal.map(|metal| RankingRequest {
        metal,
        field: args.group_by.map_or(GroupField::District, Into::into),
        top: args.top,
    });
    let mut data = build_report(
        &table,
        &indexed,
        args.unit,
        named,
        args.group_by.map(Into::into),
        ranking,
    );
    data.summary = data.summary.with_timestamp();

    if let Some(path) = &args.summary_json {
        write_summary_json(path, &data.summary)?;
        info!(path = %path.display(), "wrote report summary");
    }

    Ok(ReportResult {
        input: args.input.clone(),
        data,
        output: args.output.clone(),
        summary_json: args.summary_json.clone(),
    })
}
