use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hmpi_aggregate::AggregateStats;
use hmpi_cli::pipeline::MetalRanking;
use hmpi_model::{Category, IndexKind};
use hmpi_report::format_number;

use crate::types::{CalcResult, ReportResult};

pub fn print_calc(calc: &CalcResult) {
    println!("Profile: {}", calc.profile);
    let inputs: Vec<String> = calc
        .sample
        .iter()
        .filter(|(_, value)| *value > 0.0)
        .map(|(metal, value)| format!("{metal}={value}"))
        .collect();
    if !inputs.is_empty() {
        println!("Sample (mg/L): {}", inputs.join(" "));
    }
    let categories = &calc.result.categories;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Index"),
        header_cell("Value"),
        header_cell("Category"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, value, category) in [
        (IndexKind::Hpi, calc.result.hpi, categories.hpi),
        (IndexKind::Hei, calc.result.hei, categories.hei),
        (IndexKind::Ci, calc.result.ci, categories.ci),
    ] {
        table.add_row(vec![
            Cell::new(kind.name()).add_attribute(Attribute::Bold),
            Cell::new(format_number(value, 2)),
            category_cell(category),
        ]);
    }
    table.add_row(vec![
        Cell::new("OVERALL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(categories.overall.index),
        category_cell(categories.overall.category).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let top = calc.result.top_contributors(calc.top);
    if top.is_empty() {
        println!("All concentrations are 0.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metal"),
        header_cell("Mi (mg/L)"),
        header_cell("Si (mg/L)"),
        header_cell("Qi"),
        header_cell("Wi x Qi"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 1..5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for detail in top {
        table.add_row(vec![
            Cell::new(detail.metal.label()),
            Cell::new(detail.mi),
            Cell::new(detail.si),
            Cell::new(format_number(detail.qi, 2)),
            Cell::new(format_number(detail.contribution, 2)),
        ]);
    }
    println!();
    println!("Top contributors:");
    println!("{table}");
}

pub fn print_report(report: &ReportResult) {
    let data = &report.data;
    let summary = &data.summary;
    println!("Input: {}", report.input.display());
    println!("Profile: {}", summary.profile);
    println!("Unit: {}", summary.unit);
    println!("Rows: {}", summary.rows);
    if data.unparseable > 0 {
        println!("Unparseable cells (read as 0): {}", data.unparseable);
    }
    if let Some(path) = &report.output {
        println!("Indexed table: {}", path.display());
    }
    if let Some(path) = &report.summary_json {
        println!("Summary JSON: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metal"),
        header_cell("Mean (mg/L)"),
        header_cell("Median (mg/L)"),
        header_cell("Max (mg/L)"),
        header_cell("Exceeding"),
        header_cell("%"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 1..6 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for exceedance in &summary.exceedances {
        let metal = exceedance.metal;
        let stats = data.overall.metals[metal];
        table.add_row(vec![
            Cell::new(metal.label()),
            Cell::new(format_number(summary.averages_mg_l[metal], 4)),
            optional_cell(stats.map(|stats| stats.median), 4),
            optional_cell(stats.map(|stats| stats.max), 4),
            count_cell(exceedance.count, Color::Red),
            Cell::new(format_number(exceedance.percentage, 1)),
        ]);
    }
    println!("{table}");
    println!(
        "HPI mean {}  |  HEI mean {}  |  CI max {}",
        format_number(summary.hpi_avg, 2),
        format_number(summary.hei_avg, 2),
        format_number(summary.ci_max, 2),
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("Overall category"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &summary.categories {
        table.add_row(vec![category_cell(entry.category), Cell::new(entry.count)]);
    }
    println!();
    println!("{table}");

    if let Some(field) = data.grouped_by {
        print_groups(field.label(), &data.groups);
    }
    if let Some(ranking) = &data.ranking {
        print_ranking(ranking);
    }
}

fn print_groups(label: &str, groups: &[AggregateStats]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(label),
        header_cell("Rows"),
        header_cell("HPI mean"),
        header_cell("HPI max"),
        header_cell("HEI mean"),
        header_cell("HEI max"),
        header_cell("CI mean"),
        header_cell("CI max"),
    ]);
    apply_summary_table_style(&mut table);
    for column in 1..8 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for group in groups {
        table.add_row(vec![
            Cell::new(&group.key)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(group.rows),
            Cell::new(format_number(group.hpi.mean, 2)),
            Cell::new(format_number(group.hpi.max, 2)),
            Cell::new(format_number(group.hei.mean, 2)),
            Cell::new(format_number(group.hei.max, 2)),
            Cell::new(format_number(group.ci.mean, 2)),
            Cell::new(format_number(group.ci.max, 2)),
        ]);
    }
    println!();
    println!("By {}:", label.to_lowercase());
    println!("{table}");
}

fn print_ranking(ranking: &MetalRanking) {
    let request = ranking.request;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell(request.field.label()),
        header_cell(&format!("Mean ({})", ranking.unit)),
        header_cell("Samples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (rank, group) in ranking.groups.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(&group.key),
            Cell::new(format_number(ranking.display_mean(group), 4)),
            Cell::new(group.samples),
        ]);
    }
    println!();
    println!(
        "Top {} by mean {}:",
        request.field.label().to_lowercase(),
        request.metal.label()
    );
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn category_cell(category: Category) -> Cell {
    Cell::new(category.label()).fg(category_color(category))
}

/// Terminal color for a category's hex display color.
fn category_color(category: Category) -> Color {
    let hex = category.color().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb { r, g, b },
        _ => Color::Reset,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<f64>, digits: usize) -> Cell {
    match value {
        Some(value) => Cell::new(format_number(value, digits)),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_colors_parse_from_hex() {
        assert_eq!(
            category_color(Category::Good),
            Color::Rgb {
                r: 0x22,
                g: 0xc5,
                b: 0x5e
            }
        );
        for category in Category::ALL {
            assert_ne!(category_color(category), Color::Reset);
        }
    }
}
