use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use inventory_cli::types::CleanResult;
use inventory_model::IssueKind;
use inventory_normalization::recommended_action;

pub fn print_summary(result: &CleanResult) {
    println!("Input: {}", result.input.display());
    match &result.outputs {
        Some(paths) => {
            println!("Clean table: {}", paths.clean_csv.display());
            println!("Anomaly report: {}", paths.anomalies_json.display());
        }
        None => println!("Dry run: no files written"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Absent"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for counts in result.validity_counts() {
        table.add_row(vec![
            Cell::new(counts.column).fg(Color::Blue),
            count_cell(counts.valid, Color::Green),
            count_cell(counts.invalid, Color::Red),
            dim_cell(counts.not_applicable),
        ]);
    }
    table.add_row(vec![
        Cell::new("ROWS")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.row_count()).add_attribute(Attribute::Bold),
        count_cell(result.anomaly_count(), Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");
    print_issue_table(result);
}

fn print_issue_table(result: &CleanResult) {
    let counts = result.inventory.issue_counts();
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Issue"),
        header_cell("Count"),
        header_cell("Recommended action"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for ((field, kind), count) in counts {
        table.add_row(vec![
            Cell::new(field.as_str()).fg(Color::Blue),
            kind_cell(kind),
            Cell::new(count).fg(kind_color(kind)),
            Cell::new(recommended_action(field).unwrap_or("-")),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_color(kind: IssueKind) -> Color {
    if kind.is_blocking() {
        Color::Red
    } else {
        Color::Yellow
    }
}

fn kind_cell(kind: IssueKind) -> Cell {
    Cell::new(kind.as_str()).fg(kind_color(kind))
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
