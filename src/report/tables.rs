//! Console tables for each analysis step

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use polars::prelude::*;

use crate::pipeline::{ColumnInfo, ColumnSummary, GroupMeans};

fn new_table(header: Vec<Cell>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(header);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn number_cell(value: f64) -> Cell {
    let text = if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.6}", value)
    };
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn format_value(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "null".to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Print a table indented to line up with the step output
pub fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Rows of a table with a leading index column
pub fn frame_table(df: &DataFrame) -> Result<Table> {
    let mut header = vec![header_cell("")];
    header.extend(df.get_column_names().iter().map(|n| header_cell(n.as_str())));
    let mut table = new_table(header);

    for row in 0..df.height() {
        let mut cells = vec![Cell::new(row).fg(Color::DarkGrey)];
        for column in df.get_columns() {
            let value = column.get(row)?;
            cells.push(Cell::new(format_value(&value)));
        }
        table.add_row(cells);
    }
    Ok(table)
}

/// Column, dtype and non-null count
pub fn schema_table(columns: &[ColumnInfo]) -> Table {
    let mut table = new_table(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Non-Null Count"),
        header_cell("Dtype"),
    ]);
    for (i, info) in columns.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(&info.name),
            Cell::new(format!("{} non-null", info.non_null)),
            Cell::new(&info.dtype),
        ]);
    }
    table
}

/// Missing-value count per column, highlighted when non-zero
pub fn missing_table(counts: &[(String, usize)]) -> Table {
    let mut table = new_table(vec![header_cell("Column"), header_cell("Missing")]);
    for (name, count) in counts {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(count).fg(if *count == 0 { Color::Green } else { Color::Red }),
        ]);
    }
    table
}

/// One row per statistic, one column per summarised column
pub fn describe_table(summaries: &[ColumnSummary]) -> Table {
    let mut header = vec![header_cell("")];
    header.extend(summaries.iter().map(|s| header_cell(&s.column)));
    let mut table = new_table(header);

    let rows: [(&str, fn(&ColumnSummary) -> f64); 8] = [
        ("count", |s| s.count as f64),
        ("mean", |s| s.mean),
        ("std", |s| s.std),
        ("min", |s| s.min),
        ("25%", |s| s.q25),
        ("50%", |s| s.median),
        ("75%", |s| s.q75),
        ("max", |s| s.max),
    ];
    for (label, stat) in rows {
        let mut cells = vec![header_cell(label)];
        cells.extend(summaries.iter().map(|s| number_cell(stat(s))));
        table.add_row(cells);
    }
    table
}

/// Per-class-code means, ordered as given
pub fn group_means_table(groups: &[GroupMeans]) -> Table {
    let columns: Vec<&str> = groups
        .first()
        .map(|g| g.means.iter().map(|(name, _)| name.as_str()).collect())
        .unwrap_or_default();

    let mut header = vec![header_cell("target"), header_cell("species"), header_cell("n")];
    header.extend(columns.iter().map(|c| header_cell(c)));
    let mut table = new_table(header);

    for group in groups {
        let mut cells = vec![
            Cell::new(group.code).add_attribute(Attribute::Bold),
            Cell::new(group.species.as_deref().unwrap_or("?")).fg(Color::Cyan),
            Cell::new(group.count),
        ];
        cells.extend(group.means.iter().map(|(_, mean)| number_cell(*mean)));
        table.add_row(cells);
    }
    table
}
