use std::io::Write;

use anyhow::{bail, Result};
use gamesboard_lib::{Cell, Table};
use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::Style;

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Markdown,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn parse(input: &str) -> Result<Self> {
        Ok(match input.trim().to_lowercase().as_str() {
            "table" => OutputFormat::Table,
            "markdown" | "md" => OutputFormat::Markdown,
            "csv" => OutputFormat::Csv,
            "json" => OutputFormat::Json,
            other => bail!(
                "unknown output format '{}'. Valid values: table, markdown, csv, json",
                other
            ),
        })
    }
}

pub fn print(table: &Table, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_grid(table, false)),
        OutputFormat::Markdown => println!("{}", render_grid(table, true)),
        OutputFormat::Csv => write_csv(table, std::io::stdout())?,
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&to_json(table))?),
    }
    Ok(())
}

fn string_rows(table: &Table) -> impl Iterator<Item = Vec<String>> + '_ {
    table
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
}

// -- Table / markdown output --

fn render_grid(table: &Table, markdown: bool) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.column_names().into_iter().map(str::to_string));
    for row in string_rows(table) {
        builder.push_record(row);
    }
    let mut grid = builder.build();
    if markdown {
        grid.with(Style::markdown());
    }
    grid.to_string()
}

// -- CSV output --

fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.column_names())?;
    for row in string_rows(table) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

fn cell_to_json(cell: &Cell) -> Value {
    match cell {
        Cell::Text(Some(s)) => Value::String(s.clone()),
        Cell::Number(Some(n)) if n.fract() == 0.0 && n.abs() < 9.0e15 => Value::from(*n as i64),
        Cell::Number(Some(n)) => serde_json::Number::from_f64(*n)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Cell::Text(None) | Cell::Number(None) => Value::Null,
    }
}

fn to_json(table: &Table) -> Value {
    let names = table.column_names();
    Value::Array(
        table
            .rows()
            .map(|row| {
                let object: Map<String, Value> = names
                    .iter()
                    .zip(row.iter())
                    .map(|(name, cell)| (name.to_string(), cell_to_json(cell)))
                    .collect();
                Value::Object(object)
            })
            .collect(),
    )
}
