use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::summary::RunSummary;
use crate::parser::text::decode_source;
use crate::parser::Value;
use crate::schema::TableSchema;
use crate::ui::Ui;

const PROGRESS_EVERY: u64 = 1000;

const SUMMARY_FILE: &str = "summary.json";

/// Exported column names are upper snake case
pub fn normalize_column_name(name: &str) -> String {
    name.trim().replace([' ', '-'], "_").to_ascii_uppercase()
}

pub fn header_row(schema: &TableSchema) -> Vec<String> {
    schema
        .column_names()
        .into_iter()
        .map(normalize_column_name)
        .collect()
}

/// Writes exported tables into one output directory
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: &Path) -> Result<Self> {
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create output directory {:?}", output_dir))?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    pub fn table_path(&self, schema: &TableSchema) -> PathBuf {
        self.output_dir.join(schema.file_name)
    }

    /// Write every row of a table. Returns the file path and row count.
    pub fn export_table<I>(
        &self,
        schema: &TableSchema,
        rows: I,
        ui: &mut impl Ui,
    ) -> Result<(PathBuf, u64)>
    where
        I: ExactSizeIterator<Item = Vec<Value>>,
    {
        let path = self.table_path(schema);
        let file = File::create(&path).with_context(|| format!("Failed to create: {:?}", path))?;

        let total = rows.len() as u64;
        let mut count = 0u64;
        let rows = rows.inspect(|_| {
            count += 1;
            if count % PROGRESS_EVERY == 0 {
                ui.set_progress(count, total, schema.name);
            }
        });

        let written = write_table(BufWriter::new(file), schema, rows)
            .with_context(|| format!("Failed to write table: {}", schema.name))?;
        ui.set_progress(written, total, schema.name);
        ui.log(format!("{}: {} rows -> {:?}", schema.name, written, path));

        Ok((path, written))
    }

    /// Write the run summary next to the tables
    pub fn finalize(self, summary: &RunSummary) -> Result<PathBuf> {
        let path = self.output_dir.join(SUMMARY_FILE);
        let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
        fs::write(&path, json).with_context(|| format!("Failed to write: {:?}", path))?;
        Ok(path)
    }
}

/// Serialize rows as comma-delimited text with one header row
pub fn write_table<W, I>(writer: W, schema: &TableSchema, rows: I) -> Result<u64>
where
    W: Write,
    I: IntoIterator<Item = Vec<Value>>,
{
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(header_row(schema))?;

    let mut count = 0u64;
    for row in rows {
        debug_assert_eq!(row.len(), schema.columns.len(), "row width for {}", schema.name);
        out.write_record(row.iter().map(|v| v.to_string()))?;
        count += 1;
    }

    out.flush()?;
    Ok(count)
}

/// An exported table read back as text cells; empty cells are `None`
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<usize> {
        let name = normalize_column_name(name);
        self.headers.iter().position(|h| *h == name)
    }

    /// Cell by row index and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column(column)?;
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Cell parsed as a float
    pub fn get_f64(&self, row: usize, column: &str) -> Option<f64> {
        self.get(row, column)?.parse().ok()
    }
}

pub fn read_table(path: &Path) -> Result<Table> {
    let bytes = fs::read(path).with_context(|| format!("Failed to open: {:?}", path))?;
    let text = decode_source(&bytes);
    let mut reader = csv::Reader::from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {:?}", path))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to parse record in {:?}", path))?;
        rows.push(
            record
                .iter()
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect(),
        );
    }

    Ok(Table { headers, rows })
}
