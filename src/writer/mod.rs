mod csv;
mod summary;

pub use self::csv::{header_row, normalize_column_name, read_table, write_table, CsvExporter, Table};
pub use summary::RunSummary;
