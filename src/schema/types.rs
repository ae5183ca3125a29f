use crate::error::PipelineError;

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    /// One of a closed set of labels (bins, buckets, eras)
    Category,
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
    pub nullable: bool,
}

impl Column {
    /// Create an optional (nullable) column
    pub const fn new(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: true,
        }
    }

    /// Create a required column: its header must be present in a source file,
    /// and its cells are never empty in an exported table
    pub const fn required(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: false,
        }
    }
}

/// Table schema definition, shared by the raw inputs and the exported tables
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    /// File name the table is read from or written to
    pub file_name: &'static str,
    pub columns: &'static [Column],
}

impl TableSchema {
    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    pub fn required_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.nullable)
    }

    /// Check that every required column appears in a (case-normalized) header row
    pub fn check_headers<S: AsRef<str>>(&self, headers: &[S]) -> Result<(), PipelineError> {
        for col in self.required_columns() {
            let present = headers
                .iter()
                .any(|h| h.as_ref().eq_ignore_ascii_case(col.name));
            if !present {
                return Err(PipelineError::MissingColumn {
                    file: self.file_name.to_string(),
                    column: col.name,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: TableSchema = TableSchema {
        name: "sample",
        file_name: "sample.csv",
        columns: &[
            Column::required("PLAYER_ID", ColumnType::Integer),
            Column::new("TEAM", ColumnType::Text),
        ],
    };

    #[test]
    fn test_check_headers_is_case_insensitive() {
        assert!(SAMPLE.check_headers(&["player_id"]).is_ok());
    }

    #[test]
    fn test_check_headers_reports_missing_column() {
        let err = SAMPLE.check_headers(&["TEAM"]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingColumn { column: "PLAYER_ID", .. }
        ));
    }
}
