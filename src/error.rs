use thiserror::Error;

/// Fatal conditions that abort a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{file}: missing required column {column}")]
    MissingColumn { file: String, column: &'static str },

    #[error("{file}: table has no data rows")]
    EmptyTable { file: String },

    #[error("{file}: malformed {column} value {value:?} in record {record}")]
    MalformedField {
        file: String,
        column: &'static str,
        value: String,
        record: u64,
    },
}
