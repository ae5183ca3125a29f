pub mod cli;
pub mod config;
pub mod derive;
pub mod enrich;
pub mod error;
pub mod filter;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod resolve;
pub mod schema;
pub mod ui;
pub mod writer;

#[cfg(test)]
mod test_support;

pub use cli::{Cli, Commands};
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use parser::SourcePaths;
pub use pipeline::{build_tables, run_pipeline, PipelineOutput};
pub use ui::{LogUi, Phase, SilentUi, Ui, UiApp};
pub use writer::RunSummary;
