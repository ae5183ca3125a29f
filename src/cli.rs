use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nhl-draft-pipeline")]
#[command(version, about = "Join NHL draft, roster and season stats into analysis tables")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the three source CSVs and export the profile and season tables
    Run {
        /// Season statistics, all leagues (player_stats.csv)
        stats: PathBuf,

        /// Player roster attributes (player_dim.csv)
        dimension: PathBuf,

        /// Draft picks (nhldraft.csv)
        draft: PathBuf,

        /// Directory the tables and summary.json are written to
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Log progress lines to stderr instead of the terminal UI
        #[arg(long)]
        plain: bool,
    },

    /// List the exported column names
    Columns {
        /// Only this table
        #[arg(short, long, value_enum)]
        table: Option<OutputTable>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputTable {
    Profiles,
    Seasons,
}

impl OutputTable {
    /// Schema name in `schema::tables`
    pub fn schema_name(self) -> &'static str {
        match self {
            OutputTable::Profiles => "profiles",
            OutputTable::Seasons => "seasons",
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
