use anyhow::Result;
use nhl_draft_pipeline::{
    cli::{Cli, Commands},
    config::PipelineConfig,
    logging::init_logging,
    parser::SourcePaths,
    pipeline::run_pipeline,
    schema::{get_output_table, OUTPUT_TABLES},
    ui::{LogUi, UiApp},
    writer::normalize_column_name,
};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Run {
            stats,
            dimension,
            draft,
            output_dir,
            plain,
        } => {
            let paths = SourcePaths {
                stats,
                dimension,
                draft,
            };
            let config = PipelineConfig::default();

            let summary = if plain {
                init_logging();
                run_pipeline(&paths, &output_dir, &config, &mut LogUi::new())?
            } else {
                let mut ui = UiApp::new()?;
                match run_pipeline(&paths, &output_dir, &config, &mut ui) {
                    Ok(summary) => {
                        ui.finish(&summary.to_string())?;
                        summary
                    }
                    Err(err) => {
                        ui.restore()?;
                        return Err(err);
                    }
                }
            };

            println!("\n{}", summary);
        }

        Commands::Columns { table } => {
            let tables: Vec<_> = match table {
                Some(table) => get_output_table(table.schema_name()).into_iter().collect(),
                None => OUTPUT_TABLES.to_vec(),
            };
            for schema in tables {
                println!("{} ({}):\n", schema.name, schema.file_name);
                for column in schema.columns {
                    println!(
                        "  {:<28} {:?}{}",
                        normalize_column_name(column.name),
                        column.col_type,
                        if column.nullable { "" } else { " (required)" }
                    );
                }
                println!();
            }
        }
    }

    Ok(())
}
