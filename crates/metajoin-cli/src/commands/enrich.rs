//! Enrich command - merge metadata into a KWIC export and save the result.

use std::path::PathBuf;

use colored::Colorize;
use metajoin::{MetajoinError, Pipeline, Serializer, read_primary, to_json};
use tracing::info;

use crate::cli::OutputFormat;

pub async fn run(
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    corpus: Option<String>,
    authors: Option<String>,
    config: Option<PathBuf>,
    format: OutputFormat,
    summary_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = file.ok_or_else(|| MetajoinError::InputMissing("no KWIC results file given".into()))?;

    let mut config = super::load_config(config.as_deref())?;
    if let Some(location) = corpus {
        config.corpus.location = location;
    }
    if let Some(location) = authors {
        config.author.location = location;
    }

    if !summary_json {
        println!(
            "{} {}",
            "Enriching".cyan().bold(),
            file.display().to_string().white()
        );
    }

    let pipeline = Pipeline::with_config(config);
    let (corpus, authors) = pipeline.reference_sources()?;
    let kwic = read_primary(&file)?;

    let outcome = pipeline.execute(&kwic, &corpus, &authors).await?;

    let output_path =
        output.unwrap_or_else(|| PathBuf::from(&pipeline.config().output.file_name));

    let contents = match format {
        OutputFormat::Tsv => outcome.output.clone(),
        OutputFormat::Csv => Serializer::with_delimiter(b',').serialize(&outcome.table)?,
        OutputFormat::Json => to_json(&outcome.table)?,
    };
    std::fs::write(&output_path, contents)
        .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;
    info!(path = %output_path.display(), %format, "wrote merged dataset");

    if summary_json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{} {} rows, {} columns",
        "Merged".green().bold(),
        outcome.table.row_count().to_string().white().bold(),
        outcome.table.column_count().to_string().white().bold()
    );
    println!(
        "  corpus metadata: {} matched, {} unmatched",
        outcome.corpus_join.matched.to_string().green(),
        outcome.corpus_join.unmatched.to_string().yellow()
    );
    println!(
        "  author metadata: {} matched, {} unmatched",
        outcome.author_join.matched.to_string().green(),
        outcome.author_join.unmatched.to_string().yellow()
    );
    println!(
        "{} {}",
        "Saved to".green().bold(),
        output_path.display().to_string().white()
    );

    Ok(())
}
