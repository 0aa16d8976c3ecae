//! Metajoin CLI - enrich KWIC concordance exports with metadata.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    commands::init_tracing(&cli);

    let result = match cli.command {
        Commands::Enrich {
            file,
            output,
            corpus,
            authors,
            config,
            format,
            summary_json,
        } => {
            commands::enrich::run(file, output, corpus, authors, config, format, summary_json)
                .await
        }

        Commands::Config { config } => commands::config::run(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
