pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "greenlane",
    about = "GreenLane operator CLI",
    long_about = "Classify products, resolve eco alternatives, inspect configuration, check vector search readiness, and seed the catalog.",
    after_help = "Examples:\n  greenlane classify \"Organic cotton tee\"\n  greenlane resolve \"Bamboo towel\" --offline\n  greenlane doctor --json\n  greenlane seed"
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "PATH", help = "Read configuration from this TOML file")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Print the category detected for a product title")]
    Classify {
        #[arg(help = "Product title as shown on the shopping page")]
        title: String,
    },
    #[command(about = "Resolve eco alternatives and tips for a product and print the JSON response")]
    Resolve {
        #[arg(help = "Product title as shown on the shopping page")]
        title: String,
        #[arg(long, help = "Category label; detected from the title when omitted")]
        category: Option<String>,
        #[arg(long, help = "Maximum number of alternatives")]
        limit: Option<usize>,
        #[arg(long, help = "Skip live vector search and use the curated catalog")]
        offline: bool,
    },
    #[command(about = "Validate config and check vector search health")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Ingest the curated fallback catalog into vector search")]
    Seed,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let result = match cli.command {
        Command::Classify { title } => commands::classify::run(&title),
        Command::Resolve { title, category, limit, offline } => commands::resolve::run(
            config_path,
            commands::resolve::ResolveArgs { title, category, limit, offline },
        ),
        Command::Doctor { json } => commands::doctor::run(config_path, json),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run(config_path) }
        }
        Command::Seed => commands::seed::run(config_path),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
