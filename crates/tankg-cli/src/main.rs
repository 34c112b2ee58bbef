//! Tank G CLI - convert M-VAVE Tank G v2 presets between `.tkg` and YAML.

mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tankg")]
#[command(author, version, about = "Tank G preset converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a .tkg preset to YAML
    Tkg2yaml(commands::convert::ToYamlArgs),

    /// Convert a YAML preset to .tkg
    Yaml2tkg(commands::convert::ToTkgArgs),

    /// Convert between any binary and text preset formats
    Convert(commands::convert::ConvertArgs),

    /// Print a preset file as YAML
    Show(commands::show::ShowArgs),

    /// Edit preset fields with key=value pairs
    Set(commands::set::SetArgs),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tkg2yaml(args) => commands::convert::run_to_yaml(args),
        Commands::Yaml2tkg(args) => commands::convert::run_to_tkg(args),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Show(args) => commands::show::run(args),
        Commands::Set(args) => commands::set::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
