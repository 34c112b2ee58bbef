//! Conversion commands.
//!
//! `tkg2yaml` and `yaml2tkg` fix the output format and derive a default
//! output path; `convert` takes both paths and infers the direction.

use clap::Args;
use std::path::{Path, PathBuf};
use tankg_core::{PresetFormat, TextFormat, convert_file, default_output_path};

/// Convert a binary preset to YAML.
#[derive(Args)]
pub struct ToYamlArgs {
    /// Input .tkg file
    pub input: PathBuf,

    /// Output .yaml file (default: same name with .yaml extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Convert a YAML preset to binary.
#[derive(Args)]
pub struct ToTkgArgs {
    /// Input .yaml file
    pub input: PathBuf,

    /// Output .tkg file (default: same name with .tkg extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Convert between binary and text presets.
#[derive(Args)]
pub struct ConvertArgs {
    /// Source preset file
    pub input: PathBuf,

    /// Destination preset file; its extension picks the format
    pub output: PathBuf,
}

/// Run the tkg2yaml command.
pub fn run_to_yaml(args: ToYamlArgs) -> anyhow::Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input, PresetFormat::Text(TextFormat::Yaml)));
    convert(&args.input, &output)
}

/// Run the yaml2tkg command.
pub fn run_to_tkg(args: ToTkgArgs) -> anyhow::Result<()> {
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input, PresetFormat::Binary));
    convert(&args.input, &output)
}

/// Run the convert command.
pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    convert(&args.input, &args.output)
}

fn convert(input: &Path, output: &Path) -> anyhow::Result<()> {
    let conversion = convert_file(input, output)?;
    tracing::info!(input = %input.display(), output = %output.display(), ?conversion, "converted");
    println!("Converted: {} -> {}", input.display(), output.display());
    Ok(())
}
