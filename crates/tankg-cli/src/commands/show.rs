//! Print a preset as YAML.

use clap::Args;
use std::path::PathBuf;
use tankg_core::{read_preset, to_yaml};

/// Print a preset file in YAML form.
#[derive(Args)]
pub struct ShowArgs {
    /// Preset file (.tkg, .yaml, .yml, .json or .toml)
    pub input: PathBuf,
}

/// Run the show command.
pub fn run(args: ShowArgs) -> anyhow::Result<()> {
    let preset = read_preset(&args.input)?;

    if let Err(err) = preset.validate() {
        tracing::warn!(%err, "preset would not encode");
    }

    print!("{}", to_yaml(&preset)?);
    Ok(())
}
