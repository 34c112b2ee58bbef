//! Edit preset fields in place.

use clap::Args;
use std::path::PathBuf;
use tankg_core::{EDIT_KEYS, EditError, apply_edit, read_preset, write_preset};

use super::common::parse_key_val;

/// Set preset fields from `key=value` pairs.
#[derive(Args)]
pub struct SetArgs {
    /// Preset file to edit (.tkg, .yaml, .yml, .json or .toml)
    pub input: PathBuf,

    /// Field edits (e.g., "amp.gain=80", "reverb.type=Plate", "color=#FF8000")
    #[arg(value_parser = parse_key_val, required = true)]
    pub edits: Vec<(String, String)>,

    /// Write the edited preset here instead of overwriting the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the set command.
///
/// The edited preset must pass validation before anything is written, so an
/// out-of-range edit leaves the file untouched.
pub fn run(args: SetArgs) -> anyhow::Result<()> {
    let mut preset = read_preset(&args.input)?;

    for (key, value) in &args.edits {
        if let Err(err) = apply_edit(&mut preset, key, value) {
            if matches!(err, EditError::UnknownKey(_)) {
                anyhow::bail!("{err} (known keys: {})", EDIT_KEYS.join(", "));
            }
            return Err(err.into());
        }
    }
    preset.validate()?;

    let output = args.output.as_ref().unwrap_or(&args.input);
    write_preset(output, &preset)?;

    tracing::info!(output = %output.display(), edits = args.edits.len(), "updated preset");
    println!("Updated: {}", output.display());
    Ok(())
}
