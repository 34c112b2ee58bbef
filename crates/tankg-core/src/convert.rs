//! File-level conversion between binary and text presets.
//!
//! The format of a file is chosen from its extension. Only binary → text and
//! text → binary conversions are supported.

use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::ConvertError;
use crate::preset::Preset;
use crate::text::TextFormat;

/// Extension of binary preset files.
pub const BINARY_EXTENSION: &str = "tkg";

/// On-disk preset format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetFormat {
    /// The 21-byte device format (`.tkg`).
    Binary,
    /// A structured text document.
    Text(TextFormat),
}

impl PresetFormat {
    /// Format for a file extension (without the dot), case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case(BINARY_EXTENSION) {
            Some(PresetFormat::Binary)
        } else {
            TextFormat::from_extension(ext).map(PresetFormat::Text)
        }
    }

    /// Format of `path`, judged by its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            PresetFormat::Binary => BINARY_EXTENSION,
            PresetFormat::Text(format) => format.extension(),
        }
    }
}

/// Direction of a completed [`convert_file`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Binary preset decoded into a text document.
    BinaryToText(TextFormat),
    /// Text document encoded into a binary preset.
    TextToBinary(TextFormat),
}

/// Read a preset file in any supported format.
pub fn read_preset(path: impl AsRef<Path>) -> Result<Preset, ConvertError> {
    let path = path.as_ref();
    match PresetFormat::from_path(path) {
        Some(PresetFormat::Binary) => {
            let data = std::fs::read(path).map_err(|e| ConvertError::read_file(path, e))?;
            Ok(codec::decode(&data)?)
        }
        Some(PresetFormat::Text(format)) => {
            let text =
                std::fs::read_to_string(path).map_err(|e| ConvertError::read_file(path, e))?;
            format.parse(&text)
        }
        None => Err(ConvertError::unsupported(dotted_extension(path), "")),
    }
}

/// Write a preset file in the format implied by `path`.
///
/// Binary output validates the preset first. Missing parent directories are
/// created.
pub fn write_preset(path: impl AsRef<Path>, preset: &Preset) -> Result<(), ConvertError> {
    let path = path.as_ref();
    let content = match PresetFormat::from_path(path) {
        Some(PresetFormat::Binary) => codec::encode(preset)?.to_vec(),
        Some(PresetFormat::Text(format)) => format.render(preset)?.into_bytes(),
        None => return Err(ConvertError::unsupported("", dotted_extension(path))),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| ConvertError::create_dir(parent, e))?;
    }

    std::fs::write(path, content).map_err(|e| ConvertError::write_file(path, e))
}

/// Convert `input` to `output`, choosing the direction from the extensions.
///
/// Fails with [`ConvertError::UnsupportedConversion`] before touching either
/// file unless one side is binary and the other is text.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<Conversion, ConvertError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let from = PresetFormat::from_path(input);
    let to = PresetFormat::from_path(output);
    let conversion = match (from, to) {
        (Some(PresetFormat::Binary), Some(PresetFormat::Text(format))) => {
            Conversion::BinaryToText(format)
        }
        (Some(PresetFormat::Text(format)), Some(PresetFormat::Binary)) => {
            Conversion::TextToBinary(format)
        }
        _ => {
            return Err(ConvertError::unsupported(
                dotted_extension(input),
                dotted_extension(output),
            ));
        }
    };

    let preset = read_preset(input)?;
    write_preset(output, &preset)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        input = %input.display(),
        output = %output.display(),
        ?conversion,
        "converted preset"
    );

    Ok(conversion)
}

/// `input` with its extension replaced by the canonical one for `format`.
pub fn default_output_path(input: impl AsRef<Path>, format: PresetFormat) -> PathBuf {
    input.as_ref().with_extension(format.extension())
}

fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_from_paths() {
        for (path, expected) in [
            ("a/b.tkg", Some(PresetFormat::Binary)),
            ("B.TKG", Some(PresetFormat::Binary)),
            ("p.yml", Some(PresetFormat::Text(TextFormat::Yaml))),
            ("p.json", Some(PresetFormat::Text(TextFormat::Json))),
            ("p.wav", None),
            ("noext", None),
        ] {
            assert_eq!(PresetFormat::from_path(path), expected, "{path}");
        }
    }

    #[test]
    fn default_output_swaps_extension() {
        assert_eq!(
            default_output_path("presets/clean.tkg", PresetFormat::Text(TextFormat::Yaml)),
            PathBuf::from("presets/clean.yaml")
        );
        assert_eq!(
            default_output_path("clean.yml", PresetFormat::Binary),
            PathBuf::from("clean.tkg")
        );
    }

    #[test]
    fn unsupported_pairs_are_rejected_without_io() {
        for (from, to) in [
            ("missing.tkg", "out.tkg"),
            ("missing.yaml", "out.json"),
            ("missing.wav", "out.yaml"),
            ("missing.tkg", "out"),
        ] {
            let err = convert_file(from, to).unwrap_err();
            assert!(
                matches!(err, ConvertError::UnsupportedConversion { .. }),
                "{from} -> {to}: {err}"
            );
        }
    }

    #[test]
    fn unsupported_message_names_extensions() {
        let err = convert_file("a.TKG", "b.wav").unwrap_err();
        assert_eq!(err.to_string(), "unsupported conversion: .tkg -> .wav");
    }

    #[test]
    fn missing_input_is_a_read_error() {
        let input = "/nonexistent/dir/in.tkg";
        let err = convert_file(input, "/nonexistent/dir/out.yaml").unwrap_err();
        assert!(matches!(err, ConvertError::ReadFile { .. }), "got: {err}");
    }
}
