//! Preset codec for the M-VAVE Tank G v2 guitar effects unit.
//!
//! The device stores each preset as a fixed 21-byte `.tkg` blob. This crate
//! converts those blobs into a semantic [`Preset`] and back without loss, and
//! maps presets to a readable text document.
//!
//! # Modules
//!
//! - [`codec`] - 21-byte binary layout ([`decode`], [`encode`])
//! - [`piecewise`] - kind + magnitude packing shared by the mod, delay, and reverb bytes
//! - [`tables`] - code ↔ name tables for amp models and effect types
//! - [`text`] - YAML / JSON / TOML documents
//! - [`convert`] - extension-driven file conversion
//! - [`edit`] - `key=value` edits addressed by document keys
//!
//! # Example
//!
//! ```rust
//! use tankg_core::{decode, encode, to_yaml};
//!
//! let bytes = [1, 0, 0, 1, 10, 2, 60, 125, 113, 93, 59, 5, 0, 44, 3, 3, 89, 4, 254, 254, 126];
//! let preset = decode(&bytes).unwrap();
//! assert_eq!(preset.amp_model, "Hi-Gain");
//! assert_eq!(preset.delay_type, "Analog");
//!
//! let yaml = to_yaml(&preset).unwrap();
//! assert!(yaml.contains("model_id: 2"));
//!
//! assert_eq!(encode(&preset).unwrap(), bytes);
//! ```
//!
//! # Features
//!
//! - `tracing` - emit `tracing` events on encode/decode, and warnings when a
//!   piecewise magnitude is clamped or spills into the next kind's range

mod error;
mod preset;

/// Binary preset layout.
pub mod codec;

/// File-level conversion.
pub mod convert;

/// Dotted-key field edits.
pub mod edit;

/// Piecewise kind/magnitude packing.
pub mod piecewise;

/// Static code tables.
pub mod tables;

/// Text document mapping.
pub mod text;

/// Field validation.
pub mod validation;

pub use codec::{PRESET_SIZE, decode, encode};
pub use convert::{
    BINARY_EXTENSION, Conversion, PresetFormat, convert_file, default_output_path, read_preset,
    write_preset,
};
pub use edit::{EDIT_KEYS, apply_edit};
pub use error::{CodecError, ConvertError, EditError};
pub use piecewise::{DELAY_THRESHOLDS, MOD_THRESHOLDS, REVERB_THRESHOLDS, Thresholds};
pub use preset::Preset;
pub use tables::{AMP_MODELS, CodeTable, DELAY_TYPES, MOD_TYPES, REVERB_TYPES};
pub use text::{PresetDocument, TextFormat, from_yaml, to_yaml};
pub use validation::{ValidationError, ValidationResult};
