//! Structured text form of a preset.
//!
//! The document groups fields by effect block:
//!
//! ```yaml
//! amp:
//!   enabled: true
//!   model: Hi-Gain
//!   model_id: 2
//!   gain: 61
//!   treble: 126
//!   middle: 114
//!   bass: 94
//!   volume: 59
//! mod:
//!   enabled: false
//!   type: Chorus
//!   depth: 6
//!   speed: 1
//! delay:
//!   enabled: false
//!   type: Analog
//!   mix: 3
//!   time: 4
//! reverb:
//!   enabled: true
//!   type: Room
//!   decay: 4
//!   mix: 90
//! noise_gate: 10
//! ir_cab: 4
//! color:
//! - 254
//! - 254
//! - 126
//! ```
//!
//! Every key is optional when parsing; missing keys take the values of
//! [`Preset::default`]. When both `model_id` and `model` are present the
//! numeric id wins.

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;
use crate::preset::Preset;
use crate::tables::AMP_MODELS;

/// Text serialization formats for presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextFormat {
    /// YAML, the primary format.
    Yaml,
    /// Pretty-printed JSON.
    Json,
    /// TOML.
    Toml,
}

impl TextFormat {
    /// Format for a file extension (without the dot), case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(TextFormat::Yaml),
            "json" => Some(TextFormat::Json),
            "toml" => Some(TextFormat::Toml),
            _ => None,
        }
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            TextFormat::Yaml => "yaml",
            TextFormat::Json => "json",
            TextFormat::Toml => "toml",
        }
    }

    /// Render a preset as a document in this format.
    pub fn render(self, preset: &Preset) -> Result<String, ConvertError> {
        let doc = PresetDocument::from(preset);
        Ok(match self {
            TextFormat::Yaml => serde_yaml::to_string(&doc)?,
            TextFormat::Json => serde_json::to_string_pretty(&doc)? + "\n",
            TextFormat::Toml => toml::to_string_pretty(&doc)?,
        })
    }

    /// Parse a document in this format into a preset.
    ///
    /// The result is not validated; encoding it checks every field.
    pub fn parse(self, text: &str) -> Result<Preset, ConvertError> {
        let doc: PresetDocument = match self {
            TextFormat::Yaml => serde_yaml::from_str(text)?,
            TextFormat::Json => serde_json::from_str(text)?,
            TextFormat::Toml => toml::from_str(text)?,
        };
        Ok(doc.into())
    }
}

/// Render a preset as YAML.
pub fn to_yaml(preset: &Preset) -> Result<String, ConvertError> {
    TextFormat::Yaml.render(preset)
}

/// Parse a YAML document into a preset.
pub fn from_yaml(text: &str) -> Result<Preset, ConvertError> {
    TextFormat::Yaml.parse(text)
}

/// Serde view of the text document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetDocument {
    /// Amp block.
    pub amp: AmpSection,
    /// Modulation block.
    #[serde(rename = "mod")]
    pub modulation: ModSection,
    /// Delay block.
    pub delay: DelaySection,
    /// Reverb block.
    pub reverb: ReverbSection,
    /// Noise gate threshold.
    pub noise_gate: i32,
    /// IR cabinet slot.
    pub ir_cab: i32,
    /// LED color as `[r, g, b]`.
    pub color: Vec<i32>,
}

/// `amp` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmpSection {
    /// Block enabled.
    pub enabled: bool,
    /// Model name.
    pub model: String,
    /// Model code; overrides `model` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<i64>,
    /// Gain.
    pub gain: i32,
    /// Treble.
    pub treble: i32,
    /// Middle.
    pub middle: i32,
    /// Bass.
    pub bass: i32,
    /// Volume.
    pub volume: i32,
}

/// `mod` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModSection {
    /// Block enabled.
    pub enabled: bool,
    /// Modulation type name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Depth.
    pub depth: i32,
    /// Speed.
    pub speed: i32,
}

/// `delay` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelaySection {
    /// Block enabled.
    pub enabled: bool,
    /// Delay type name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Wet mix.
    pub mix: i32,
    /// Time.
    pub time: i32,
}

/// `reverb` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverbSection {
    /// Block enabled.
    pub enabled: bool,
    /// Reverb type name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Decay.
    pub decay: i32,
    /// Wet mix.
    pub mix: i32,
}

impl Default for PresetDocument {
    fn default() -> Self {
        let p = Preset::default();
        Self {
            amp: AmpSection::default(),
            modulation: ModSection::default(),
            delay: DelaySection::default(),
            reverb: ReverbSection::default(),
            noise_gate: p.noise_gate,
            ir_cab: p.ir_cab,
            color: p.color().to_vec(),
        }
    }
}

// A parsed `amp` section only overrides the model name through an explicit id.
impl Default for AmpSection {
    fn default() -> Self {
        let mut amp = AmpSection::from(&Preset::default());
        amp.model_id = None;
        amp
    }
}

impl Default for ModSection {
    fn default() -> Self {
        ModSection::from(&Preset::default())
    }
}

impl Default for DelaySection {
    fn default() -> Self {
        DelaySection::from(&Preset::default())
    }
}

impl Default for ReverbSection {
    fn default() -> Self {
        ReverbSection::from(&Preset::default())
    }
}

impl From<&Preset> for AmpSection {
    fn from(p: &Preset) -> Self {
        Self {
            enabled: p.amp_on,
            model: p.amp_model.clone(),
            model_id: p.amp_model_id().map(i64::from),
            gain: p.amp_gain,
            treble: p.amp_treble,
            middle: p.amp_middle,
            bass: p.amp_bass,
            volume: p.amp_volume,
        }
    }
}

impl From<&Preset> for ModSection {
    fn from(p: &Preset) -> Self {
        Self {
            enabled: p.mod_on,
            kind: p.mod_type.clone(),
            depth: p.mod_depth,
            speed: p.mod_speed,
        }
    }
}

impl From<&Preset> for DelaySection {
    fn from(p: &Preset) -> Self {
        Self {
            enabled: p.delay_on,
            kind: p.delay_type.clone(),
            mix: p.delay_mix,
            time: p.delay_time,
        }
    }
}

impl From<&Preset> for ReverbSection {
    fn from(p: &Preset) -> Self {
        Self {
            enabled: p.reverb_on,
            kind: p.reverb_type.clone(),
            decay: p.reverb_decay,
            mix: p.reverb_mix,
        }
    }
}

impl From<&Preset> for PresetDocument {
    fn from(p: &Preset) -> Self {
        Self {
            amp: p.into(),
            modulation: p.into(),
            delay: p.into(),
            reverb: p.into(),
            noise_gate: p.noise_gate,
            ir_cab: p.ir_cab,
            color: p.color().to_vec(),
        }
    }
}

impl From<PresetDocument> for Preset {
    fn from(doc: PresetDocument) -> Self {
        let default_color = Preset::default().color();
        let channel = |i: usize| doc.color.get(i).copied().unwrap_or(default_color[i]);

        let amp_model = match doc.amp.model_id {
            Some(id) => AMP_MODELS.name_for_id(id).to_string(),
            None => doc.amp.model,
        };

        Preset {
            amp_on: doc.amp.enabled,
            mod_on: doc.modulation.enabled,
            delay_on: doc.delay.enabled,
            reverb_on: doc.reverb.enabled,
            noise_gate: doc.noise_gate,
            amp_model,
            amp_gain: doc.amp.gain,
            amp_treble: doc.amp.treble,
            amp_middle: doc.amp.middle,
            amp_bass: doc.amp.bass,
            amp_volume: doc.amp.volume,
            mod_type: doc.modulation.kind,
            mod_depth: doc.modulation.depth,
            mod_speed: doc.modulation.speed,
            delay_type: doc.delay.kind,
            delay_mix: doc.delay.mix,
            delay_time: doc.delay.time,
            reverb_type: doc.reverb.kind,
            reverb_decay: doc.reverb.decay,
            reverb_mix: doc.reverb.mix,
            ir_cab: doc.ir_cab,
            color_r: channel(0),
            color_g: channel(1),
            color_b: channel(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    const EXAMPLE: [u8; 21] = [
        1, 0, 0, 1, 10, 2, 60, 125, 113, 93, 59, 5, 0, 44, 3, 3, 89, 4, 254, 254, 126,
    ];

    #[test]
    fn minimal_document_fills_defaults() {
        let preset = from_yaml("amp: {enabled: true}").unwrap();
        let expected = Preset {
            amp_on: true,
            ..Preset::default()
        };
        assert_eq!(preset, expected);
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let preset = from_yaml("reverb:\n  decay: 12\ncolor: [1]\n").unwrap();
        assert_eq!(preset.reverb_decay, 12);
        assert_eq!(preset.reverb_type, "Hall");
        assert_eq!(preset.reverb_mix, 90);
        assert_eq!(preset.color(), [1, 254, 126]);
    }

    #[test]
    fn model_id_takes_precedence() {
        let preset = from_yaml("amp: {model: Metal, model_id: 7}").unwrap();
        assert_eq!(preset.amp_model, "American");

        let preset = from_yaml("amp: {model: Metal}").unwrap();
        assert_eq!(preset.amp_model, "Metal");
    }

    #[test]
    fn unknown_model_id_falls_back() {
        for yaml in ["amp: {model_id: 42}", "amp: {model_id: -1}"] {
            let preset = from_yaml(yaml).unwrap();
            assert_eq!(preset.amp_model, "Acoustic", "{yaml}");
        }
    }

    #[test]
    fn section_defaults_follow_preset_defaults() {
        let amp = AmpSection::default();
        assert_eq!(amp.model, "Acoustic");
        assert_eq!(amp.model_id, None);
        assert_eq!([amp.gain, amp.treble], [61, 126]);
        assert_eq!([amp.middle, amp.bass], [114, 94]);
        assert_eq!(amp.volume, 60);
        assert!(!amp.enabled);

        assert_eq!(ReverbSection::default().kind, "Hall");
        assert_eq!(ReverbSection::default().mix, 90);
        assert_eq!(PresetDocument::default().color, vec![254, 254, 126]);
    }

    #[test]
    fn yaml_key_layout() {
        let preset = codec::decode(&EXAMPLE).unwrap();
        let yaml = to_yaml(&preset).unwrap();
        let expected = "\
amp:
  enabled: true
  model: Hi-Gain
  model_id: 2
  gain: 61
  treble: 126
  middle: 114
  bass: 94
  volume: 59
mod:
  enabled: false
  type: Chorus
  depth: 6
  speed: 1
delay:
  enabled: false
  type: Analog
  mix: 3
  time: 4
reverb:
  enabled: true
  type: Room
  decay: 4
  mix: 90
noise_gate: 10
ir_cab: 4
color:
- 254
- 254
- 126
";
        assert_eq!(yaml, expected);
    }

    #[test]
    fn every_format_round_trips() {
        let preset = codec::decode(&EXAMPLE).unwrap();
        for format in [TextFormat::Yaml, TextFormat::Json, TextFormat::Toml] {
            let text = format.render(&preset).unwrap();
            let parsed = format.parse(&text).unwrap();
            assert_eq!(parsed, preset, "{format:?}:\n{text}");
        }
    }

    #[test]
    fn unknown_model_name_survives_text_but_not_encode() {
        let preset = from_yaml("amp: {model: Fuzz}").unwrap();
        assert_eq!(preset.amp_model, "Fuzz");
        let yaml = to_yaml(&preset).unwrap();
        assert!(!yaml.contains("model_id"));
        assert!(codec::encode(&preset).is_err());
    }

    #[test]
    fn out_of_range_values_parse() {
        let preset = from_yaml("noise_gate: 500\n").unwrap();
        assert_eq!(preset.noise_gate, 500);
        assert!(!preset.is_valid());
    }

    #[test]
    fn type_errors_are_reported() {
        let err = from_yaml("amp: {gain: loud}").unwrap_err();
        assert!(matches!(err, ConvertError::Yaml(_)));
        let err = TextFormat::Json.parse("{").unwrap_err();
        assert!(matches!(err, ConvertError::Json(_)));
        let err = TextFormat::Toml.parse("amp = 3").unwrap_err();
        assert!(matches!(err, ConvertError::TomlParse(_)));
    }

    #[test]
    fn extensions() {
        assert_eq!(TextFormat::from_extension("YML"), Some(TextFormat::Yaml));
        assert_eq!(TextFormat::from_extension("json"), Some(TextFormat::Json));
        assert_eq!(TextFormat::from_extension("toml"), Some(TextFormat::Toml));
        assert_eq!(TextFormat::from_extension("tkg"), None);
        assert_eq!(TextFormat::Yaml.extension(), "yaml");
    }
}
