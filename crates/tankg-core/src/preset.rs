//! The semantic preset model.

use crate::codec::{self, PRESET_SIZE};
use crate::error::CodecError;
use crate::tables::{AMP_MODELS, DELAY_TYPES, MOD_TYPES, REVERB_TYPES};
use crate::validation::{ValidationResult, check_member, check_range, check_range_batch};

/// One complete Tank G v2 effects configuration.
///
/// Enum fields hold table *names* rather than codes, and integer fields are
/// wider than a byte. A preset built from a text document can therefore carry
/// values the device cannot store; [`Preset::validate`] rejects them before
/// encoding.
///
/// | Field | Domain |
/// |---|---|
/// | `noise_gate`, `amp_volume` | 0..=127 |
/// | `amp_gain`, `amp_treble`, `amp_middle`, `amp_bass` | 1..=128 |
/// | `mod_speed`, `delay_time`, `reverb_mix` | 1..=128 |
/// | `mod_depth`, `delay_mix`, `reverb_decay` | 1..=46 |
/// | `ir_cab` | 0..=8 |
/// | `color_r`, `color_g`, `color_b` | 0..=255 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// Amp block enabled.
    pub amp_on: bool,
    /// Modulation block enabled.
    pub mod_on: bool,
    /// Delay block enabled.
    pub delay_on: bool,
    /// Reverb block enabled.
    pub reverb_on: bool,

    /// Noise gate threshold.
    pub noise_gate: i32,

    /// Amp model name, one of [`AMP_MODELS`].
    pub amp_model: String,
    /// Amp gain.
    pub amp_gain: i32,
    /// Amp treble.
    pub amp_treble: i32,
    /// Amp middle.
    pub amp_middle: i32,
    /// Amp bass.
    pub amp_bass: i32,
    /// Amp output volume.
    pub amp_volume: i32,

    /// Modulation type name, one of [`MOD_TYPES`].
    pub mod_type: String,
    /// Modulation depth.
    pub mod_depth: i32,
    /// Modulation speed.
    pub mod_speed: i32,

    /// Delay type name, one of [`DELAY_TYPES`].
    pub delay_type: String,
    /// Delay wet mix.
    pub delay_mix: i32,
    /// Delay time.
    pub delay_time: i32,

    /// Reverb type name, one of [`REVERB_TYPES`].
    pub reverb_type: String,
    /// Reverb decay.
    pub reverb_decay: i32,
    /// Reverb wet mix.
    pub reverb_mix: i32,

    /// Impulse-response cabinet slot (0 = off).
    pub ir_cab: i32,

    /// LED color, red channel.
    pub color_r: i32,
    /// LED color, green channel.
    pub color_g: i32,
    /// LED color, blue channel.
    pub color_b: i32,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            amp_on: false,
            mod_on: false,
            delay_on: false,
            reverb_on: false,
            noise_gate: 0,
            amp_model: "Acoustic".to_string(),
            amp_gain: 61,
            amp_treble: 126,
            amp_middle: 114,
            amp_bass: 94,
            amp_volume: 60,
            mod_type: "Chorus".to_string(),
            mod_depth: 1,
            mod_speed: 1,
            delay_type: "Digital".to_string(),
            delay_mix: 1,
            delay_time: 1,
            reverb_type: "Hall".to_string(),
            reverb_decay: 1,
            reverb_mix: 90,
            ir_cab: 0,
            color_r: 0xFE,
            color_g: 0xFE,
            color_b: 0x7E,
        }
    }
}

impl Preset {
    /// Check every field against its domain.
    ///
    /// Stops at the first violation. Fields are checked in a fixed order so
    /// the reported field is stable for a given preset.
    pub fn validate(&self) -> ValidationResult<()> {
        check_range("noise_gate", self.noise_gate, 0, 127)?;
        check_member(&AMP_MODELS, &self.amp_model)?;
        check_range("ir_cab", self.ir_cab, 0, 8)?;
        check_range_batch(
            &[
                ("amp_gain", self.amp_gain),
                ("amp_treble", self.amp_treble),
                ("amp_middle", self.amp_middle),
                ("amp_bass", self.amp_bass),
                ("mod_speed", self.mod_speed),
                ("delay_time", self.delay_time),
                ("reverb_mix", self.reverb_mix),
            ],
            1,
            128,
        )?;
        check_range("amp_volume", self.amp_volume, 0, 127)?;
        check_member(&MOD_TYPES, &self.mod_type)?;
        check_member(&DELAY_TYPES, &self.delay_type)?;
        check_member(&REVERB_TYPES, &self.reverb_type)?;
        check_range_batch(
            &[
                ("mod_depth", self.mod_depth),
                ("delay_mix", self.delay_mix),
                ("reverb_decay", self.reverb_decay),
            ],
            1,
            46,
        )?;
        check_range_batch(
            &[
                ("color_r", self.color_r),
                ("color_g", self.color_g),
                ("color_b", self.color_b),
            ],
            0,
            255,
        )
    }

    /// Whether [`validate`](Self::validate) passes.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Code of the amp model, if the name is known.
    pub fn amp_model_id(&self) -> Option<u8> {
        AMP_MODELS.code(&self.amp_model)
    }

    /// LED color as an `[r, g, b]` triple.
    pub fn color(&self) -> [i32; 3] {
        [self.color_r, self.color_g, self.color_b]
    }

    /// Decode a preset from its binary form. See [`codec::decode`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        codec::decode(data)
    }

    /// Encode the preset to its binary form. See [`codec::encode`].
    pub fn to_bytes(&self) -> Result<[u8; PRESET_SIZE], CodecError> {
        codec::encode(self)
    }
}
