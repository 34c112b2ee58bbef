//! Binary preset codec.
//!
//! A `.tkg` preset is exactly [`PRESET_SIZE`] bytes:
//!
//! ```text
//! byte   field                      stored as
//! 0..=3  amp/mod/delay/reverb on    nonzero = on
//! 4      noise_gate                 raw
//! 5      amp_model                  AMP_MODELS code
//! 6..=9  gain, treble, middle, bass value - 1
//! 10     amp_volume                 raw
//! 11     mod_type + mod_depth       piecewise, MOD_THRESHOLDS
//! 12     mod_speed                  value - 1
//! 13     delay_type + delay_mix     piecewise, DELAY_THRESHOLDS
//! 14     delay_time                 value - 1
//! 15     reverb_type + reverb_decay piecewise, REVERB_THRESHOLDS
//! 16     reverb_mix                 value - 1
//! 17     ir_cab                     raw
//! 18..20 color r, g, b              raw
//! ```
//!
//! Decoding is tolerant: unknown codes fall back to a default name and every
//! 21-byte input yields a preset. Encoding is strict: the preset must pass
//! [`Preset::validate`] first.

use crate::error::CodecError;
use crate::piecewise::{self, DELAY_THRESHOLDS, MOD_THRESHOLDS, REVERB_THRESHOLDS};
use crate::preset::Preset;
use crate::tables::{AMP_MODELS, CodeTable, DELAY_TYPES, MOD_TYPES, REVERB_TYPES};

/// Size of a binary preset in bytes.
pub const PRESET_SIZE: usize = 21;

/// Decode a binary preset.
///
/// Fails only when `data` is not exactly [`PRESET_SIZE`] bytes long.
pub fn decode(data: &[u8]) -> Result<Preset, CodecError> {
    let Ok(data) = <&[u8; PRESET_SIZE]>::try_from(data) else {
        return Err(CodecError::SizeMismatch {
            expected: PRESET_SIZE,
            actual: data.len(),
        });
    };

    let (mod_kind, mod_depth) = piecewise::decode(data[11], MOD_THRESHOLDS);
    let (delay_kind, delay_mix) = piecewise::decode(data[13], DELAY_THRESHOLDS);
    let (reverb_kind, reverb_decay) = piecewise::decode(data[15], REVERB_THRESHOLDS);

    let preset = Preset {
        amp_on: data[0] != 0,
        mod_on: data[1] != 0,
        delay_on: data[2] != 0,
        reverb_on: data[3] != 0,
        noise_gate: i32::from(data[4]),
        amp_model: AMP_MODELS.name(data[5]).to_string(),
        amp_gain: offset(data[6]),
        amp_treble: offset(data[7]),
        amp_middle: offset(data[8]),
        amp_bass: offset(data[9]),
        amp_volume: i32::from(data[10]),
        mod_type: MOD_TYPES.name(mod_kind).to_string(),
        mod_depth,
        mod_speed: offset(data[12]),
        delay_type: DELAY_TYPES.name(delay_kind).to_string(),
        delay_mix,
        delay_time: offset(data[14]),
        reverb_type: REVERB_TYPES.name(reverb_kind).to_string(),
        reverb_decay,
        reverb_mix: offset(data[16]),
        ir_cab: i32::from(data[17]),
        color_r: i32::from(data[18]),
        color_g: i32::from(data[19]),
        color_b: i32::from(data[20]),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(amp_model = %preset.amp_model, "decoded preset");

    Ok(preset)
}

/// Encode a preset to its binary form after validating it.
pub fn encode(preset: &Preset) -> Result<[u8; PRESET_SIZE], CodecError> {
    preset.validate()?;

    let mod_fx = piecewise::encode(
        code(&MOD_TYPES, &preset.mod_type),
        preset.mod_depth,
        MOD_THRESHOLDS,
    )?;
    let delay_fx = piecewise::encode(
        code(&DELAY_TYPES, &preset.delay_type),
        preset.delay_mix,
        DELAY_THRESHOLDS,
    )?;
    let reverb_fx = piecewise::encode(
        code(&REVERB_TYPES, &preset.reverb_type),
        preset.reverb_decay,
        REVERB_THRESHOLDS,
    )?;

    let bytes = [
        u8::from(preset.amp_on),
        u8::from(preset.mod_on),
        u8::from(preset.delay_on),
        u8::from(preset.reverb_on),
        raw(preset.noise_gate),
        code(&AMP_MODELS, &preset.amp_model),
        unoffset(preset.amp_gain),
        unoffset(preset.amp_treble),
        unoffset(preset.amp_middle),
        unoffset(preset.amp_bass),
        raw(preset.amp_volume),
        mod_fx,
        unoffset(preset.mod_speed),
        delay_fx,
        unoffset(preset.delay_time),
        reverb_fx,
        unoffset(preset.reverb_mix),
        raw(preset.ir_cab),
        raw(preset.color_r),
        raw(preset.color_g),
        raw(preset.color_b),
    ];

    #[cfg(feature = "tracing")]
    tracing::debug!(amp_model = %preset.amp_model, "encoded preset");

    Ok(bytes)
}

fn offset(byte: u8) -> i32 {
    i32::from(byte) + 1
}

// The helpers below run after `validate`, which bounds every value to a byte.

fn unoffset(value: i32) -> u8 {
    (value - 1) as u8
}

fn raw(value: i32) -> u8 {
    value as u8
}

fn code(table: &CodeTable, name: &str) -> u8 {
    table.code(name).unwrap_or_default()
}
