//! Single-field preset edits addressed by dotted document keys.
//!
//! Keys follow the text document layout (`amp.gain`, `reverb.type`,
//! `noise_gate`, ...). An edit only parses the value. Range and name checks
//! stay with [`Preset::validate`], so an out-of-range edit is reported rather
//! than clamped.

use std::str::FromStr;

use crate::error::EditError;
use crate::preset::Preset;
use crate::tables::AMP_MODELS;

/// Every key accepted by [`apply_edit`], in document order.
pub const EDIT_KEYS: &[&str] = &[
    "amp.enabled",
    "amp.model",
    "amp.model_id",
    "amp.gain",
    "amp.treble",
    "amp.middle",
    "amp.bass",
    "amp.volume",
    "mod.enabled",
    "mod.type",
    "mod.depth",
    "mod.speed",
    "delay.enabled",
    "delay.type",
    "delay.mix",
    "delay.time",
    "reverb.enabled",
    "reverb.type",
    "reverb.decay",
    "reverb.mix",
    "noise_gate",
    "ir_cab",
    "color",
    "color.r",
    "color.g",
    "color.b",
];

/// Set one field of `preset` from its text form.
///
/// `amp.model_id` resolves through [`AMP_MODELS`] the same way a text
/// document's `model_id` does. `color` takes `#RRGGBB` or `r,g,b`.
pub fn apply_edit(preset: &mut Preset, key: &str, value: &str) -> Result<(), EditError> {
    let value = value.trim();
    match key {
        "amp.enabled" => preset.amp_on = parse_bool(key, value)?,
        "mod.enabled" => preset.mod_on = parse_bool(key, value)?,
        "delay.enabled" => preset.delay_on = parse_bool(key, value)?,
        "reverb.enabled" => preset.reverb_on = parse_bool(key, value)?,
        "amp.model" => preset.amp_model = value.to_string(),
        "amp.model_id" => {
            let id = parse_int(key, value)?;
            preset.amp_model = AMP_MODELS.name_for_id(id).to_string();
        }
        "mod.type" => preset.mod_type = value.to_string(),
        "delay.type" => preset.delay_type = value.to_string(),
        "reverb.type" => preset.reverb_type = value.to_string(),
        "color" => {
            let [r, g, b] = parse_color(key, value)?;
            preset.color_r = r;
            preset.color_g = g;
            preset.color_b = b;
        }
        _ => match int_field(preset, key) {
            Some(field) => *field = parse_int(key, value)?,
            None => return Err(EditError::UnknownKey(key.to_string())),
        },
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(key, value, "applied preset edit");

    Ok(())
}

fn int_field<'a>(preset: &'a mut Preset, key: &str) -> Option<&'a mut i32> {
    let field = match key {
        "amp.gain" => &mut preset.amp_gain,
        "amp.treble" => &mut preset.amp_treble,
        "amp.middle" => &mut preset.amp_middle,
        "amp.bass" => &mut preset.amp_bass,
        "amp.volume" => &mut preset.amp_volume,
        "mod.depth" => &mut preset.mod_depth,
        "mod.speed" => &mut preset.mod_speed,
        "delay.mix" => &mut preset.delay_mix,
        "delay.time" => &mut preset.delay_time,
        "reverb.decay" => &mut preset.reverb_decay,
        "reverb.mix" => &mut preset.reverb_mix,
        "noise_gate" => &mut preset.noise_gate,
        "ir_cab" => &mut preset.ir_cab,
        "color.r" => &mut preset.color_r,
        "color.g" => &mut preset.color_g,
        "color.b" => &mut preset.color_b,
        _ => return None,
    };
    Some(field)
}

fn invalid(key: &str, value: &str, expected: &'static str) -> EditError {
    EditError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        expected,
    }
}

fn parse_int<T: FromStr>(key: &str, value: &str) -> Result<T, EditError> {
    value.parse().map_err(|_| invalid(key, value, "an integer"))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, EditError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, value, "true or false")),
    }
}

fn parse_color(key: &str, value: &str) -> Result<[i32; 3], EditError> {
    const EXPECTED: &str = "#RRGGBB or r,g,b";

    if value.contains(',') {
        let channels: Vec<i32> = value
            .split(',')
            .map(|part| part.trim().parse())
            .collect::<Result<_, _>>()
            .map_err(|_| invalid(key, value, EXPECTED))?;
        return <[i32; 3]>::try_from(channels).map_err(|_| invalid(key, value, EXPECTED));
    }

    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(key, value, EXPECTED));
    }
    let channel = |i: usize| i32::from_str_radix(&hex[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Ok([r, g, b]),
        _ => Err(invalid(key, value, EXPECTED)),
    }
}
