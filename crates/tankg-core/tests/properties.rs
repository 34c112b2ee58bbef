//! Property-based tests for the preset codec.
//!
//! Random canonical byte sequences and valid presets are pushed through the
//! codec and the text mapping to check that nothing is lost.

use proptest::prelude::*;
use tankg_core::{
    AMP_MODELS, CodeTable, DELAY_THRESHOLDS, DELAY_TYPES, MOD_THRESHOLDS, MOD_TYPES, PRESET_SIZE,
    Preset, REVERB_THRESHOLDS, REVERB_TYPES, TextFormat, Thresholds, decode, encode, piecewise,
};

/// Packed byte whose kind-3 magnitude stays within 1..=46.
fn packed_byte(t: Thresholds) -> impl Strategy<Value = u8> {
    0..=t.type3_base + 45
}

/// 21 bytes that decode to a preset passing validation.
fn canonical_bytes() -> impl Strategy<Value = [u8; PRESET_SIZE]> {
    (
        prop::array::uniform4(0u8..=1),
        0u8..=127,
        0u8..=8,
        prop::array::uniform4(0u8..=127),
        0u8..=127,
        (
            packed_byte(MOD_THRESHOLDS),
            0u8..=127,
            packed_byte(DELAY_THRESHOLDS),
            0u8..=127,
            packed_byte(REVERB_THRESHOLDS),
            0u8..=127,
        ),
        0u8..=8,
        prop::array::uniform3(any::<u8>()),
    )
        .prop_map(|(toggles, gate, model, knobs, volume, fx, ir, color)| {
            let (m, ms, d, dt, r, rm) = fx;
            [
                toggles[0], toggles[1], toggles[2], toggles[3], gate, model, knobs[0], knobs[1],
                knobs[2], knobs[3], volume, m, ms, d, dt, r, rm, ir, color[0], color[1], color[2],
            ]
        })
}

/// (name, magnitude) pairs whose magnitude fits inside the kind's range.
fn packed_field(table: CodeTable, t: Thresholds) -> impl Strategy<Value = (String, i32)> {
    (1u8..=3).prop_flat_map(move |kind| {
        let max = t.capacity(kind).min(46);
        (Just(table.name(kind).to_string()), 1..=max)
    })
}

fn valid_preset() -> impl Strategy<Value = Preset> {
    (
        prop::array::uniform4(any::<bool>()),
        0i32..=127,
        prop::sample::select(AMP_MODELS.names().collect::<Vec<_>>()),
        prop::array::uniform4(1i32..=128),
        0i32..=127,
        (
            packed_field(MOD_TYPES, MOD_THRESHOLDS),
            packed_field(DELAY_TYPES, DELAY_THRESHOLDS),
            packed_field(REVERB_TYPES, REVERB_THRESHOLDS),
            prop::array::uniform3(1i32..=128),
        ),
        0i32..=8,
        prop::array::uniform3(0i32..=255),
    )
        .prop_map(|(on, gate, model, knobs, volume, fx, ir, color)| {
            let (modulation, delay, reverb, speeds) = fx;
            Preset {
                amp_on: on[0],
                mod_on: on[1],
                delay_on: on[2],
                reverb_on: on[3],
                noise_gate: gate,
                amp_model: model.to_string(),
                amp_gain: knobs[0],
                amp_treble: knobs[1],
                amp_middle: knobs[2],
                amp_bass: knobs[3],
                amp_volume: volume,
                mod_type: modulation.0,
                mod_depth: modulation.1,
                mod_speed: speeds[0],
                delay_type: delay.0,
                delay_mix: delay.1,
                delay_time: speeds[1],
                reverb_type: reverb.0,
                reverb_decay: reverb.1,
                reverb_mix: speeds[2],
                ir_cab: ir,
                color_r: color[0],
                color_g: color[1],
                color_b: color[2],
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Canonical bytes survive decode → encode unchanged.
    #[test]
    fn bytes_roundtrip(bytes in canonical_bytes()) {
        let preset = decode(&bytes).unwrap();
        prop_assert!(preset.is_valid(), "{:?}", preset.validate());
        prop_assert_eq!(encode(&preset).unwrap(), bytes);
    }

    /// Valid presets survive encode → decode field for field.
    #[test]
    fn preset_roundtrip(preset in valid_preset()) {
        let bytes = encode(&preset).unwrap();
        prop_assert_eq!(decode(&bytes).unwrap(), preset);
    }

    /// Valid presets survive every text format.
    #[test]
    fn text_roundtrip(preset in valid_preset()) {
        for format in [TextFormat::Yaml, TextFormat::Json, TextFormat::Toml] {
            let text = format.render(&preset).unwrap();
            prop_assert_eq!(&format.parse(&text).unwrap(), &preset);
        }
    }

    /// Decoding never fails on a correctly sized input.
    #[test]
    fn decode_is_total(bytes in prop::array::uniform21(any::<u8>())) {
        let preset = decode(&bytes).unwrap();
        prop_assert!(AMP_MODELS.contains(&preset.amp_model));
        prop_assert!(MOD_TYPES.contains(&preset.mod_type));
        prop_assert!(DELAY_TYPES.contains(&preset.delay_type));
        prop_assert!(REVERB_TYPES.contains(&preset.reverb_type));
    }

    /// Any length other than 21 is rejected.
    #[test]
    fn wrong_size_is_rejected(data in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(data.len() != PRESET_SIZE);
        prop_assert!(decode(&data).is_err());
    }

    /// Piecewise packing is a bijection inside each kind's capacity.
    #[test]
    fn piecewise_bijection(kind in 1u8..=3, m in 1i32..=46) {
        let t = MOD_THRESHOLDS;
        prop_assume!(m <= t.capacity(kind));
        let raw = piecewise::encode(kind, m, t).unwrap();
        prop_assert_eq!(piecewise::decode(raw, t), (kind, m));
    }

    /// Non-positive magnitudes encode like magnitude 1.
    #[test]
    fn piecewise_clamp(kind in 1u8..=3, m in i32::MIN..=0) {
        for t in [MOD_THRESHOLDS, DELAY_THRESHOLDS, REVERB_THRESHOLDS] {
            prop_assert_eq!(piecewise::encode(kind, m, t), piecewise::encode(kind, 1, t));
        }
    }
}
