//! Piecewise parameter packing.
//!
//! Three preset bytes each carry a kind selector (1, 2 or 3) and a 1-based
//! magnitude. The byte space is split into three contiguous sub-ranges:
//!
//! ```text
//! 0 .. type2_base            kind 1, magnitude = raw + 1
//! type2_base .. type3_base   kind 2, magnitude = raw - type2_base + 1
//! type3_base ..= 255         kind 3, magnitude = raw - type3_base + 1
//! ```
//!
//! The boundaries differ per field, so every call names its [`Thresholds`]
//! constant explicitly.

use crate::error::CodecError;

/// Sub-range boundaries for one packed field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// First raw value decoded as kind 2.
    pub type2_base: u8,
    /// First raw value decoded as kind 3.
    pub type3_base: u8,
}

/// Modulation type/depth (byte 11).
pub const MOD_THRESHOLDS: Thresholds = Thresholds::new(41, 87);

/// Delay type/mix (byte 13).
pub const DELAY_THRESHOLDS: Thresholds = Thresholds::new(42, 87);

/// Reverb type/decay (byte 15).
pub const REVERB_THRESHOLDS: Thresholds = Thresholds::new(43, 86);

impl Thresholds {
    // Only used for the constants above, so a bad pair fails at compile time.
    const fn new(type2_base: u8, type3_base: u8) -> Self {
        assert!(type2_base <= type3_base);
        Self {
            type2_base,
            type3_base,
        }
    }

    /// Number of magnitudes `kind` can carry before spilling into the next
    /// sub-range. Zero for kinds outside 1..=3.
    pub const fn capacity(self, kind: u8) -> i32 {
        match kind {
            1 => self.type2_base as i32,
            2 => self.type3_base as i32 - self.type2_base as i32,
            3 => 256 - self.type3_base as i32,
            _ => 0,
        }
    }

    const fn base(self, kind: u8) -> Option<i32> {
        match kind {
            1 => Some(0),
            2 => Some(self.type2_base as i32),
            3 => Some(self.type3_base as i32),
            _ => None,
        }
    }
}

/// Split a packed byte into `(kind, magnitude)`. Every byte decodes.
pub fn decode(raw: u8, thresholds: Thresholds) -> (u8, i32) {
    let raw = i32::from(raw);
    let t2 = i32::from(thresholds.type2_base);
    let t3 = i32::from(thresholds.type3_base);
    if raw < t2 {
        (1, raw + 1)
    } else if raw < t3 {
        (2, raw - t2 + 1)
    } else {
        (3, raw - t3 + 1)
    }
}

/// Pack `(kind, magnitude)` into a byte.
///
/// Magnitudes below 1 are clamped to 1. Magnitudes above the kind's
/// [`capacity`](Thresholds::capacity) are packed as-is and land in the next
/// sub-range, matching files written by the device software; both cases are
/// logged when the `tracing` feature is on. Fails with
/// [`CodecError::InvalidArgument`] for kinds outside 1..=3 or results that do
/// not fit in a byte.
pub fn encode(kind: u8, magnitude: i32, thresholds: Thresholds) -> Result<u8, CodecError> {
    let base = thresholds
        .base(kind)
        .ok_or_else(|| CodecError::InvalidArgument(format!("invalid effect type: {kind}")))?;

    #[cfg(feature = "tracing")]
    {
        if magnitude < 1 {
            tracing::warn!(kind, magnitude, "piecewise magnitude below 1, clamped to 1");
        } else if magnitude > thresholds.capacity(kind) {
            tracing::warn!(
                kind,
                magnitude,
                capacity = thresholds.capacity(kind),
                "piecewise magnitude spills into the next kind's range"
            );
        }
    }

    let raw = base.saturating_add(magnitude.saturating_sub(1).max(0));
    u8::try_from(raw).map_err(|_| {
        CodecError::InvalidArgument(format!(
            "magnitude {magnitude} for effect type {kind} does not fit in a byte"
        ))
    })
}
