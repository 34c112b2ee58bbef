//! Code tables mapping device codes to display names.
//!
//! Every table is a `'static` constant. Lookups from code to name are total:
//! codes missing from a table resolve to the table's fallback name, so the
//! decoder never has to fail on an unknown selector.

/// A fixed bijection between small integer codes and names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTable {
    field: &'static str,
    entries: &'static [(u8, &'static str)],
    fallback: &'static str,
}

impl CodeTable {
    /// Name of the preset field this table describes.
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Name returned for codes absent from the table.
    pub const fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Name for `code`, or the fallback name.
    pub fn name(&self, code: u8) -> &'static str {
        self.entries
            .iter()
            .find(|&&(c, _)| c == code)
            .map_or(self.fallback, |&(_, name)| name)
    }

    /// Name for a code of any width. Codes that do not fit in a byte resolve
    /// to the fallback name, like unknown byte codes.
    pub fn name_for_id(&self, id: i64) -> &'static str {
        u8::try_from(id).map_or(self.fallback, |code| self.name(code))
    }

    /// Code for `name`. Matching is exact.
    pub fn code(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|&&(_, n)| n == name)
            .map(|&(code, _)| code)
    }

    /// Whether `name` is an entry of this table.
    pub fn contains(&self, name: &str) -> bool {
        self.code(name).is_some()
    }

    /// All names in code order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|&(_, name)| name)
    }

    /// All `(code, name)` entries.
    pub fn entries(&self) -> &'static [(u8, &'static str)] {
        self.entries
    }
}

/// Amp model codes (byte 5).
pub const AMP_MODELS: CodeTable = CodeTable {
    field: "amp_model",
    entries: &[
        (0, "Clean"),
        (1, "Crunch"),
        (2, "Hi-Gain"),
        (3, "Metal"),
        (4, "Acoustic"),
        (5, "Bass"),
        (6, "British"),
        (7, "American"),
        (8, "Boutique"),
    ],
    fallback: "Acoustic",
};

/// Modulation kinds packed into byte 11.
pub const MOD_TYPES: CodeTable = CodeTable {
    field: "mod_type",
    entries: &[(1, "Chorus"), (2, "Phaser"), (3, "Tremolo")],
    fallback: "Chorus",
};

/// Delay kinds packed into byte 13.
pub const DELAY_TYPES: CodeTable = CodeTable {
    field: "delay_type",
    entries: &[(1, "Digital"), (2, "Analog"), (3, "Tape")],
    fallback: "Digital",
};

/// Reverb kinds packed into byte 15.
pub const REVERB_TYPES: CodeTable = CodeTable {
    field: "reverb_type",
    entries: &[(1, "Room"), (2, "Hall"), (3, "Plate")],
    fallback: "Room",
};
