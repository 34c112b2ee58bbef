//! Field-level checks used by [`Preset::validate`](crate::Preset::validate).
//!
//! Each helper names the field it checks so the first failure can be
//! reported verbatim to the user.

use thiserror::Error;

use crate::tables::CodeTable;

/// A preset field holding a value outside its domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Integer field outside its inclusive range.
    #[error("{field} must be {min}-{max}, got {value}")]
    OutOfRange {
        /// Name of the field.
        field: &'static str,
        /// The rejected value.
        value: i32,
        /// Minimum allowed value.
        min: i32,
        /// Maximum allowed value.
        max: i32,
    },

    /// Enum field naming an entry missing from its code table.
    #[error("invalid {field}: {name}")]
    UnknownName {
        /// Name of the field.
        field: &'static str,
        /// The rejected name.
        name: String,
    },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check that `value` lies in `min..=max`.
pub fn check_range(field: &'static str, value: i32, min: i32, max: i32) -> ValidationResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Check a batch of fields sharing one range, stopping at the first failure.
pub fn check_range_batch(
    fields: &[(&'static str, i32)],
    min: i32,
    max: i32,
) -> ValidationResult<()> {
    fields
        .iter()
        .try_for_each(|&(field, value)| check_range(field, value, min, max))
}

/// Check that `name` is an entry of `table`.
pub fn check_member(table: &CodeTable, name: &str) -> ValidationResult<()> {
    if table.contains(name) {
        Ok(())
    } else {
        Err(ValidationError::UnknownName {
            field: table.field(),
            name: name.to_string(),
        })
    }
}
