//! Error types for schema compilation and packing operations.
//!
//! Errors carry structured context (field name, offending value, allowed
//! range); human-readable text is rendered only at the boundary via
//! [std::fmt::Display].

use std::fmt;

use crate::{MAX_FIELD_BITS, PACKED_BITS, field::FieldKind};

/// Errors produced when compiling [crate::field::Field]s into a [crate::schema::Schema].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// An unsigned-integer field has no bit width.
    MissingBitWidth { field: String },
    /// A flag field declares a bit width (flags are implicitly 1 bit).
    UnexpectedBitWidth { field: String, bits: u32 },
    /// An unsigned-integer field's width is zero or wider than [MAX_FIELD_BITS].
    BitWidthOutOfRange { field: String, bits: u32 },
    /// The summed field widths exceed [PACKED_BITS].
    TotalWidthExceeded { total_bits: u32 },
    /// Field name is empty or duplicates an earlier field.
    InvalidFieldName { field: String },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::MissingBitWidth { field } => {
                write!(f, "field '{}': unsigned-integer field requires a bit width", field)
            }
            CompileError::UnexpectedBitWidth { field, bits } => {
                write!(
                    f,
                    "field '{}': flag field must not declare a bit width (got {})",
                    field, bits
                )
            }
            CompileError::BitWidthOutOfRange { field, bits } => {
                write!(
                    f,
                    "field '{}': bit width {} is outside 1..={}",
                    field, bits, MAX_FIELD_BITS
                )
            }
            CompileError::TotalWidthExceeded { total_bits } => {
                write!(
                    f,
                    "schema needs {} bits but a packed word holds {}",
                    total_bits, PACKED_BITS
                )
            }
            CompileError::InvalidFieldName { field } => {
                write!(f, "field '{}': name is empty or already declared", field)
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Errors produced when packing or unpacking values against a compiled
/// [crate::schema::Schema].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// A declared field is absent from the value map passed to encode.
    MissingField(String),
    /// A value's variant does not match the field's kind.
    TypeMismatch { field: String, expected: FieldKind },
    /// An unsigned-integer value is outside the field's range.
    ValueOutOfRange { field: String, value: u64, max: u64 },
    /// The packed word has bits set at or above [PACKED_BITS].
    InvalidPackedValue(u64),
    /// The requested field is not part of the schema.
    UnknownField(String),
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::MissingField(field) => {
                write!(f, "field '{}': missing from the value map", field)
            }
            PackError::TypeMismatch { field, expected } => {
                let expected = match expected {
                    FieldKind::Flag => "boolean",
                    FieldKind::Uint => "unsigned-integer",
                };
                write!(f, "field '{}': expected a {} value", field, expected)
            }
            PackError::ValueOutOfRange { field, value, max } => {
                write!(f, "field '{}': value {} is outside 0..={}", field, value, max)
            }
            PackError::InvalidPackedValue(value) => {
                write!(
                    f,
                    "packed value {} has bits above the {}-bit word",
                    value, PACKED_BITS
                )
            }
            PackError::UnknownField(field) => {
                write!(f, "field '{}': not declared in the schema", field)
            }
        }
    }
}

impl std::error::Error for PackError {}
