//! Definition of logical fields used to build a [crate::schema::Schema].

/// A single named field in a schema: a one-bit flag or an N-bit unsigned integer.
#[derive(Debug, Clone)]
pub struct Field {
    /// Name used as the key in encoded and decoded value maps.
    pub name: String,
    /// Whether this field holds a flag or an unsigned integer.
    pub kind: FieldKind,
    /// Bit width. Required for [FieldKind::Uint]; must be absent (or zero)
    /// for [FieldKind::Flag].
    pub bits: Option<u32>,
}

impl Field {
    /// Creates a one-bit flag field.
    pub fn flag(name: impl Into<String>) -> Self {
        Field {
            name: name.into(),
            kind: FieldKind::Flag,
            bits: None,
        }
    }

    /// Creates an unsigned-integer field with the given bit width.
    pub fn uint(name: impl Into<String>, bits: u32) -> Self {
        Field {
            name: name.into(),
            kind: FieldKind::Uint,
            bits: Some(bits),
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            name: value.name,
            kind: value.kind.into(),
            bits: value.bits,
        }
    }
}

/// Distinguishes one-bit flags from multi-bit unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single bit, encoded from and decoded to a boolean.
    Flag,
    /// Unsigned integer occupying the field's configured bit width.
    Uint,
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldKindDef> for FieldKind {
    fn from(value: crate::serde::FieldKindDef) -> Self {
        match value {
            crate::serde::FieldKindDef::Flag => FieldKind::Flag,
            crate::serde::FieldKindDef::Uint => FieldKind::Uint,
        }
    }
}
