//! JSON-deserializable schema description.
//!
//! These types describe the *layout* of a packed word. They are intended to
//! be constructed from JSON (for example a schema file shipped with your
//! application) and then compiled into core `bitforge` types via
//! `Schema::try_from`.

use serde::{Deserialize, Serialize};

/// Top-level schema definition consisting of an ordered list of fields.
///
/// Declaration order is significant: it determines each field's bit offset.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SchemaDef {
    /// All fields of the packed word, in declaration order.
    pub fields: Vec<FieldDef>,
}

/// Description of a single packed field.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    /// Field name; becomes the key in value maps.
    pub name: String,
    /// Whether this is a flag or an unsigned-integer field.
    pub kind: FieldKindDef,
    /// Bit width for unsigned-integer fields. Must be omitted for flags.
    #[serde(default)]
    pub bits: Option<u32>,
}

/// Kind of field in the schema.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub enum FieldKindDef {
    /// One-bit boolean flag.
    Flag,
    /// Unsigned integer of the configured width.
    Uint,
}
