//! Schema: compiled field layout plus the pack/unpack operations over a word.

use std::collections::BTreeMap;

use crate::{
    PACKED_BITS, PACKED_MAX,
    compiled::CompiledField,
    errors::{CompileError, PackError},
    field::{Field, FieldKind},
    value::Value,
};

/// Values keyed by field name, as consumed by [Schema::encode] and produced
/// by [Schema::decode].
pub type FieldValues = BTreeMap<String, Value>;

/// A compiled schema: list of [CompiledField]s and total bit length. Use
/// [Schema::compile] to build from [Field]s, then [Schema::encode] /
/// [Schema::decode] / [Schema::patch] to work with packed words.
#[derive(Debug)]
pub struct Schema {
    total_bits: u32,
    fields: Vec<CompiledField>,
}

impl Schema {
    /// Compiles an ordered slice of [Field]s into a schema. Fails if any
    /// field is invalid or the summed widths exceed [PACKED_BITS]. Offsets
    /// follow declaration order: the first field starts at bit 0.
    pub fn compile(fields: &[Field]) -> Result<Self, CompileError> {
        let mut compiled_fields: Vec<CompiledField> = Vec::with_capacity(fields.len());
        let mut total_bits: u32 = 0;

        for field in fields {
            if field.name.is_empty() || compiled_fields.iter().any(|f| f.name == field.name) {
                return Err(CompileError::InvalidFieldName {
                    field: field.name.clone(),
                });
            }

            let compiled_field: CompiledField = field.try_into()?;
            total_bits += compiled_field.bits;
            compiled_fields.push(compiled_field);
        }

        if total_bits > PACKED_BITS {
            return Err(CompileError::TotalWidthExceeded { total_bits });
        }

        // Offsets are assigned only after every field has validated.
        let mut offset = 0;
        for field in &mut compiled_fields {
            field.offset = offset;
            offset += field.bits;
        }

        Ok(Self {
            total_bits,
            fields: compiled_fields,
        })
    }

    /// Packs `values` into a single word. Every declared field must be
    /// present in the map, match its kind, and fall inside its range; keys
    /// that name no schema field are ignored.
    pub fn encode(&self, values: &FieldValues) -> Result<u64, PackError> {
        let mut packed = 0u64;

        for field in &self.fields {
            let value = values
                .get(&field.name)
                .ok_or_else(|| PackError::MissingField(field.name.clone()))?;

            packed |= field_bits(field, value)? << field.offset;
        }

        Ok(packed)
    }

    /// Unpacks a word into one value per declared field. Fails only if
    /// `packed` has bits set at or above [PACKED_BITS]; bits between the
    /// schema's total width and the word bound fall outside every mask.
    pub fn decode(&self, packed: u64) -> Result<FieldValues, PackError> {
        if packed > PACKED_MAX {
            return Err(PackError::InvalidPackedValue(packed));
        }

        let mut values = FieldValues::new();

        for field in &self.fields {
            let raw = (packed >> field.offset) & field.mask;
            let value = match field.kind {
                FieldKind::Flag => Value::Flag(raw != 0),
                FieldKind::Uint => Value::Uint(raw),
            };
            values.insert(field.name.clone(), value);
        }

        Ok(values)
    }

    /// Overwrites the fields named in `updates` inside `packed`, leaving the
    /// rest unchanged: decode, merge `updates` over the result, re-encode.
    /// Every field of the merged map is re-validated, so the result is always
    /// a word [Schema::encode] could have produced directly.
    pub fn patch(&self, packed: u64, updates: &FieldValues) -> Result<u64, PackError> {
        let mut values = self.decode(packed)?;

        for (name, value) in updates {
            values.insert(name.clone(), *value);
        }

        self.encode(&values)
    }

    /// Looks up the compiled layout of one field by name.
    pub fn field_info(&self, name: &str) -> Result<&CompiledField, PackError> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| PackError::UnknownField(name.to_string()))
    }

    /// Summed width of all fields in bits.
    pub fn total_bits(&self) -> u32 {
        self.total_bits
    }

    /// Compiled fields in declaration order.
    pub fn fields(&self) -> &[CompiledField] {
        &self.fields
    }
}

/// Validates `value` against `field` and returns its raw bit pattern.
fn field_bits(field: &CompiledField, value: &Value) -> Result<u64, PackError> {
    match (field.kind, value) {
        (FieldKind::Flag, Value::Flag(flag)) => Ok(*flag as u64),
        (FieldKind::Uint, Value::Uint(v)) => {
            if *v > field.max {
                return Err(PackError::ValueOutOfRange {
                    field: field.name.clone(),
                    value: *v,
                    max: field.max,
                });
            }
            Ok(*v)
        }
        _ => Err(PackError::TypeMismatch {
            field: field.name.clone(),
            expected: field.kind,
        }),
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::SchemaDef> for Schema {
    type Error = CompileError;

    fn try_from(def: crate::serde::SchemaDef) -> Result<Self, Self::Error> {
        let fields: Vec<Field> = def.fields.into_iter().map(Into::into).collect();
        Schema::compile(&fields)
    }
}
