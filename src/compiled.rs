use crate::{
    MAX_FIELD_BITS, PACKED_BITS,
    errors::CompileError,
    field::{Field, FieldKind},
};

/// Layout of one field inside the packed word. Computed once by
/// [crate::schema::Schema::compile], read-only afterward.
#[derive(Debug, Clone)]
pub struct CompiledField {
    /// Name used as the key in value maps.
    pub name: String,
    /// Flag or unsigned integer.
    pub kind: FieldKind,
    /// Width in bits (1 for flags).
    pub bits: u32,
    /// Bit position where this field starts, counted from the least-significant bit.
    pub offset: u32,
    /// Validity mask at offset 0: `2^bits - 1`.
    pub mask: u64,
    /// Headroom above the field: [PACKED_BITS] minus `bits`.
    pub shift: u32,
    /// Largest encodable value: `2^bits - 1`.
    pub max: u64,
    /// Smallest encodable value. Always zero.
    pub min: u64,
}

impl TryFrom<&Field> for CompiledField {
    type Error = CompileError;

    /// Validates the field's width and fills every layout component except
    /// `offset`, which [crate::schema::Schema::compile] assigns from the
    /// field's position in the schema.
    fn try_from(field: &Field) -> Result<Self, Self::Error> {
        let bits = match field.kind {
            FieldKind::Flag => match field.bits {
                None | Some(0) => 1,
                Some(bits) => {
                    return Err(CompileError::UnexpectedBitWidth {
                        field: field.name.clone(),
                        bits,
                    });
                }
            },
            FieldKind::Uint => match field.bits {
                None => {
                    return Err(CompileError::MissingBitWidth {
                        field: field.name.clone(),
                    });
                }
                Some(bits) if bits == 0 || bits > MAX_FIELD_BITS => {
                    return Err(CompileError::BitWidthOutOfRange {
                        field: field.name.clone(),
                        bits,
                    });
                }
                Some(bits) => bits,
            },
        };

        let mask = (1u64 << bits) - 1;

        Ok(CompiledField {
            name: field.name.clone(),
            kind: field.kind,
            bits,
            offset: 0,
            mask,
            shift: PACKED_BITS - bits,
            max: mask,
            min: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_is_one_bit() {
        let compiled = CompiledField::try_from(&Field::flag("ready")).unwrap();
        assert_eq!(compiled.kind, FieldKind::Flag);
        assert_eq!(compiled.bits, 1);
        assert_eq!(compiled.mask, 1);
        assert_eq!(compiled.max, 1);
        assert_eq!(compiled.min, 0);
        assert_eq!(compiled.shift, 51);
    }

    #[test]
    fn test_flag_zero_width_means_implicit() {
        let field = Field {
            name: "ready".to_string(),
            kind: FieldKind::Flag,
            bits: Some(0),
        };
        let compiled = CompiledField::try_from(&field).unwrap();
        assert_eq!(compiled.bits, 1);
    }

    #[test]
    fn test_flag_with_width_fails() {
        let field = Field {
            name: "ready".to_string(),
            kind: FieldKind::Flag,
            bits: Some(2),
        };
        assert_eq!(
            CompiledField::try_from(&field).unwrap_err(),
            CompileError::UnexpectedBitWidth {
                field: "ready".to_string(),
                bits: 2,
            }
        );
    }

    #[test]
    fn test_uint_layout() {
        let compiled = CompiledField::try_from(&Field::uint("retries", 4)).unwrap();
        assert_eq!(compiled.kind, FieldKind::Uint);
        assert_eq!(compiled.bits, 4);
        assert_eq!(compiled.mask, 0b1111);
        assert_eq!(compiled.max, 15);
        assert_eq!(compiled.min, 0);
        assert_eq!(compiled.shift, 48);
    }

    #[test]
    fn test_uint_missing_width_fails() {
        let field = Field {
            name: "retries".to_string(),
            kind: FieldKind::Uint,
            bits: None,
        };
        assert_eq!(
            CompiledField::try_from(&field).unwrap_err(),
            CompileError::MissingBitWidth {
                field: "retries".to_string(),
            }
        );
    }

    #[test]
    fn test_uint_zero_width_fails() {
        assert_eq!(
            CompiledField::try_from(&Field::uint("retries", 0)).unwrap_err(),
            CompileError::BitWidthOutOfRange {
                field: "retries".to_string(),
                bits: 0,
            }
        );
    }

    #[test]
    fn test_uint_width_at_word_size_fails() {
        assert_eq!(
            CompiledField::try_from(&Field::uint("wide", 52)).unwrap_err(),
            CompileError::BitWidthOutOfRange {
                field: "wide".to_string(),
                bits: 52,
            }
        );
    }

    #[test]
    fn test_uint_widest_allowed() {
        let compiled = CompiledField::try_from(&Field::uint("wide", 51)).unwrap();
        assert_eq!(compiled.mask, (1u64 << 51) - 1);
        assert_eq!(compiled.shift, 1);
    }
}
