//! Runtime values carried into and out of a packed word.

use crate::field::FieldKind;

/// A value for one schema field: a boolean for flags, an unsigned integer otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Flag(bool),
    Uint(u64),
}

impl Value {
    /// The field kind this value satisfies.
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Flag(_) => FieldKind::Flag,
            Value::Uint(_) => FieldKind::Uint,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Flag(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Uint(value)
    }
}
