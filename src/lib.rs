//! # bitforge
//!
//! A library for packing a fixed set of named values into the bits of a
//! single integer word, driven by a declarative schema.
//!
//! Declare fields in order (one-bit flags or N-bit unsigned integers),
//! compile them once, then encode value maps into packed words, decode
//! packed words back into value maps, or patch individual fields in place.
//! Declaration order determines bit offsets: the first field starts at
//! bit 0, each following field starts right after the previous one.
//!
//! ## Example
//!
//! ```
//! use bitforge::field::Field;
//! use bitforge::schema::{FieldValues, Schema};
//! use bitforge::value::Value;
//!
//! let schema = Schema::compile(&[
//!     Field::flag("ready"),
//!     Field::uint("retries", 4),
//! ]).unwrap();
//!
//! let mut values = FieldValues::new();
//! values.insert("ready".to_string(), Value::Flag(true));
//! values.insert("retries".to_string(), Value::Uint(3));
//!
//! let packed = schema.encode(&values).unwrap();
//! assert_eq!(packed, 0b0111);
//! assert_eq!(schema.decode(packed).unwrap(), values);
//! ```

pub mod compiled;
pub mod errors;
pub mod field;
pub mod schema;
#[cfg(feature = "serde")]
pub mod serde;
pub mod value;

/// Number of usable bits in a packed word. Matches the safe-integer ceiling
/// of an IEEE-754 double so packed words survive hosts whose only numeric
/// type is a double.
pub const PACKED_BITS: u32 = 52;

/// Widest allowed single field. A field may not fill the whole word.
pub const MAX_FIELD_BITS: u32 = PACKED_BITS - 1;

/// Largest representable packed word: `2^52 - 1`.
pub const PACKED_MAX: u64 = (1u64 << PACKED_BITS) - 1;
