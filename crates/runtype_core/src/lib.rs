//! runtype_core: The runtime value model.
//!
//! Provides the dynamic values that checkers inspect, strict equality,
//! own-property enumeration in host order, and JSON rendering used for
//! diagnostics.

pub mod bigint;
pub mod collections;
pub mod error;
pub mod json;
pub mod value;

// Re-export commonly used types
pub use bigint::BigInt;
pub use collections::{is_array_index, LiteralKey, LiteralSet, PropertyMap};
pub use error::ValueError;
pub use json::{JsonError, DEFAULT_MAX_DEPTH};
pub use value::{Array, Class, Function, Object, ObjectBuilder, Symbol, Value};
