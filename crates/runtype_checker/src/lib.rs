//! runtype_checker: Composable runtime type checkers.
//!
//! A [`Checker<T>`] is a pure predicate over a runtime [`Value`], tagged with
//! a marker type `T` describing what it recognizes. Primitive checkers cover
//! each base kind; combinators build unions, intersections, arrays, object
//! shapes, records, literals, enums, class instances and nullable types out of
//! other checkers. [`cast`] turns a checker into a validating pass-through
//! that reports rejections as [`CastError`].
//!
//! ```
//! use runtype_checker::{cast, get_array_checker, mapped, nullable, IS_NUMBER, IS_STRING, Value};
//! use serde_json::json;
//!
//! let user = mapped! {
//!     "id" => IS_NUMBER,
//!     "tags" => get_array_checker(IS_STRING),
//!     "nickname" => nullable(IS_STRING),
//! };
//!
//! let value = Value::from(json!({"id": 7, "tags": ["admin"], "nickname": null}));
//! assert!(user.check(&value));
//!
//! let error = cast(&user, Some("User")).apply(Value::from(json!({"id": "7"}))).unwrap_err();
//! assert_eq!(error.to_string(), r#"value `{"id":"7"}` is not of type `User`"#);
//! ```

mod cast;
mod checker;
mod combinators;
mod enums;
mod instance;
mod literal;
mod narrow;
mod primitives;
mod shape;
pub mod ty;

pub use cast::{cast, Cast};
pub use checker::{Checker, Predicate};
pub use combinators::{get_array_checker, get_intersection_of, get_union_of, nullable, optional};
pub use enums::{get_enum_checker, get_enum_checker_of, is_numeric_key, EnumDescription, EnumMode};
pub use instance::get_instance_checker;
pub use literal::{get_literal_checker, Literal};
pub use narrow::Narrowed;
pub use primitives::{
    IS_ANY, IS_BIGINT, IS_BOOLEAN, IS_FUNCTION, IS_NEVER, IS_NULL, IS_NUMBER, IS_OBJECT,
    IS_STRING, IS_SYMBOL, IS_UNDEFINED,
};
pub use shape::{get_mapped_checker, get_record_checker};

// Re-export the value model and diagnostics so callers need a single dependency.
pub use runtype_core::{Array, BigInt, Class, Function, Object, Symbol, Value};
pub use runtype_diagnostics::{CastError, RenderOptions};
