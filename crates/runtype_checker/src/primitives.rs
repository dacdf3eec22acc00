//! Primitive checkers, one per base kind.
//!
//! Each recognizes exactly one `typeof` category, except that null is split
//! out of the object category and has its own checker.

use crate::checker::Checker;
use crate::ty;
use runtype_core::Value;

fn never(_: &Value) -> bool {
    false
}

fn any(_: &Value) -> bool {
    true
}

fn bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

fn boolean(value: &Value) -> bool {
    matches!(value, Value::Boolean(_))
}

fn function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

fn null(value: &Value) -> bool {
    value.is_null()
}

fn number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

fn object(value: &Value) -> bool {
    value.type_of() == "object" && !value.is_null()
}

fn string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

fn symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

fn undefined(value: &Value) -> bool {
    value.is_undefined()
}

pub const IS_NEVER: Checker<ty::Never> = Checker::primitive(never);
pub const IS_ANY: Checker<ty::Any> = Checker::primitive(any);
pub const IS_BIGINT: Checker<ty::BigInt> = Checker::primitive(bigint);
pub const IS_BOOLEAN: Checker<ty::Boolean> = Checker::primitive(boolean);
/// Plain functions and class constructors.
pub const IS_FUNCTION: Checker<ty::Function> = Checker::primitive(function);
/// Exactly null, not undefined.
pub const IS_NULL: Checker<ty::Null> = Checker::primitive(null);
pub const IS_NUMBER: Checker<ty::Number> = Checker::primitive(number);
/// Arrays and objects; never null.
pub const IS_OBJECT: Checker<ty::Object> = Checker::primitive(object);
pub const IS_STRING: Checker<ty::String> = Checker::primitive(string);
pub const IS_SYMBOL: Checker<ty::Symbol> = Checker::primitive(symbol);
/// Exactly undefined, not null.
pub const IS_UNDEFINED: Checker<ty::Undefined> = Checker::primitive(undefined);
