//! Literal checkers.

use crate::checker::Checker;
use crate::ty;
use runtype_core::{BigInt, Value};
use std::sync::Arc;

/// A primitive literal a value can be compared against.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(Arc<str>),
    Boolean(bool),
    Number(f64),
    BigInt(BigInt),
}

impl Literal {
    pub fn to_value(&self) -> Value {
        match self {
            Literal::String(s) => Value::String(s.clone()),
            Literal::Boolean(b) => Value::Boolean(*b),
            Literal::Number(n) => Value::Number(*n),
            Literal::BigInt(b) => Value::BigInt(b.clone()),
        }
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.into())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value.into())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Number(value as f64)
    }
}

impl From<BigInt> for Literal {
    fn from(value: BigInt) -> Self {
        Literal::BigInt(value)
    }
}

/// Accepts values strictly equal to `literal`: same kind and same value, with
/// no coercion. A `NaN` literal accepts nothing.
pub fn get_literal_checker(literal: impl Into<Literal>) -> Checker<ty::Literal> {
    let expected = literal.into().to_value();
    Checker::from_fn(move |value| value.strict_equals(&expected))
}
