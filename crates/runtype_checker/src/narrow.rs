//! Narrowed views of checked values.
//!
//! A `Narrowed<'a, T>` is a borrowed value that a `Checker<T>` has accepted.
//! Values are immutable, so the check stays valid for as long as the borrow,
//! and the marker decides which typed accessors are available.

use crate::ty;
use runtype_core::{BigInt, Function, Object, Symbol, Value};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

pub struct Narrowed<'a, T> {
    value: &'a Value,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> Narrowed<'a, T> {
    pub(crate) fn new(value: &'a Value) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    fn retag<U>(self) -> Narrowed<'a, U> {
        Narrowed::new(self.value)
    }

    /// The underlying value.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn into_value(self) -> Value {
        self.value.clone()
    }
}

impl<T> Clone for Narrowed<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Narrowed<'_, T> {}

impl<T> fmt::Debug for Narrowed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Narrowed").field(self.value).finish()
    }
}

impl<'a> Narrowed<'a, ty::Number> {
    pub fn get(&self) -> f64 {
        match self.value {
            Value::Number(n) => *n,
            _ => unreachable!("narrowed to number"),
        }
    }
}

impl<'a> Narrowed<'a, ty::Boolean> {
    pub fn get(&self) -> bool {
        match self.value {
            Value::Boolean(b) => *b,
            _ => unreachable!("narrowed to boolean"),
        }
    }
}

impl<'a> Narrowed<'a, ty::String> {
    pub fn as_str(&self) -> &'a str {
        match self.value {
            Value::String(s) => &**s,
            _ => unreachable!("narrowed to string"),
        }
    }
}

impl<'a> Narrowed<'a, ty::BigInt> {
    pub fn get(&self) -> &'a BigInt {
        match self.value {
            Value::BigInt(b) => b,
            _ => unreachable!("narrowed to bigint"),
        }
    }
}

impl<'a> Narrowed<'a, ty::Symbol> {
    pub fn get(&self) -> &'a Symbol {
        match self.value {
            Value::Symbol(s) => s,
            _ => unreachable!("narrowed to symbol"),
        }
    }
}

impl<'a> Narrowed<'a, ty::Function> {
    pub fn get(&self) -> &'a Function {
        match self.value {
            Value::Function(f) => f,
            _ => unreachable!("narrowed to function"),
        }
    }
}

impl<'a> Narrowed<'a, ty::Object> {
    /// Read a property; absent ones are undefined.
    pub fn get(&self, key: &str) -> Cow<'a, Value> {
        self.value.get(key)
    }
}

impl<'a> Narrowed<'a, ty::Shape> {
    /// Read a property; absent ones are undefined.
    pub fn get(&self, key: &str) -> Cow<'a, Value> {
        self.value.get(key)
    }
}

impl<'a> Narrowed<'a, ty::Instance> {
    pub fn object(&self) -> &'a Object {
        match self.value {
            Value::Object(o) => o,
            _ => unreachable!("narrowed to class instance"),
        }
    }
}

impl<'a, T> Narrowed<'a, ty::Array<T>> {
    pub fn len(&self) -> usize {
        self.value.as_array().map_or(0, |items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The elements, each narrowed to `T`.
    pub fn items(&self) -> impl Iterator<Item = Narrowed<'a, T>> {
        let items: &'a [Value] = match self.value {
            Value::Array(items) => items.as_slice(),
            _ => unreachable!("narrowed to array"),
        };
        items.iter().map(Narrowed::new)
    }
}

impl<'a, K, V> Narrowed<'a, ty::Record<K, V>> {
    /// Own entries in host order, values narrowed to `V`.
    pub fn entries(&self) -> Vec<(Cow<'a, str>, Narrowed<'a, V>)> {
        self.value
            .own_entries()
            .into_iter()
            .map(|(key, value)| (key, Narrowed::new(value)))
            .collect()
    }
}

impl<'a, T> Narrowed<'a, ty::Nullable<T>> {
    /// `None` for null.
    pub fn get(self) -> Option<Narrowed<'a, T>> {
        (!self.value.is_null()).then(|| self.retag())
    }
}

impl<'a, T> Narrowed<'a, ty::Optional<T>> {
    /// `None` for undefined.
    pub fn get(self) -> Option<Narrowed<'a, T>> {
        (!self.value.is_undefined()).then(|| self.retag())
    }
}

impl<'a, A, B> Narrowed<'a, ty::Intersection<A, B>> {
    pub fn left(self) -> Narrowed<'a, A> {
        self.retag()
    }

    pub fn right(self) -> Narrowed<'a, B> {
        self.retag()
    }
}

#[cfg(test)]
mod tests {
    use crate::combinators::{get_array_checker, nullable, optional};
    use crate::primitives::*;
    use crate::shape::get_record_checker;
    use runtype_core::{Object, Value};

    #[test]
    fn test_scalar_accessors() {
        let number = Value::from(4);
        assert_eq!(IS_NUMBER.narrow(&number).unwrap().get(), 4.0);
        let text = Value::from("hi");
        assert_eq!(IS_STRING.narrow(&text).unwrap().as_str(), "hi");
        assert!(IS_STRING.narrow(&number).is_none());
    }

    #[test]
    fn test_array_items() {
        let checker = get_array_checker(IS_NUMBER);
        let value = Value::array([1, 2, 3]);
        let narrowed = checker.narrow(&value).unwrap();
        assert_eq!(narrowed.len(), 3);
        let sum: f64 = narrowed.items().map(|item| item.get()).sum();
        assert_eq!(sum, 6.0);
    }

    #[test]
    fn test_nullable_and_optional() {
        let checker = nullable(IS_STRING);
        let null = Value::Null;
        assert!(checker.narrow(&null).unwrap().get().is_none());
        let text = Value::from("x");
        assert_eq!(checker.narrow(&text).unwrap().get().unwrap().as_str(), "x");

        let checker = optional(IS_BOOLEAN);
        let flag = Value::from(true);
        assert_eq!(checker.narrow(&flag).unwrap().get().map(|b| b.get()), Some(true));
        assert!(checker.narrow(&Value::Undefined).unwrap().get().is_none());
    }

    #[test]
    fn test_record_entries() {
        let checker = get_record_checker(IS_STRING, IS_NUMBER);
        let value = Value::from(Object::new([("b", 2), ("a", 1)]));
        let entries: Vec<_> = checker
            .narrow(&value)
            .unwrap()
            .entries()
            .into_iter()
            .map(|(key, n)| (key.into_owned(), n.get()))
            .collect();
        assert_eq!(entries, vec![("b".to_string(), 2.0), ("a".to_string(), 1.0)]);
    }

    #[test]
    fn test_intersection_sides() {
        let positive = crate::Checker::new(|v| v.as_number().is_some_and(|n| n > 0.0));
        let checker = IS_NUMBER.and(positive);
        let value = Value::from(9);
        let narrowed = checker.narrow(&value).unwrap();
        assert_eq!(narrowed.left().get(), 9.0);
        assert!(narrowed.right().value().strict_equals(&value));
    }
}
