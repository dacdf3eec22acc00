//! The checker type.
//!
//! A checker is a pure, total predicate over [`Value`] tagged with a marker
//! type from [`ty`](crate::ty). Every combinator builds a new checker out of
//! existing ones; nothing is ever mutated after construction, so checkers can
//! be cloned freely and shared between threads.

use crate::cast::{cast, Cast};
use crate::combinators::{get_intersection_of, get_union_of};
use crate::narrow::Narrowed;
use crate::ty;
use runtype_core::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// The shared predicate contract: a pure, total function of one value.
pub type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

#[derive(Clone)]
enum Repr {
    /// A plain function; lets primitive checkers be `const` items.
    Primitive(fn(&Value) -> bool),
    Composite(Arc<Predicate>),
}

/// A checker recognizing values of the marker type `T`.
pub struct Checker<T = ty::Unknown> {
    repr: Repr,
    _recognizes: PhantomData<fn() -> T>,
}

impl Checker<ty::Unknown> {
    /// Wrap a custom predicate. The predicate must be pure and must not panic.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::from_fn(predicate)
    }
}

impl<T> Checker<T> {
    pub(crate) const fn primitive(predicate: fn(&Value) -> bool) -> Self {
        Self {
            repr: Repr::Primitive(predicate),
            _recognizes: PhantomData,
        }
    }

    pub(crate) fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            repr: Repr::Composite(Arc::new(predicate)),
            _recognizes: PhantomData,
        }
    }

    /// Relabel the marker. Only for checkers whose predicate is known to
    /// recognize exactly `U`.
    pub(crate) fn retag<U>(self) -> Checker<U> {
        Checker {
            repr: self.repr,
            _recognizes: PhantomData,
        }
    }

    /// Run the checker.
    #[inline]
    pub fn check(&self, value: &Value) -> bool {
        match &self.repr {
            Repr::Primitive(predicate) => predicate(value),
            Repr::Composite(predicate) => predicate(value),
        }
    }

    /// Forget the marker, e.g. to mix checkers in one collection.
    pub fn erase(self) -> Checker {
        self.retag()
    }

    /// Borrow the checker as a plain predicate.
    pub fn as_fn(&self) -> impl Fn(&Value) -> bool + '_ {
        move |value| self.check(value)
    }

    /// Check `value` and, if it passes, return a view typed by the marker.
    pub fn narrow<'a>(&self, value: &'a Value) -> Option<Narrowed<'a, T>> {
        self.check(value).then(|| Narrowed::new(value))
    }

    /// Accepts values accepted by `self` or by `other`.
    pub fn or<U>(self, other: Checker<U>) -> Checker<ty::Union<T, U>> {
        get_union_of([self.erase(), other.erase()]).retag()
    }

    /// Accepts values accepted by both `self` and `other`.
    pub fn and<U>(self, other: Checker<U>) -> Checker<ty::Intersection<T, U>> {
        get_intersection_of([self.erase(), other.erase()]).retag()
    }

    /// Shorthand for [`cast`].
    pub fn cast(&self, expected: Option<&str>) -> Cast<T> {
        cast(self, expected)
    }
}

impl<T> Clone for Checker<T> {
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.clone(),
            _recognizes: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Checker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker")
            .field("recognizes", &std::any::type_name::<T>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_checker_is_send_sync() {
        assert_send_sync::<Checker>();
        assert_send_sync::<Checker<ty::Array<ty::Number>>>();
    }

    #[test]
    fn test_custom_checker() {
        let even = Checker::new(|value| value.as_number().is_some_and(|n| n % 2.0 == 0.0));
        assert!(even.check(&Value::from(4)));
        assert!(!even.check(&Value::from(3)));
        assert!(!even.check(&Value::from("4")));

        let predicate = even.as_fn();
        let values = [Value::from(1), Value::from(2), Value::from(6)];
        assert_eq!(values.iter().filter(|&v| predicate(v)).count(), 2);
    }

    #[test]
    fn test_clones_share_behavior() {
        let checker = Checker::new(|value| value.is_null());
        let clone = checker.clone();
        assert_eq!(checker.check(&Value::Null), clone.check(&Value::Null));
        assert!(format!("{:?}", clone).contains("Unknown"));
    }
}
