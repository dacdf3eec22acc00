//! Combinators over checkers: union, intersection, array, nullable.

use crate::checker::Checker;
use crate::ty;
use runtype_core::Value;

/// Accepts a value if any checker does, trying them left to right and
/// stopping at the first success. With no checkers nothing is accepted.
pub fn get_union_of<I>(checkers: I) -> Checker
where
    I: IntoIterator<Item = Checker>,
{
    let checkers: Vec<Checker> = checkers.into_iter().collect();
    Checker::from_fn(move |value| checkers.iter().any(|checker| checker.check(value)))
}

/// Accepts a value if every checker does, trying them left to right and
/// stopping at the first failure. With no checkers everything is accepted.
pub fn get_intersection_of<I>(checkers: I) -> Checker
where
    I: IntoIterator<Item = Checker>,
{
    let checkers: Vec<Checker> = checkers.into_iter().collect();
    Checker::from_fn(move |value| checkers.iter().all(|checker| checker.check(value)))
}

/// Accepts arrays whose elements all pass `element`. Empty arrays pass.
pub fn get_array_checker<T: 'static>(element: Checker<T>) -> Checker<ty::Array<T>> {
    Checker::from_fn(move |value| match value {
        Value::Array(items) => items.iter().all(|item| element.check(item)),
        _ => false,
    })
}

/// Accepts null or anything `inner` accepts. Undefined is not accepted;
/// see [`optional`].
pub fn nullable<T: 'static>(inner: Checker<T>) -> Checker<ty::Nullable<T>> {
    Checker::from_fn(move |value| value.is_null() || inner.check(value))
}

/// Accepts undefined or anything `inner` accepts.
pub fn optional<T: 'static>(inner: Checker<T>) -> Checker<ty::Optional<T>> {
    Checker::from_fn(move |value| value.is_undefined() || inner.check(value))
}

/// Typed union of any number of checkers, nesting [`ty::Union`] to the right.
///
/// `union_of![]` is [`IS_NEVER`](crate::IS_NEVER) and `union_of![c]` is `c`.
#[macro_export]
macro_rules! union_of {
    () => {
        $crate::IS_NEVER
    };
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::Checker::or($first, $crate::union_of!($($rest),+))
    };
}

/// Typed intersection of any number of checkers, nesting
/// [`ty::Intersection`] to the right.
///
/// `intersection_of![]` is [`IS_ANY`](crate::IS_ANY) and `intersection_of![c]` is `c`.
#[macro_export]
macro_rules! intersection_of {
    () => {
        $crate::IS_ANY
    };
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::Checker::and($first, $crate::intersection_of!($($rest),+))
    };
}
