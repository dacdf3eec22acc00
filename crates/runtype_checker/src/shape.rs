//! Object-shaped checkers: fixed key sets and open records.

use crate::checker::Checker;
use crate::ty;
use indexmap::IndexMap;
use runtype_core::Value;

/// Accepts object-kind values whose property at each declared key passes the
/// key's checker. A missing property is checked as undefined, so a key whose
/// checker accepts undefined is optional. Undeclared keys are ignored.
pub fn get_mapped_checker<I, K>(mapping: I) -> Checker<ty::Shape>
where
    I: IntoIterator<Item = (K, Checker)>,
    K: Into<String>,
{
    let fields: IndexMap<String, Checker> = mapping
        .into_iter()
        .map(|(key, checker)| (key.into(), checker))
        .collect();
    Checker::from_fn(move |value| {
        value.is_object()
            && fields
                .iter()
                .all(|(key, checker)| checker.check(&value.get(key)))
    })
}

/// Accepts object-kind values whose own enumerable keys all pass `key` and
/// whose values all pass `value`. Keys are checked as strings; array indices
/// count as keys. Empty objects pass.
pub fn get_record_checker<K, V>(key: Checker<K>, value: Checker<V>) -> Checker<ty::Record<K, V>>
where
    K: 'static,
    V: 'static,
{
    Checker::from_fn(move |candidate| {
        candidate.is_object()
            && candidate.own_entries().into_iter().all(|(name, member)| {
                key.check(&Value::from(name.into_owned())) && value.check(member)
            })
    })
}

/// Builds a [`get_mapped_checker`] from `key => checker` pairs of any marker types.
///
/// ```
/// use runtype_checker::{mapped, IS_NUMBER, IS_STRING, Value};
///
/// let point = mapped! { "x" => IS_NUMBER, "label" => IS_STRING };
/// let value = Value::from(serde_json::json!({"x": 1, "label": "a"}));
/// assert!(point.check(&value));
/// ```
#[macro_export]
macro_rules! mapped {
    () => {
        $crate::get_mapped_checker(::std::iter::empty::<(::std::string::String, $crate::Checker)>())
    };
    ($($key:expr => $checker:expr),+ $(,)?) => {
        $crate::get_mapped_checker([$(($key, $crate::Checker::erase($checker))),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::*;
    use runtype_core::Object;

    #[test]
    fn test_mapped_reads_array_properties() {
        let checker = mapped! { "length" => IS_NUMBER, "0" => IS_STRING };
        assert!(checker.check(&Value::array(["a", "b"])));
        assert!(!checker.check(&Value::array([1])));
        assert!(!checker.check(&Value::from("ab")));
    }

    #[test]
    fn test_mapped_optional_key() {
        let checker = mapped! { "id" => IS_NUMBER, "note" => IS_STRING.or(IS_UNDEFINED) };
        assert!(checker.check(&Value::from(Object::new([("id", 1)]))));
        assert!(!checker.check(&Value::from(Object::new([("note", "x")]))));
    }

    #[test]
    fn test_empty_mapping_accepts_any_object() {
        let checker = mapped! {};
        assert!(checker.check(&Value::from(Object::new([("a", 1)]))));
        assert!(!checker.check(&Value::Null));
        assert!(!checker.check(&Value::from(1)));
    }

    #[test]
    fn test_record_checks_keys_as_strings() {
        let short_keys = Checker::new(|key| key.as_str().is_some_and(|k| k.len() == 1));
        let checker = get_record_checker(short_keys, IS_BOOLEAN);
        assert!(checker.check(&Value::from(Object::new([("a", true), ("b", false)]))));
        assert!(!checker.check(&Value::from(Object::new([("ab", true)]))));
        assert!(checker.check(&Value::array([true, false])));
        assert!(!checker.check(&Value::Null));
    }
}
