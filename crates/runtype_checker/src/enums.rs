//! Enum descriptions and enum checkers.
//!
//! An integer-backed enum object carries both `name -> value` entries and the
//! reverse `"value" -> name` aliases. Only the forward entries describe the
//! enum's values, so in [`EnumMode::Reflected`] every key that looks like a
//! number is skipped. String-backed enums have no aliases and use
//! [`EnumMode::Verbatim`], which keeps every entry.

use crate::checker::Checker;
use crate::ty;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use runtype_core::{LiteralSet, Object, Value};
use tracing::trace;

lazy_static! {
    static ref NUMERIC_KEY: Regex =
        Regex::new(r"^-?[0-9]+(\.[0-9]+)?([eE][-+]?[0-9]+)?$").expect("numeric key pattern is valid");
}

/// Whether `key` looks like a number: optional `-`, digits, optional
/// fraction, optional exponent.
pub fn is_numeric_key(key: &str) -> bool {
    NUMERIC_KEY.is_match(key)
}

/// How values are extracted from an enum description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumMode {
    /// Integer-backed: numeric-looking keys are reverse aliases and are skipped.
    #[default]
    Reflected,
    /// Every entry contributes its value.
    Verbatim,
}

/// A closed `name -> value` mapping.
#[derive(Debug, Clone)]
pub struct EnumDescription {
    entries: IndexMap<String, Value>,
    mode: EnumMode,
}

impl EnumDescription {
    /// An integer-backed enum, including the reverse aliases its runtime
    /// object would carry.
    pub fn numeric<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (name, number) in members {
            let name = name.into();
            entries.insert(name.clone(), Value::from(number));
            entries.insert(number.to_string(), Value::from(name));
        }
        Self {
            entries,
            mode: EnumMode::Reflected,
        }
    }

    /// A string-backed enum.
    pub fn string<I, K, V>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = members
            .into_iter()
            .map(|(name, value)| (name.into(), Value::from(value.into())))
            .collect();
        Self {
            entries,
            mode: EnumMode::Verbatim,
        }
    }

    /// Read the own entries of an enum object. Non-object values describe an
    /// empty enum.
    pub fn from_value(value: &Value, mode: EnumMode) -> Self {
        let entries = value
            .own_entries()
            .into_iter()
            .map(|(key, member)| (key.into_owned(), member.clone()))
            .collect();
        Self { entries, mode }
    }

    pub fn mode(&self) -> EnumMode {
        self.mode
    }

    /// Same entries, different extraction mode.
    pub fn with_mode(mut self, mode: EnumMode) -> Self {
        self.mode = mode;
        self
    }

    /// All entries, aliases included, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// The enum's values under the current mode.
    pub fn values(&self) -> Vec<Value> {
        self.entries
            .iter()
            .filter(|(key, _)| {
                let alias = self.mode == EnumMode::Reflected && is_numeric_key(key);
                if alias {
                    trace!(key = key.as_str(), "skipping reverse enum alias");
                }
                !alias
            })
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// The enum as a runtime object.
    pub fn to_value(&self) -> Value {
        Value::Object(Object::new(self.entries.clone()))
    }
}

/// Accepts values strictly equal to one of the description's values.
pub fn get_enum_checker(description: &EnumDescription) -> Checker<ty::Enum> {
    get_enum_checker_of(description.values())
}

/// Accepts values strictly equal to one of `values`. Only strings, numbers,
/// booleans and bigints can be members; other values are ignored.
pub fn get_enum_checker_of<I, V>(values: I) -> Checker<ty::Enum>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut members = LiteralSet::new();
    for value in values {
        let value = value.into();
        if !members.insert(&value) {
            trace!(type_of = value.type_of(), "ignoring non-literal enum value");
        }
    }
    Checker::from_fn(move |value| members.contains(value))
}
