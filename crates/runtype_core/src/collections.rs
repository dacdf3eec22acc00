//! Collection types used by the value model and the checkers.

use crate::bigint::BigInt;
use crate::value::Value;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Own properties of an object, in insertion order.
pub type PropertyMap = IndexMap<String, Value>;

/// Whether `key` is the canonical form of an array index (`0` to `2^32 - 2`).
/// Such keys are enumerated before all other keys, in ascending order.
pub fn is_array_index(key: &str) -> bool {
    if key.len() > 1 && key.starts_with('0') {
        return false;
    }
    match key.parse::<u32>() {
        Ok(index) => index != u32::MAX && !key.starts_with('+'),
        Err(_) => false,
    }
}

/// Own properties in host enumeration order: array-index keys ascending,
/// then every other key in insertion order.
pub(crate) fn host_order(properties: &PropertyMap) -> Vec<(&str, &Value)> {
    let mut indices: Vec<(u32, &str, &Value)> = Vec::new();
    let mut named: Vec<(&str, &Value)> = Vec::with_capacity(properties.len());
    for (key, value) in properties {
        if is_array_index(key) {
            // is_array_index guarantees the parse succeeds.
            let index = key.parse::<u32>().unwrap_or(u32::MAX);
            indices.push((index, key.as_str(), value));
        } else {
            named.push((key.as_str(), value));
        }
    }
    if indices.is_empty() {
        return named;
    }
    indices.sort_by_key(|&(index, _, _)| index);
    indices
        .into_iter()
        .map(|(_, key, value)| (key, value))
        .chain(named)
        .collect()
}

/// Hashable identity of a primitive value under strict equality.
///
/// `NaN` has no key because it is never strictly equal to anything, and
/// `-0` shares the key of `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LiteralKey {
    String(Arc<str>),
    Number(u64),
    Boolean(bool),
    BigInt(BigInt),
}

impl LiteralKey {
    /// The key of `value`, or `None` when the value is not a comparable primitive.
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(LiteralKey::String(s.clone())),
            Value::Number(n) if n.is_nan() => None,
            Value::Number(n) => {
                let n = if *n == 0.0 { 0.0 } else { *n };
                Some(LiteralKey::Number(n.to_bits()))
            }
            Value::Boolean(b) => Some(LiteralKey::Boolean(*b)),
            Value::BigInt(b) => Some(LiteralKey::BigInt(b.clone())),
            _ => None,
        }
    }
}

/// A set of primitive values with strict-equality membership.
#[derive(Debug, Clone, Default)]
pub struct LiteralSet {
    keys: FxHashSet<LiteralKey>,
}

impl LiteralSet {
    pub fn new() -> Self {
        Self {
            keys: FxHashSet::default(),
        }
    }

    /// Add `value`. Returns `false` when the value has no literal key and was
    /// therefore not added.
    pub fn insert(&mut self, value: &Value) -> bool {
        match LiteralKey::of(value) {
            Some(key) => {
                self.keys.insert(key);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &Value) -> bool {
        LiteralKey::of(value).is_some_and(|key| self.keys.contains(&key))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
