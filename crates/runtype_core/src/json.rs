//! JSON rendering of runtime values.
//!
//! Follows the structure of the host `JSON.stringify`: members that have no
//! JSON form disappear from objects and turn into `null` inside arrays, and
//! bigints are not serializable at all.

use crate::value::{format_number, Value};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::{Map, Number, Value as Json};
use std::io;
use thiserror::Error;

/// Default bound on container nesting when rendering.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest integer magnitude a double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    #[error("do not know how to serialize a bigint")]
    BigInt,
    #[error("value nesting exceeds {0} levels")]
    DepthExceeded(usize),
    #[error("failed to write JSON: {0}")]
    Write(String),
}

impl Value {
    /// Convert to JSON. `Ok(None)` means the value has no JSON form
    /// (undefined, functions, symbols).
    pub fn to_json(&self, max_depth: usize) -> Result<Option<Json>, JsonError> {
        to_json_at(self, 0, max_depth)
    }

    /// Compact JSON text, see [`Value::to_json`].
    pub fn to_json_string(&self, max_depth: usize) -> Result<Option<String>, JsonError> {
        let Some(json) = self.to_json(max_depth)? else {
            return Ok(None);
        };
        let mut buffer = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buffer, HostNumbers);
        json.serialize(&mut serializer)
            .map_err(|err| JsonError::Write(err.to_string()))?;
        String::from_utf8(buffer)
            .map(Some)
            .map_err(|err| JsonError::Write(err.to_string()))
    }
}

/// Compact output with numbers written the way the host prints them.
struct HostNumbers;

impl Formatter for HostNumbers {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_number(value).as_bytes())
    }
}

fn to_json_at(value: &Value, depth: usize, max_depth: usize) -> Result<Option<Json>, JsonError> {
    let json = match value {
        Value::Undefined | Value::Function(_) | Value::Symbol(_) => return Ok(None),
        Value::BigInt(_) => return Err(JsonError::BigInt),
        Value::Null => Json::Null,
        Value::Boolean(b) => Json::Bool(*b),
        Value::Number(n) => number_to_json(*n),
        Value::String(s) => Json::String(s.to_string()),
        Value::Array(array) => {
            if depth >= max_depth {
                return Err(JsonError::DepthExceeded(max_depth));
            }
            let mut items = Vec::with_capacity(array.len());
            for item in array {
                items.push(to_json_at(item, depth + 1, max_depth)?.unwrap_or(Json::Null));
            }
            Json::Array(items)
        }
        Value::Object(object) => {
            if depth >= max_depth {
                return Err(JsonError::DepthExceeded(max_depth));
            }
            let mut map = Map::new();
            for (key, member) in object.entries() {
                if let Some(json) = to_json_at(member, depth + 1, max_depth)? {
                    map.insert(key.to_string(), json);
                }
            }
            Json::Object(map)
        }
    };
    Ok(Some(json))
}

fn number_to_json(n: f64) -> Json {
    if !n.is_finite() {
        return Json::Null;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        // Also folds -0 into 0.
        return Json::from(n as i64);
    }
    Number::from_f64(n).map_or(Json::Null, Json::Number)
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s.into()),
            Json::Array(items) => Value::array(items),
            Json::Object(map) => Value::Object(crate::value::Object::new(map)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::BigInt;
    use crate::value::{Function, Object, Symbol};
    use serde_json::json;

    fn render(value: &Value) -> Result<Option<String>, JsonError> {
        value.to_json_string(DEFAULT_MAX_DEPTH)
    }

    #[test]
    fn test_render_primitives() {
        assert_eq!(render(&Value::from(1.0)).unwrap().as_deref(), Some("1"));
        assert_eq!(render(&Value::from(-0.0)).unwrap().as_deref(), Some("0"));
        assert_eq!(render(&Value::from(2.5)).unwrap().as_deref(), Some("2.5"));
        assert_eq!(render(&Value::from(f64::NAN)).unwrap().as_deref(), Some("null"));
        assert_eq!(render(&Value::from("a\"b")).unwrap().as_deref(), Some("\"a\\\"b\""));
        assert_eq!(render(&Value::Null).unwrap().as_deref(), Some("null"));
        assert_eq!(render(&Value::Undefined).unwrap(), None);
        assert_eq!(render(&Value::from(Function::new("f"))).unwrap(), None);
        assert_eq!(render(&Value::from(Symbol::new(None))).unwrap(), None);
    }

    #[test]
    fn test_render_skips_unserializable_members() {
        let value = Value::Object(
            Object::builder()
                .property("a", 1)
                .property("f", Function::new("f"))
                .property("u", Value::Undefined)
                .property("list", Value::array([Value::Undefined, Value::from(true)]))
                .build(),
        );
        assert_eq!(
            render(&value).unwrap().as_deref(),
            Some(r#"{"a":1,"list":[null,true]}"#)
        );
    }

    #[test]
    fn test_render_bigint_fails() {
        let value = Value::array([Value::from(BigInt::from(1))]);
        assert_eq!(render(&value), Err(JsonError::BigInt));
    }

    #[test]
    fn test_render_numbers_like_host() {
        assert_eq!(render(&Value::from(2f64.powi(60))).unwrap().as_deref(), Some("1152921504606847000"));
        assert_eq!(render(&Value::from(1e21)).unwrap().as_deref(), Some("1e+21"));
        assert_eq!(
            render(&Value::array([Value::from(0.0000001), Value::from(0.5)])).unwrap().as_deref(),
            Some("[1e-7,0.5]")
        );
    }

    #[test]
    fn test_render_depth_limit() {
        let nested = Value::array([Value::array([1])]);
        assert!(nested.to_json(2).is_ok());
        assert_eq!(nested.to_json(1), Err(JsonError::DepthExceeded(1)));
    }

    #[test]
    fn test_from_json_keeps_member_order() {
        let value = Value::from(json!({"b": 1, "a": [true, null], "c": "x"}));
        let keys: Vec<_> = value
            .own_entries()
            .into_iter()
            .map(|(k, _)| k.into_owned())
            .collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(
            render(&value).unwrap().as_deref(),
            Some(r#"{"b":1,"a":[true,null],"c":"x"}"#)
        );
    }
}
