//! Value rendering for diagnostics.
//!
//! Rendering never fails: values with a JSON form render as JSON text, every
//! other value falls back to its host string conversion.

use runtype_core::{Value, DEFAULT_MAX_DEPTH};
use serde::{Deserialize, Serialize};

/// Options controlling how rejected values appear in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Deepest container nesting rendered as JSON before falling back.
    pub max_depth: usize,
    /// Character budget for the rendered text; longer output is cut and
    /// ends with `…`. `None` renders everything.
    pub max_length: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_length: None,
        }
    }
}

impl RenderOptions {
    /// Parse options from a JSON document such as `{"maxLength": 80}`.
    /// Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// Render `value` for a diagnostic message.
pub fn render_value(value: &Value, options: &RenderOptions) -> String {
    let text = match value.to_json_string(options.max_depth) {
        Ok(Some(json)) => json,
        // No JSON form, or not serializable: use the string conversion.
        Ok(None) | Err(_) => value.to_host_string(options.max_depth),
    };
    match options.max_length {
        Some(limit) => truncate(text, limit),
        None => text,
    }
}

fn truncate(text: String, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut truncated = text[..cut].to_string();
            truncated.push('…');
            truncated
        }
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtype_core::{BigInt, Class, Function, Object, Symbol};

    fn render(value: &Value) -> String {
        render_value(value, &RenderOptions::default())
    }

    #[test]
    fn test_serializable_values_render_as_json() {
        assert_eq!(render(&Value::from("x")), "\"x\"");
        assert_eq!(render(&Value::from(5)), "5");
        assert_eq!(render(&Value::Null), "null");
        let object = Value::from(Object::new([("a", Value::from(1)), ("b", Value::array(["y"]))]));
        assert_eq!(render(&object), r#"{"a":1,"b":["y"]}"#);
    }

    #[test]
    fn test_fallback_rendering() {
        assert_eq!(render(&Value::Undefined), "undefined");
        assert_eq!(render(&Value::from(BigInt::from(12))), "12");
        assert_eq!(render(&Value::from(Symbol::new(Some("tag")))), "Symbol(tag)");
        assert_eq!(
            render(&Value::from(Function::new("go"))),
            "function go() { [native code] }"
        );
        assert_eq!(render(&Value::from(Class::new("Point"))), "class Point { }");
        let with_bigint = Value::from(Object::new([("n", BigInt::from(1))]));
        assert_eq!(render(&with_bigint), "[object Object]");
        let list = Value::array([Value::from(BigInt::from(1)), Value::from(2)]);
        assert_eq!(render(&list), "1,2");
    }

    #[test]
    fn test_depth_fallback() {
        let nested = Value::array([Value::array([Value::array([1])])]);
        let options = RenderOptions::default().with_max_depth(2);
        assert_eq!(render_value(&nested, &options), "[...]");
        assert_eq!(render(&nested), "[[[1]]]");
    }

    #[test]
    fn test_deeply_nested_value_renders_on_small_stack() {
        let rendered = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(|| {
                let mut nested = Value::from(1);
                for _ in 0..3_000 {
                    nested = Value::array([nested]);
                }
                render(&nested)
            })
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(rendered, "[...]");
    }

    #[test]
    fn test_truncation() {
        let options = RenderOptions::default().with_max_length(4);
        assert_eq!(render_value(&Value::from("abcdef"), &options), "\"abc…");
        assert_eq!(render_value(&Value::from(12), &options), "12");
        assert_eq!(render_value(&Value::from("ééééé"), &options), "\"ééé…");
    }

    #[test]
    fn test_options_from_json() {
        let options = RenderOptions::from_json_str(r#"{"maxLength": 80}"#).unwrap();
        assert_eq!(options.max_length, Some(80));
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(RenderOptions::from_json_str("{}").unwrap(), RenderOptions::default());
        assert!(RenderOptions::from_json_str(r#"{"maxDepth": "deep"}"#).is_err());
    }
}
