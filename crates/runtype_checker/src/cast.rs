//! Turning a rejection into an error.

use crate::checker::Checker;
use crate::narrow::Narrowed;
use runtype_core::Value;
use runtype_diagnostics::{CastError, RenderOptions};
use std::sync::Arc;
use tracing::debug;

/// A validating pass-through: values the checker accepts come back
/// unchanged, anything else becomes a [`CastError`].
pub struct Cast<T = crate::ty::Unknown> {
    checker: Checker<T>,
    expected: Option<Arc<str>>,
    options: RenderOptions,
}

/// Wrap `checker`. `expected` names the type in error messages.
pub fn cast<T>(checker: &Checker<T>, expected: Option<&str>) -> Cast<T> {
    Cast {
        checker: checker.clone(),
        expected: expected.map(Arc::from),
        options: RenderOptions::default(),
    }
}

impl<T> Cast<T> {
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Return `value` itself if it passes.
    pub fn apply(&self, value: Value) -> Result<Value, CastError> {
        if self.checker.check(&value) {
            Ok(value)
        } else {
            Err(self.reject(&value))
        }
    }

    /// Like [`Cast::apply`] but borrows, returning the narrowed view.
    pub fn apply_ref<'a>(&self, value: &'a Value) -> Result<Narrowed<'a, T>, CastError> {
        self.checker.narrow(value).ok_or_else(|| self.reject(value))
    }

    /// Borrow as a plain function.
    pub fn as_fn(&self) -> impl Fn(Value) -> Result<Value, CastError> + '_ {
        move |value| self.apply(value)
    }

    fn reject(&self, value: &Value) -> CastError {
        let error = CastError::new(value, self.expected(), &self.options);
        debug!(
            expected = ?self.expected(),
            type_of = value.type_of(),
            "cast rejected value"
        );
        error
    }
}

impl<T> Clone for Cast<T> {
    fn clone(&self) -> Self {
        Self {
            checker: self.checker.clone(),
            expected: self.expected.clone(),
            options: self.options.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::*;

    #[test]
    fn test_apply_ref_narrows() {
        let to_number = cast(&IS_NUMBER, Some("number"));
        let value = Value::from(2.5);
        assert_eq!(to_number.apply_ref(&value).unwrap().get(), 2.5);
        assert!(to_number.apply_ref(&Value::Null).is_err());
    }

    #[test]
    fn test_as_fn() {
        let to_string = IS_STRING.cast(None);
        let apply = to_string.as_fn();
        assert!(apply(Value::from("ok")).is_ok());
        assert_eq!(
            apply(Value::from(1)).unwrap_err().to_string(),
            "value `1` is of an invalid type"
        );
    }
}
