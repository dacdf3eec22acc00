//! The cast failure.

use crate::messages;
use crate::render::{render_value, RenderOptions};
use crate::{format_message, DiagnosticMessage};
use miette::Diagnostic;
use runtype_core::Value;
use thiserror::Error;

/// A value was rejected by a checker at a `cast` boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(runtype::cast))]
pub struct CastError {
    rendered: String,
    expected: Option<String>,
    message: String,
    template_code: u32,
}

impl CastError {
    /// Describe the rejection of `value`, naming `expected` if given.
    pub fn new(value: &Value, expected: Option<&str>, options: &RenderOptions) -> Self {
        let rendered = render_value(value, options);
        let (template, message): (&DiagnosticMessage, String) = match expected {
            Some(name) => {
                let template = &messages::VALUE_0_IS_NOT_OF_TYPE_1;
                (template, format_message(template.message, &[rendered.as_str(), name]))
            }
            None => {
                let template = &messages::VALUE_0_IS_OF_AN_INVALID_TYPE;
                (template, format_message(template.message, &[rendered.as_str()]))
            }
        };
        Self {
            template_code: template.code,
            rendered,
            expected: expected.map(str::to_string),
            message,
        }
    }

    /// The rejected value as it appears in the message.
    pub fn rendered_value(&self) -> &str {
        &self.rendered
    }

    /// The expected type name, if the cast was given one.
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The code of the message template used.
    pub fn diagnostic_code(&self) -> u32 {
        self.template_code
    }
}
