//! runtype_diagnostics: Cast failures and their messages.
//!
//! Checkers never fail; the only error in the library is a value rejected at
//! a `cast` boundary. This crate defines that error, the message templates it
//! is built from, and the total value rendering embedded in the message.

mod error;
mod render;

pub use error::CastError;
pub use render::{render_value, RenderOptions};

/// A diagnostic message template with a code.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The diagnostic code.
    pub code: u32,
    /// The message template string. May contain `{0}`, `{1}` placeholders.
    pub message: &'static str,
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
///
/// Substitution is a single pass over the template: argument text is copied
/// verbatim even if it contains placeholder syntax itself.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            Some((args.get(index)?, close))
        });
        match arg {
            Some((arg, close)) => {
                result.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                result.push('{');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, $msg:expr) => {
            DiagnosticMessage { code: $code, message: $msg }
        };
    }

    pub const VALUE_0_IS_NOT_OF_TYPE_1: DiagnosticMessage = diag!(1001, "value `{0}` is not of type `{1}`");
    pub const VALUE_0_IS_OF_AN_INVALID_TYPE: DiagnosticMessage = diag!(1002, "value `{0}` is of an invalid type");
}
