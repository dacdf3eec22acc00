//! Errors raised while building runtime values.

use thiserror::Error;

/// A value could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The text is not a valid integer literal.
    #[error("cannot convert `{0}` to a bigint")]
    InvalidBigInt(String),
    /// Abstract classes only describe subtypes; they have no instances of their own.
    #[error("cannot create an instance of abstract class `{0}`")]
    AbstractInstantiation(String),
}
