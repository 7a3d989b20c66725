//! Error types for rank and suit operations.

use alloc::string::String;

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while building, listing, or decoding card values.
#[derive(Debug, Error)]
pub enum Error {
    /// A value of the wrong kind was supplied where an integer id or a
    /// string option was required.
    #[error("invalid type {found} for {type_name}")]
    InvalidType {
        /// The value type being built or listed.
        type_name: &'static str,
        /// The JSON kind that was received.
        found: &'static str,
    },
    /// A value of the right kind but outside the accepted domain.
    #[error("invalid value {value} for {type_name}")]
    InvalidValue {
        /// The value type being built or listed.
        type_name: &'static str,
        /// The offending value.
        value: String,
    },
    /// A derived field was given a value other than its catalog value.
    #[error("field {field} of {type_name} cannot be changed")]
    ImmutableField {
        /// The value type being decoded.
        type_name: &'static str,
        /// The field that was overridden.
        field: &'static str,
    },
    /// A field outside `id`, `name`, and `label` was supplied.
    #[error("{type_name} has no field {field}")]
    UnknownField {
        /// The value type being decoded.
        type_name: &'static str,
        /// The unexpected field.
        field: String,
    },
    /// A required field is absent.
    #[error("missing field {field} for {type_name}")]
    MissingField {
        /// The value type being decoded.
        type_name: &'static str,
        /// The absent field.
        field: &'static str,
    },
    /// Malformed JSON text.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The kind of an [`Error`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidType`].
    InvalidType,
    /// See [`Error::InvalidValue`].
    InvalidValue,
    /// See [`Error::ImmutableField`].
    ImmutableField,
    /// See [`Error::UnknownField`].
    UnknownField,
    /// See [`Error::MissingField`].
    MissingField,
    /// See [`Error::Json`].
    Json,
}

impl Error {
    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType { .. } => ErrorKind::InvalidType,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
            Self::ImmutableField { .. } => ErrorKind::ImmutableField,
            Self::UnknownField { .. } => ErrorKind::UnknownField,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::Json(_) => ErrorKind::Json,
        }
    }
}
