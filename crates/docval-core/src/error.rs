//! Error types for container operations and document-model conversion.

use thiserror::Error;

use crate::value::Kind;

/// Contract violations raised by the container's accessors and mutators.
///
/// These are always-active, reported errors; they never degrade to silent
/// no-ops in release builds. Note that a missing map key or an out-of-range
/// array index is deliberately *not* a `ValueError`: lookups report absence
/// as `Ok(None)` instead (see [`DocValue::get`](crate::DocValue::get)).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// An accessor was called on a value of a different kind.
    #[error("expected a {expected} value, found {found}")]
    WrongKind {
        /// The kind the caller asked for.
        expected: Kind,
        /// The kind that was actually active.
        found: Kind,
    },

    /// `set_kind(Kind::Empty)` was attempted; the empty state is only
    /// reachable through `clear`.
    #[error("cannot switch a value to the empty state; use clear instead")]
    EmptyTransition,

    /// A map value or array element was empty when a populated tree was
    /// required.
    #[error("map values and array elements must not be empty")]
    EmptyChild,
}

/// Errors raised while converting to or from an external document tree.
///
/// Any failure aborts the whole conversion; partially built output must be
/// discarded by the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// A source leaf node decoded to the empty scalar, meaning its
    /// representation was not recognized by the scalar type.
    #[error("unrecognized scalar representation in source document")]
    UnrecognizedScalar,

    /// A scalar could not be represented in the target document model.
    #[error("scalar cannot be represented in the target document: {0}")]
    UnsupportedScalar(String),

    /// The document nests deeper than the traversal limit allows.
    #[error("nesting depth exceeds the limit of {limit}")]
    DepthLimit {
        /// The limit that was in effect.
        limit: usize,
    },

    /// A container contract violation surfaced during conversion.
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// Convenience alias used throughout the conversion modules.
pub type Result<T> = std::result::Result<T, ConvertError>;
