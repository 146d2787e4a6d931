use thiserror::Error;

use crate::String;

/// Errors surfaced while normalizing type descriptions into handles.
///
/// Every variant is fatal for the current processing round: this layer
/// performs no I/O, so a failure always reflects either an invalid input
/// type graph or a caller contract violation. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A symbolic reference could not be determined by the host compiler
    /// (forward reference still compiling, or missing dependency).
    #[error("unresolved type: {name}")]
    Unresolved { name: String },

    /// A type kind outside the handled set (type variable, wildcard,
    /// intersection) reached the resolver.
    #[error("unsupported type kind: {kind}")]
    UnsupportedKind { kind: &'static str },

    /// A requested fully-qualified name has no declaration.
    #[error("type not found: {name}")]
    NotFound { name: String },

    /// Repeated-element derivation on a shape that is neither an array
    /// nor a single-argument collection. Callers must probe first.
    #[error("{name} is not a repeatable shape")]
    NotRepeatable { name: String },

    #[error("{name} is not an enum")]
    NotAnEnum { name: String },

    #[error("{name} is not an array")]
    NotAnArray { name: String },

    #[error("{name} is not an enum constant")]
    NotAnEnumConstant { name: String },
}
