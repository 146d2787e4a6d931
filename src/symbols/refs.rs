use crate::{Box, String, Vec};

use crate::symbols::table::DeclId;

/// A kind-tagged symbolic type reference, as produced by the host
/// compiler's introspection facility while source is still being analyzed.
///
/// `Error` marks a reference the compiler could not resolve (a forward
/// reference still being compiled, or a missing dependency). The remaining
/// non-concrete kinds exist only so the resolver can reject them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Void,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    /// A class, interface or enum, possibly carrying generic type
    /// arguments. Arguments never participate in identity (erasure).
    Declared { decl: DeclId, args: Vec<TypeRef> },
    Array(Box<TypeRef>),
    /// Unresolved reference; the name is kept for diagnostics only.
    Error(String),
    TypeVar(String),
    Wildcard,
    Union,
    Intersection,
}

impl TypeRef {
    /// A declared type with no generic arguments (raw / erased use).
    pub fn declared(decl: DeclId) -> TypeRef {
        TypeRef::Declared {
            decl,
            args: Vec::new(),
        }
    }

    /// A declared type applied to generic arguments.
    pub fn generic(decl: DeclId, args: Vec<TypeRef>) -> TypeRef {
        TypeRef::Declared { decl, args }
    }

    pub fn array(component: TypeRef) -> TypeRef {
        TypeRef::Array(Box::new(component))
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            TypeRef::Void => "void",
            TypeRef::Boolean => "boolean",
            TypeRef::Byte => "byte",
            TypeRef::Short => "short",
            TypeRef::Int => "int",
            TypeRef::Long => "long",
            TypeRef::Char => "char",
            TypeRef::Float => "float",
            TypeRef::Double => "double",
            TypeRef::Declared { .. } => "declared",
            TypeRef::Array(_) => "array",
            TypeRef::Error(_) => "error",
            TypeRef::TypeVar(_) => "type variable",
            TypeRef::Wildcard => "wildcard",
            TypeRef::Union => "union",
            TypeRef::Intersection => "intersection",
        }
    }
}

/// A reflective runtime class description, used only to bootstrap a small
/// set of well-known library types that are never reachable as symbolic
/// source (the optional/collection capability markers and `byte[]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeClass<'n> {
    Void,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
    /// Recognized hot path: binary payload fields are common downstream.
    ByteArray,
    /// Any other class, identified by its canonical name.
    Named(&'n str),
}
