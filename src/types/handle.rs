use core::fmt::Display;

use crate::Vec;
use crate::symbols::Annotation;
use crate::types::array::ArrayClass;
use crate::types::declared::DeclaredClass;
use crate::types::error::ResolveError;
use crate::types::members::{Constructor, EnumConstant, Field, Method};
use crate::types::modifiers::Modifiers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    Char,
    Float,
    Double,
}

impl PrimitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }
}

/// The canonical in-memory representation of a type.
///
/// Handles are only ever obtained from a [`TypeFactory`], which guarantees
/// one instance per logical type and session; two handles describe the
/// same type iff they are pointer-identical (`core::ptr::eq`).
///
/// [`TypeFactory`]: crate::types::TypeFactory
pub enum TypeHandle<'a> {
    Void,
    Primitive(PrimitiveKind),
    Declared(DeclaredClass<'a>),
    Array(ArrayClass<'a>),
}

impl<'a> TypeHandle<'a> {
    /// The binary (identity) name. Arrays prefix their component's name
    /// with `[`, recursively.
    pub fn name(&self) -> &'a str {
        match self {
            TypeHandle::Void => "void",
            TypeHandle::Primitive(kind) => kind.name(),
            TypeHandle::Declared(class) => class.name(),
            TypeHandle::Array(array) => array.name(),
        }
    }

    pub fn simple_name(&self) -> &'a str {
        match self {
            TypeHandle::Void => "void",
            TypeHandle::Primitive(kind) => kind.name(),
            TypeHandle::Declared(class) => class.simple_name(),
            TypeHandle::Array(array) => array.simple_name(),
        }
    }

    /// Absent for non-addressable types (local and anonymous classes, and
    /// arrays of them).
    pub fn canonical_name(&self) -> Option<&'a str> {
        match self {
            TypeHandle::Void => Some("void"),
            TypeHandle::Primitive(kind) => Some(kind.name()),
            TypeHandle::Declared(class) => class.canonical_name(),
            TypeHandle::Array(array) => array.canonical_name(),
        }
    }

    /// Absent for primitives and void; arrays inherit their component's.
    pub fn package_name(&self) -> Option<&'a str> {
        match self {
            TypeHandle::Void | TypeHandle::Primitive(_) => None,
            TypeHandle::Declared(class) => class.package_name(),
            TypeHandle::Array(array) => array.package_name(),
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            TypeHandle::Void | TypeHandle::Primitive(_) | TypeHandle::Array(_) => {
                Modifiers::PUBLIC | Modifiers::FINAL
            }
            TypeHandle::Declared(class) => class.modifiers(),
        }
    }

    /// True for the eight primitive kinds; false for void.
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeHandle::Primitive(_))
    }

    pub fn is_enum(&self) -> bool {
        match self {
            TypeHandle::Declared(class) => class.is_enum(),
            _ => false,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, TypeHandle::Array(_))
    }

    /// True for local and anonymous classes.
    pub fn is_local(&self) -> bool {
        match self {
            TypeHandle::Declared(class) => class.is_local(),
            _ => false,
        }
    }

    /// The enum constants in declaration order, ordinals 0..N-1.
    pub fn enum_constants(&self) -> Result<&'a [&'a EnumConstant<'a>], ResolveError> {
        match self {
            TypeHandle::Declared(class) => class.enum_constants(),
            _ => Err(ResolveError::NotAnEnum {
                name: self.name().into(),
            }),
        }
    }

    pub fn component_type(&self) -> Result<&'a TypeHandle<'a>, ResolveError> {
        match self {
            TypeHandle::Array(array) => Ok(array.component_type()),
            _ => Err(ResolveError::NotAnArray {
                name: self.name().into(),
            }),
        }
    }

    /// Present only for declared types lexically nested inside another.
    pub fn enclosing_class(&self) -> Option<&'a TypeHandle<'a>> {
        match self {
            TypeHandle::Declared(class) => class.enclosing_class(),
            _ => None,
        }
    }

    /// Absent for root types and whenever the symbolic superclass
    /// reference is not itself a declared kind.
    pub fn superclass(&self) -> Option<&'a TypeHandle<'a>> {
        match self {
            TypeHandle::Declared(class) => class.superclass(),
            _ => None,
        }
    }

    pub fn interfaces(&self) -> Result<Vec<&'a TypeHandle<'a>>, ResolveError> {
        match self {
            TypeHandle::Declared(class) => class.interfaces(),
            _ => Ok(Vec::new()),
        }
    }

    /// Erasure-based assignability. Reflexive by canonical identity;
    /// primitives and void accept only themselves; arrays are covariant in
    /// their component; declared types walk the erased supertype closure.
    pub fn is_assignable_to(&self, other: &TypeHandle<'a>) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }
        match self {
            TypeHandle::Void | TypeHandle::Primitive(_) => false,
            TypeHandle::Declared(class) => class.assignable_to(other),
            TypeHandle::Array(array) => array.assignable_to(other),
        }
    }

    pub fn annotation(&self, name: &str) -> Option<&'a Annotation> {
        match self {
            TypeHandle::Declared(class) => class.annotation(name),
            _ => None,
        }
    }

    pub fn annotations_by_type(&self, name: &str) -> Vec<&'a Annotation> {
        match self {
            TypeHandle::Declared(class) => class.annotations_by_type(name),
            _ => Vec::new(),
        }
    }

    pub fn documentation(&self) -> Option<crate::String> {
        match self {
            TypeHandle::Declared(class) => class.documentation(),
            _ => None,
        }
    }

    /// Members textually declared on this type; empty for non-declared
    /// handles. Enum constants surface as fields linked to their constant
    /// handle.
    pub fn declared_fields(&self) -> Vec<&'a Field<'a>> {
        match self {
            TypeHandle::Declared(class) => class.declared_fields(),
            _ => Vec::new(),
        }
    }

    pub fn declared_methods(&self) -> Vec<&'a Method<'a>> {
        match self {
            TypeHandle::Declared(class) => class.declared_methods(),
            _ => Vec::new(),
        }
    }

    pub fn declared_constructors(&self) -> Vec<&'a Constructor<'a>> {
        match self {
            TypeHandle::Declared(class) => class.declared_constructors(),
            _ => Vec::new(),
        }
    }

    /// Strict overload lookup over all visible methods (inherited
    /// included): exact arity and per-parameter canonical identity, first
    /// match in enumeration order. No widening, boxing or variance.
    pub fn method(
        &self,
        name: &str,
        arg_types: &[&'a TypeHandle<'a>],
    ) -> Result<Option<&'a Method<'a>>, ResolveError> {
        match self {
            TypeHandle::Declared(class) => class.method(name, arg_types),
            _ => Ok(None),
        }
    }

    /// Strict overload lookup over declared constructors only.
    pub fn constructor(
        &self,
        arg_types: &[&'a TypeHandle<'a>],
    ) -> Result<Option<&'a Constructor<'a>>, ResolveError> {
        match self {
            TypeHandle::Declared(class) => class.constructor(arg_types),
            _ => Ok(None),
        }
    }

    pub fn as_declared(&self) -> Option<&DeclaredClass<'a>> {
        match self {
            TypeHandle::Declared(class) => Some(class),
            _ => None,
        }
    }
}

impl Display for TypeHandle<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl core::fmt::Debug for TypeHandle<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "TypeHandle({})", self.name())
    }
}
