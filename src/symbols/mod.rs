//! The symbolic universe consumed by the type resolver.
//!
//! A host compiler (or a test fixture) describes the declarations it is
//! processing as a [`SymbolTable`]: declarations, their member elements,
//! kind-tagged type references and annotations. The table is plain owned
//! data with no back-references into the handle layer; the resolver only
//! ever borrows it.

pub mod annotations;
pub mod builder;
pub mod refs;
pub mod table;

pub use annotations::{Annotation, DocJoiner, DocumentationExtractor};
pub use builder::SymbolTableBuilder;
pub use refs::{RuntimeClass, TypeRef};
pub use table::{
    Decl, DeclId, DeclKind, Element, ElementId, ElementKind, Nesting, Param, SymbolModifier,
    SymbolTable,
};
