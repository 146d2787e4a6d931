use core::cell::{OnceCell, RefCell};

use bumpalo::Bump;
use hashbrown::{DefaultHashBuilder, HashMap};
use tracing::trace;

use crate::symbols::{
    Annotation, Decl, DeclId, DeclKind, DocumentationExtractor, ElementId, ElementKind,
    RuntimeClass, SymbolTable, TypeRef,
};
use crate::types::array::ArrayClass;
use crate::types::declared::DeclaredClass;
use crate::types::error::ResolveError;
use crate::types::handle::{PrimitiveKind, TypeHandle};
use crate::types::members::{Constructor, EnumConstant, Field, Method};
use crate::types::modifiers;
use crate::{String, ToString, Vec, format};

/// Names the factory needs to recognize among the host's declarations:
/// the optional wrapper and collection marker used by the semantic
/// derivations, and the annotation carrying documentation text.
#[derive(Debug, Clone)]
pub struct FactoryOptions {
    pub optional_wrapper: String,
    pub collection_marker: String,
    pub doc_annotation: String,
}

impl Default for FactoryOptions {
    fn default() -> FactoryOptions {
        FactoryOptions {
            optional_wrapper: "java.util.Optional".to_string(),
            collection_marker: "java.util.Collection".to_string(),
            doc_annotation: "Doc".to_string(),
        }
    }
}

/// The session-scoped canonical cache and resolver.
///
/// Every handle is allocated exactly once into the caller's arena and
/// keyed by its identity name, so resolving the same logical type through
/// any entry point (`resolve`, `from_runtime_class`, `from_name`,
/// `array_of`) yields the identical reference. Single-threaded by
/// construction; the interior `RefCell`s are never held across calls back
/// into the factory.
pub struct TypeFactory<'a> {
    arena: &'a Bump,
    symbols: &'a SymbolTable,
    options: FactoryOptions,
    extractor: &'a dyn DocumentationExtractor,
    /// Identity name (binary name; `[` + component name for arrays) to
    /// canonical handle.
    cache: RefCell<HashMap<&'a str, &'a TypeHandle<'a>, DefaultHashBuilder, &'a Bump>>,
    void_type: &'a TypeHandle<'a>,
    boolean_type: &'a TypeHandle<'a>,
    byte_type: &'a TypeHandle<'a>,
    short_type: &'a TypeHandle<'a>,
    int_type: &'a TypeHandle<'a>,
    long_type: &'a TypeHandle<'a>,
    char_type: &'a TypeHandle<'a>,
    float_type: &'a TypeHandle<'a>,
    double_type: &'a TypeHandle<'a>,
    optional: OnceCell<&'a TypeHandle<'a>>,
    collection: OnceCell<&'a TypeHandle<'a>>,
}

impl<'a> TypeFactory<'a> {
    pub fn new(
        arena: &'a Bump,
        symbols: &'a SymbolTable,
        options: FactoryOptions,
        extractor: &'a dyn DocumentationExtractor,
    ) -> &'a TypeFactory<'a> {
        arena.alloc(TypeFactory {
            arena,
            symbols,
            options,
            extractor,
            cache: RefCell::new(HashMap::new_in(arena)),
            void_type: arena.alloc(TypeHandle::Void),
            boolean_type: arena.alloc(TypeHandle::Primitive(PrimitiveKind::Boolean)),
            byte_type: arena.alloc(TypeHandle::Primitive(PrimitiveKind::Byte)),
            short_type: arena.alloc(TypeHandle::Primitive(PrimitiveKind::Short)),
            int_type: arena.alloc(TypeHandle::Primitive(PrimitiveKind::Int)),
            long_type: arena.alloc(TypeHandle::Primitive(PrimitiveKind::Long)),
            char_type: arena.alloc(TypeHandle::Primitive(PrimitiveKind::Char)),
            float_type: arena.alloc(TypeHandle::Primitive(PrimitiveKind::Float)),
            double_type: arena.alloc(TypeHandle::Primitive(PrimitiveKind::Double)),
            optional: OnceCell::new(),
            collection: OnceCell::new(),
        })
    }

    pub fn symbols(&self) -> &'a SymbolTable {
        self.symbols
    }

    pub fn void_type(&self) -> &'a TypeHandle<'a> {
        self.void_type
    }

    pub fn primitive(&self, kind: PrimitiveKind) -> &'a TypeHandle<'a> {
        match kind {
            PrimitiveKind::Boolean => self.boolean_type,
            PrimitiveKind::Byte => self.byte_type,
            PrimitiveKind::Short => self.short_type,
            PrimitiveKind::Int => self.int_type,
            PrimitiveKind::Long => self.long_type,
            PrimitiveKind::Char => self.char_type,
            PrimitiveKind::Float => self.float_type,
            PrimitiveKind::Double => self.double_type,
        }
    }

    /// Resolves a symbolic reference to its canonical handle. Generic
    /// arguments are erased: `List<String>` and `List<Integer>` resolve to
    /// the same handle.
    pub fn resolve(&'a self, type_ref: &TypeRef) -> Result<&'a TypeHandle<'a>, ResolveError> {
        match type_ref {
            TypeRef::Void => Ok(self.void_type),
            TypeRef::Boolean => Ok(self.boolean_type),
            TypeRef::Byte => Ok(self.byte_type),
            TypeRef::Short => Ok(self.short_type),
            TypeRef::Int => Ok(self.int_type),
            TypeRef::Long => Ok(self.long_type),
            TypeRef::Char => Ok(self.char_type),
            TypeRef::Float => Ok(self.float_type),
            TypeRef::Double => Ok(self.double_type),
            TypeRef::Declared { decl, .. } => Ok(self.declared(*decl)),
            TypeRef::Array(component) => Ok(self.array_of(self.resolve(component)?)),
            TypeRef::Error(name) => Err(ResolveError::Unresolved { name: name.clone() }),
            other => Err(ResolveError::UnsupportedKind {
                kind: other.kind_name(),
            }),
        }
    }

    /// Resolves a runtime class description to its canonical handle.
    pub fn from_runtime_class(
        &'a self,
        class: RuntimeClass<'_>,
    ) -> Result<&'a TypeHandle<'a>, ResolveError> {
        match class {
            RuntimeClass::Void => Ok(self.void_type),
            RuntimeClass::Boolean => Ok(self.boolean_type),
            RuntimeClass::Byte => Ok(self.byte_type),
            RuntimeClass::Short => Ok(self.short_type),
            RuntimeClass::Int => Ok(self.int_type),
            RuntimeClass::Long => Ok(self.long_type),
            RuntimeClass::Char => Ok(self.char_type),
            RuntimeClass::Float => Ok(self.float_type),
            RuntimeClass::Double => Ok(self.double_type),
            // binary payload fields are common downstream; skip the name
            // round-trip
            RuntimeClass::ByteArray => Ok(self.array_of(self.byte_type)),
            RuntimeClass::Named(name) => self.from_name(name),
        }
    }

    /// Resolves a canonical name: the nine primitive/void spellings map to
    /// the singletons, anything else must be a known declaration.
    pub fn from_name(&'a self, name: &str) -> Result<&'a TypeHandle<'a>, ResolveError> {
        match name {
            "void" => Ok(self.void_type),
            "boolean" => Ok(self.boolean_type),
            "byte" => Ok(self.byte_type),
            "short" => Ok(self.short_type),
            "int" => Ok(self.int_type),
            "long" => Ok(self.long_type),
            "char" => Ok(self.char_type),
            "float" => Ok(self.float_type),
            "double" => Ok(self.double_type),
            _ => {
                let id = self
                    .symbols
                    .lookup(name)
                    .ok_or_else(|| ResolveError::NotFound {
                        name: name.to_string(),
                    })?;
                Ok(self.declared(id))
            }
        }
    }

    /// The canonical handle for a declaration. Infallible: the id proves
    /// the declaration exists.
    pub fn declared(&'a self, id: DeclId) -> &'a TypeHandle<'a> {
        let decl = self.symbols.decl(id);
        if let Some(&handle) = self.cache.borrow().get(decl.qualified_name.as_str()) {
            return handle;
        }
        trace!(name = %decl.qualified_name, "interning declared type");
        let handle = &*self.arena.alloc(TypeHandle::Declared(DeclaredClass::new(
            self,
            id,
            modifiers::translate(&decl.modifiers),
            self.arena,
        )));
        self.cache
            .borrow_mut()
            .insert(decl.qualified_name.as_str(), handle);
        // Constant handles reference the enum handle, so they are captured
        // only once it is reachable through the cache.
        if decl.kind == DeclKind::Enum {
            self.capture_enum_constants(handle, decl);
        }
        handle
    }

    /// The canonical array handle over a canonical component. Identity is
    /// the component's name prefixed with `[`, so nested calls intern each
    /// dimension exactly once.
    pub fn array_of(&'a self, component: &'a TypeHandle<'a>) -> &'a TypeHandle<'a> {
        let key = format!("[{}", component.name());
        if let Some(&handle) = self.cache.borrow().get(key.as_str()) {
            return handle;
        }
        trace!(name = %key, "interning array type");
        let name = &*self.arena.alloc_str(&key);
        let simple_name = &*self
            .arena
            .alloc_str(&format!("{}[]", component.simple_name()));
        let canonical_name = component
            .canonical_name()
            .map(|canonical| &*self.arena.alloc_str(&format!("{canonical}[]")));
        let handle = &*self.arena.alloc(TypeHandle::Array(ArrayClass::new(
            component,
            name,
            simple_name,
            canonical_name,
        )));
        self.cache.borrow_mut().insert(name, handle);
        handle
    }

    /// The handle of the configured optional wrapper, resolved on first
    /// use. Fails if the host never declared it.
    pub fn optional_type(&'a self) -> Result<&'a TypeHandle<'a>, ResolveError> {
        if let Some(&handle) = self.optional.get() {
            return Ok(handle);
        }
        let handle = self.from_name(&self.options.optional_wrapper)?;
        let _ = self.optional.set(handle);
        Ok(handle)
    }

    /// The handle of the configured collection marker, resolved on first
    /// use.
    pub fn collection_type(&'a self) -> Result<&'a TypeHandle<'a>, ResolveError> {
        if let Some(&handle) = self.collection.get() {
            return Ok(handle);
        }
        let handle = self.from_name(&self.options.collection_marker)?;
        let _ = self.collection.set(handle);
        Ok(handle)
    }

    fn capture_enum_constants(&'a self, handle: &'a TypeHandle<'a>, decl: &'a Decl) {
        let TypeHandle::Declared(class) = handle else {
            unreachable!("enum constants captured on a non-declared handle")
        };
        let mut constants: Vec<&'a EnumConstant<'a>> = Vec::new();
        for &member in &decl.members {
            let element = self.symbols.element(member);
            if !matches!(element.kind, ElementKind::EnumConstant) {
                continue;
            }
            let constant = &*self.arena.alloc(EnumConstant::new(
                handle,
                member,
                constants.len() as u32,
                modifiers::translate(&element.modifiers),
            ));
            constants.push(constant);
        }
        class.init_enum_constants(self.arena.alloc_slice_copy(&constants));
    }

    /// Interns a method handle on its declaring type's cache, so lookups
    /// through any subtype return the same handle.
    pub(crate) fn intern_method(&'a self, element: ElementId) -> &'a Method<'a> {
        let data = self.symbols.element(element);
        let handle = self.declared(data.owner);
        let TypeHandle::Declared(class) = handle else {
            unreachable!("member owner interned as a non-declared handle")
        };
        if let Some(&method) = class.methods.borrow().get(&element) {
            return method;
        }
        let method = &*self.arena.alloc(Method::new(
            handle,
            element,
            modifiers::translate(&data.modifiers),
        ));
        class.methods.borrow_mut().insert(element, method);
        method
    }

    pub(crate) fn intern_constructor(&'a self, element: ElementId) -> &'a Constructor<'a> {
        let data = self.symbols.element(element);
        let handle = self.declared(data.owner);
        let TypeHandle::Declared(class) = handle else {
            unreachable!("member owner interned as a non-declared handle")
        };
        if let Some(&constructor) = class.constructors.borrow().get(&element) {
            return constructor;
        }
        let constructor = &*self.arena.alloc(Constructor::new(
            handle,
            element,
            modifiers::translate(&data.modifiers),
        ));
        class.constructors.borrow_mut().insert(element, constructor);
        constructor
    }

    pub(crate) fn intern_field(&'a self, element: ElementId) -> &'a Field<'a> {
        let data = self.symbols.element(element);
        let handle = self.declared(data.owner);
        let TypeHandle::Declared(class) = handle else {
            unreachable!("member owner interned as a non-declared handle")
        };
        if let Some(&field) = class.fields.borrow().get(&element) {
            return field;
        }
        // enum constants surface as fields, linked to the constant handle
        // captured when the enum was interned
        let enum_constant = match data.kind {
            ElementKind::EnumConstant => class.enum_constant_for(element),
            _ => None,
        };
        let field = &*self.arena.alloc(Field::new(
            handle,
            element,
            modifiers::translate(&data.modifiers),
            enum_constant,
        ));
        class.fields.borrow_mut().insert(element, field);
        field
    }

    /// Filters for the configured documentation annotation and delegates
    /// the formatting to the extractor. Absent annotations yield `None`
    /// without consulting the extractor.
    pub(crate) fn extract_documentation(&self, annotations: &[Annotation]) -> Option<String> {
        let docs: Vec<&Annotation> = annotations
            .iter()
            .filter(|annotation| annotation.name == self.options.doc_annotation)
            .collect();
        if docs.is_empty() {
            return None;
        }
        self.extractor.documentation(&docs)
    }
}
