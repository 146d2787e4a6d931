use crate::symbols::{Annotation, Element, ElementId, ElementKind, Param, TypeRef};
use crate::types::declared::DeclaredClass;
use crate::types::error::ResolveError;
use crate::types::factory::TypeFactory;
use crate::types::handle::TypeHandle;
use crate::types::modifiers::Modifiers;
use crate::{String, ToString, Vec};

fn declared_of<'a>(handle: &'a TypeHandle<'a>) -> &'a DeclaredClass<'a> {
    match handle {
        TypeHandle::Declared(class) => class,
        // members are only ever minted with a declared owner
        _ => unreachable!("member declared on a non-declared handle"),
    }
}

/// Unwraps the recognized optional wrapper: if `type_ref` resolves, by
/// canonical identity, to the optional handle and carries exactly one type
/// argument, that argument is substituted; otherwise the reference is
/// returned unchanged.
fn unwrap_optional<'a, 'r>(
    factory: &'a TypeFactory<'a>,
    type_ref: &'r TypeRef,
) -> Result<&'r TypeRef, ResolveError> {
    if let TypeRef::Declared { args, .. } = type_ref {
        if args.len() == 1 && core::ptr::eq(factory.resolve(type_ref)?, factory.optional_type()?) {
            return Ok(&args[0]);
        }
    }
    Ok(type_ref)
}

/// Repeated-element derivation: optional unwrap first, then the array
/// component, then the sole type argument of a collection-assignable
/// shape. Anything else is a caller contract violation.
fn repeated_element<'a>(
    factory: &'a TypeFactory<'a>,
    type_ref: &TypeRef,
) -> Result<&'a TypeHandle<'a>, ResolveError> {
    let type_ref = unwrap_optional(factory, type_ref)?;
    let resolved = factory.resolve(type_ref)?;
    if let TypeHandle::Array(array) = resolved {
        return Ok(array.component_type());
    }
    if resolved.is_assignable_to(factory.collection_type()?) {
        if let TypeRef::Declared { args, .. } = type_ref {
            if args.len() == 1 {
                return factory.resolve(&args[0]);
            }
        }
    }
    Err(ResolveError::NotRepeatable {
        name: resolved.name().to_string(),
    })
}

/// A method handle. Declared on exactly one type; the back-reference is
/// always the declaring type's canonical handle, even when the method was
/// looked up through a subtype.
pub struct Method<'a> {
    declaring: &'a TypeHandle<'a>,
    element: ElementId,
    modifiers: Modifiers,
}

impl<'a> Method<'a> {
    pub(crate) fn new(
        declaring: &'a TypeHandle<'a>,
        element: ElementId,
        modifiers: Modifiers,
    ) -> Method<'a> {
        Method {
            declaring,
            element,
            modifiers,
        }
    }

    fn factory(&self) -> &'a TypeFactory<'a> {
        declared_of(self.declaring).factory()
    }

    fn element_data(&self) -> &'a Element {
        self.factory().symbols().element(self.element)
    }

    fn signature(&self) -> (&'a [Param], &'a TypeRef) {
        match &self.element_data().kind {
            ElementKind::Method {
                params,
                return_type,
            } => (params, return_type),
            _ => unreachable!("method handle minted from a non-method element"),
        }
    }

    pub fn name(&self) -> &'a str {
        &self.element_data().name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn declaring_class(&self) -> &'a TypeHandle<'a> {
        self.declaring
    }

    pub fn element_id(&self) -> ElementId {
        self.element
    }

    pub fn parameter_count(&self) -> usize {
        self.signature().0.len()
    }

    pub fn parameter_names(&self) -> Vec<&'a str> {
        self.signature()
            .0
            .iter()
            .map(|param| param.name.as_str())
            .collect()
    }

    pub fn parameter_types(&self) -> Result<Vec<&'a TypeHandle<'a>>, ResolveError> {
        self.signature()
            .0
            .iter()
            .map(|param| self.factory().resolve(&param.ty))
            .collect()
    }

    pub fn return_type(&self) -> Result<&'a TypeHandle<'a>, ResolveError> {
        self.factory().resolve(self.signature().1)
    }

    /// The return type with the optional wrapper removed; identity when
    /// the return type is not the optional wrapper.
    pub fn optional_return_type(&self) -> Result<&'a TypeHandle<'a>, ResolveError> {
        let factory = self.factory();
        factory.resolve(unwrap_optional(factory, self.signature().1)?)
    }

    pub fn repeated_element_type(&self) -> Result<&'a TypeHandle<'a>, ResolveError> {
        repeated_element(self.factory(), self.signature().1)
    }

    pub fn annotation(&self, name: &str) -> Option<&'a Annotation> {
        self.element_data()
            .annotations
            .iter()
            .find(|annotation| annotation.name == name)
    }

    pub fn annotations_by_type(&self, name: &str) -> Vec<&'a Annotation> {
        self.element_data()
            .annotations
            .iter()
            .filter(|annotation| annotation.name == name)
            .collect()
    }

    pub fn documentation(&self) -> Option<String> {
        self.factory()
            .extract_documentation(&self.element_data().annotations)
    }
}

/// A constructor handle.
pub struct Constructor<'a> {
    declaring: &'a TypeHandle<'a>,
    element: ElementId,
    modifiers: Modifiers,
}

impl<'a> Constructor<'a> {
    pub(crate) fn new(
        declaring: &'a TypeHandle<'a>,
        element: ElementId,
        modifiers: Modifiers,
    ) -> Constructor<'a> {
        Constructor {
            declaring,
            element,
            modifiers,
        }
    }

    fn factory(&self) -> &'a TypeFactory<'a> {
        declared_of(self.declaring).factory()
    }

    fn element_data(&self) -> &'a Element {
        self.factory().symbols().element(self.element)
    }

    fn params(&self) -> &'a [Param] {
        match &self.element_data().kind {
            ElementKind::Constructor { params } => params,
            _ => unreachable!("constructor handle minted from a non-constructor element"),
        }
    }

    pub fn name(&self) -> &'a str {
        &self.element_data().name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn declaring_class(&self) -> &'a TypeHandle<'a> {
        self.declaring
    }

    pub fn element_id(&self) -> ElementId {
        self.element
    }

    pub fn parameter_count(&self) -> usize {
        self.params().len()
    }

    pub fn parameter_names(&self) -> Vec<&'a str> {
        self.params()
            .iter()
            .map(|param| param.name.as_str())
            .collect()
    }

    pub fn parameter_types(&self) -> Result<Vec<&'a TypeHandle<'a>>, ResolveError> {
        self.params()
            .iter()
            .map(|param| self.factory().resolve(&param.ty))
            .collect()
    }

    pub fn annotation(&self, name: &str) -> Option<&'a Annotation> {
        self.element_data()
            .annotations
            .iter()
            .find(|annotation| annotation.name == name)
    }

    pub fn annotations_by_type(&self, name: &str) -> Vec<&'a Annotation> {
        self.element_data()
            .annotations
            .iter()
            .filter(|annotation| annotation.name == name)
            .collect()
    }

    /// Constructors never carry documentation.
    pub fn documentation(&self) -> Option<String> {
        None
    }
}

/// A field handle. A field element of enum-constant kind also links to the
/// constant handle captured eagerly on its declaring enum.
pub struct Field<'a> {
    declaring: &'a TypeHandle<'a>,
    element: ElementId,
    modifiers: Modifiers,
    enum_constant: Option<&'a EnumConstant<'a>>,
}

impl<'a> Field<'a> {
    pub(crate) fn new(
        declaring: &'a TypeHandle<'a>,
        element: ElementId,
        modifiers: Modifiers,
        enum_constant: Option<&'a EnumConstant<'a>>,
    ) -> Field<'a> {
        Field {
            declaring,
            element,
            modifiers,
            enum_constant,
        }
    }

    fn factory(&self) -> &'a TypeFactory<'a> {
        declared_of(self.declaring).factory()
    }

    fn element_data(&self) -> &'a Element {
        self.factory().symbols().element(self.element)
    }

    /// `None` for enum-constant fields; their type is the declaring enum
    /// itself and exists only as a handle.
    fn type_ref(&self) -> Option<&'a TypeRef> {
        match &self.element_data().kind {
            ElementKind::Field { ty } => Some(ty),
            ElementKind::EnumConstant => None,
            _ => unreachable!("field handle minted from a non-field element"),
        }
    }

    pub fn name(&self) -> &'a str {
        &self.element_data().name
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn declaring_class(&self) -> &'a TypeHandle<'a> {
        self.declaring
    }

    pub fn element_id(&self) -> ElementId {
        self.element
    }

    pub fn field_type(&self) -> Result<&'a TypeHandle<'a>, ResolveError> {
        match self.type_ref() {
            Some(ty) => self.factory().resolve(ty),
            None => Ok(self.declaring),
        }
    }

    /// The field type with the optional wrapper removed; identity when the
    /// field type is not the optional wrapper.
    pub fn optional_type(&self) -> Result<&'a TypeHandle<'a>, ResolveError> {
        match self.type_ref() {
            Some(ty) => {
                let factory = self.factory();
                factory.resolve(unwrap_optional(factory, ty)?)
            }
            None => Ok(self.declaring),
        }
    }

    pub fn repeated_element_type(&self) -> Result<&'a TypeHandle<'a>, ResolveError> {
        match self.type_ref() {
            Some(ty) => repeated_element(self.factory(), ty),
            None => Err(ResolveError::NotRepeatable {
                name: self.declaring.name().to_string(),
            }),
        }
    }

    pub fn is_enum_constant(&self) -> bool {
        self.enum_constant.is_some()
    }

    pub fn as_enum_constant(&self) -> Result<&'a EnumConstant<'a>, ResolveError> {
        self.enum_constant
            .ok_or_else(|| ResolveError::NotAnEnumConstant {
                name: self.name().to_string(),
            })
    }

    pub fn annotation(&self, name: &str) -> Option<&'a Annotation> {
        self.element_data()
            .annotations
            .iter()
            .find(|annotation| annotation.name == name)
    }

    pub fn annotations_by_type(&self, name: &str) -> Vec<&'a Annotation> {
        self.element_data()
            .annotations
            .iter()
            .filter(|annotation| annotation.name == name)
            .collect()
    }

    pub fn documentation(&self) -> Option<String> {
        self.factory()
            .extract_documentation(&self.element_data().annotations)
    }
}

/// An enum constant handle. Ordinals are assigned once, in declaration
/// order, when the declaring enum enters the canonical cache, and never
/// change afterwards.
pub struct EnumConstant<'a> {
    declaring: &'a TypeHandle<'a>,
    element: ElementId,
    ordinal: u32,
    modifiers: Modifiers,
}

impl<'a> EnumConstant<'a> {
    pub(crate) fn new(
        declaring: &'a TypeHandle<'a>,
        element: ElementId,
        ordinal: u32,
        modifiers: Modifiers,
    ) -> EnumConstant<'a> {
        EnumConstant {
            declaring,
            element,
            ordinal,
            modifiers,
        }
    }

    fn factory(&self) -> &'a TypeFactory<'a> {
        declared_of(self.declaring).factory()
    }

    fn element_data(&self) -> &'a Element {
        self.factory().symbols().element(self.element)
    }

    pub fn name(&self) -> &'a str {
        &self.element_data().name
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn declaring_class(&self) -> &'a TypeHandle<'a> {
        self.declaring
    }

    pub fn element_id(&self) -> ElementId {
        self.element
    }

    pub fn annotation(&self, name: &str) -> Option<&'a Annotation> {
        self.element_data()
            .annotations
            .iter()
            .find(|annotation| annotation.name == name)
    }

    pub fn annotations_by_type(&self, name: &str) -> Vec<&'a Annotation> {
        self.element_data()
            .annotations
            .iter()
            .filter(|annotation| annotation.name == name)
            .collect()
    }

    pub fn documentation(&self) -> Option<String> {
        self.factory()
            .extract_documentation(&self.element_data().annotations)
    }
}
