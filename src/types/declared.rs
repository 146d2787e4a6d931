use core::cell::{OnceCell, RefCell};

use bumpalo::Bump;
use hashbrown::{DefaultHashBuilder, HashMap};

use crate::symbols::{Annotation, Decl, DeclId, DeclKind, ElementId, ElementKind, Nesting, Param};
use crate::types::error::ResolveError;
use crate::types::factory::TypeFactory;
use crate::types::handle::TypeHandle;
use crate::types::members::{Constructor, EnumConstant, Field, Method};
use crate::types::modifiers::Modifiers;
use crate::{String, Vec};

type MemberCache<'a, M> = RefCell<HashMap<ElementId, &'a M, DefaultHashBuilder, &'a Bump>>;

/// A class, interface or enum handle.
///
/// Names and structure come from the symbol table; members are interned
/// lazily into append-only per-declaring-type caches, so a member looked
/// up through a subtype is the same handle as one looked up through its
/// declaring type.
pub struct DeclaredClass<'a> {
    factory: &'a TypeFactory<'a>,
    decl: DeclId,
    modifiers: Modifiers,
    /// Set once, right after cache insertion, for enum declarations only.
    enum_constants: OnceCell<&'a [&'a EnumConstant<'a>]>,
    pub(crate) fields: MemberCache<'a, Field<'a>>,
    pub(crate) methods: MemberCache<'a, Method<'a>>,
    pub(crate) constructors: MemberCache<'a, Constructor<'a>>,
}

impl<'a> DeclaredClass<'a> {
    pub(crate) fn new(
        factory: &'a TypeFactory<'a>,
        decl: DeclId,
        modifiers: Modifiers,
        arena: &'a Bump,
    ) -> DeclaredClass<'a> {
        DeclaredClass {
            factory,
            decl,
            modifiers,
            enum_constants: OnceCell::new(),
            fields: RefCell::new(HashMap::new_in(arena)),
            methods: RefCell::new(HashMap::new_in(arena)),
            constructors: RefCell::new(HashMap::new_in(arena)),
        }
    }

    fn decl_data(&self) -> &'a Decl {
        self.factory.symbols().decl(self.decl)
    }

    pub(crate) fn factory(&self) -> &'a TypeFactory<'a> {
        self.factory
    }

    /// The underlying symbolic declaration, for collaborators that need to
    /// correlate handles back to the host model.
    pub fn decl_id(&self) -> DeclId {
        self.decl
    }

    pub fn name(&self) -> &'a str {
        &self.decl_data().binary_name
    }

    pub fn simple_name(&self) -> &'a str {
        &self.decl_data().simple_name
    }

    pub fn canonical_name(&self) -> Option<&'a str> {
        if self.is_local() {
            None
        } else {
            Some(&self.decl_data().qualified_name)
        }
    }

    pub fn package_name(&self) -> Option<&'a str> {
        self.decl_data().package.as_deref()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn is_enum(&self) -> bool {
        self.decl_data().kind == DeclKind::Enum
    }

    pub fn is_local(&self) -> bool {
        matches!(self.decl_data().nesting, Nesting::Local | Nesting::Anonymous)
    }

    pub(crate) fn init_enum_constants(&self, constants: &'a [&'a EnumConstant<'a>]) {
        let _ = self.enum_constants.set(constants);
    }

    pub fn enum_constants(&self) -> Result<&'a [&'a EnumConstant<'a>], ResolveError> {
        if !self.is_enum() {
            return Err(ResolveError::NotAnEnum {
                name: self.name().into(),
            });
        }
        // Captured eagerly when the handle entered the cache.
        Ok(self.enum_constants.get().copied().unwrap_or(&[]))
    }

    pub(crate) fn enum_constant_for(&self, element: ElementId) -> Option<&'a EnumConstant<'a>> {
        let constants = self.enum_constants.get().copied().unwrap_or(&[]);
        constants
            .iter()
            .copied()
            .find(|constant| constant.element_id() == element)
    }

    pub fn enclosing_class(&self) -> Option<&'a TypeHandle<'a>> {
        self.decl_data()
            .enclosing
            .map(|enclosing| self.factory.declared(enclosing))
    }

    pub fn superclass(&self) -> Option<&'a TypeHandle<'a>> {
        match &self.decl_data().superclass {
            Some(crate::symbols::TypeRef::Declared { decl, .. }) => {
                Some(self.factory.declared(*decl))
            }
            _ => None,
        }
    }

    pub fn interfaces(&self) -> Result<Vec<&'a TypeHandle<'a>>, ResolveError> {
        self.decl_data()
            .interfaces
            .iter()
            .map(|interface| self.factory.resolve(interface))
            .collect()
    }

    /// Erased assignability; a declared source never satisfies a
    /// primitive, void or array target.
    pub(crate) fn assignable_to(&self, other: &TypeHandle<'a>) -> bool {
        match other {
            TypeHandle::Declared(other) => {
                self.factory.symbols().is_subtype(self.decl, other.decl)
            }
            _ => false,
        }
    }

    pub fn annotation(&self, name: &str) -> Option<&'a Annotation> {
        self.decl_data()
            .annotations
            .iter()
            .find(|annotation| annotation.name == name)
    }

    pub fn annotations_by_type(&self, name: &str) -> Vec<&'a Annotation> {
        self.decl_data()
            .annotations
            .iter()
            .filter(|annotation| annotation.name == name)
            .collect()
    }

    pub fn documentation(&self) -> Option<String> {
        self.factory
            .extract_documentation(&self.decl_data().annotations)
    }

    pub fn declared_fields(&self) -> Vec<&'a Field<'a>> {
        self.declared_members(|kind| {
            matches!(kind, ElementKind::Field { .. } | ElementKind::EnumConstant)
        })
            .map(|member| self.factory.intern_field(member))
            .collect()
    }

    pub fn declared_methods(&self) -> Vec<&'a Method<'a>> {
        self.declared_members(|kind| matches!(kind, ElementKind::Method { .. }))
            .map(|member| self.factory.intern_method(member))
            .collect()
    }

    pub fn declared_constructors(&self) -> Vec<&'a Constructor<'a>> {
        self.declared_members(|kind| matches!(kind, ElementKind::Constructor { .. }))
            .map(|member| self.factory.intern_constructor(member))
            .collect()
    }

    fn declared_members(
        &self,
        matches: impl Fn(&ElementKind) -> bool + 'a,
    ) -> impl Iterator<Item = ElementId> + 'a {
        let factory = self.factory;
        self.decl_data()
            .members
            .iter()
            .copied()
            .filter(move |&member| matches(&factory.symbols().element(member).kind))
    }

    pub fn method(
        &self,
        name: &str,
        arg_types: &[&'a TypeHandle<'a>],
    ) -> Result<Option<&'a Method<'a>>, ResolveError> {
        for member in self.factory.symbols().all_members(self.decl) {
            let element = self.factory.symbols().element(member);
            let ElementKind::Method { params, .. } = &element.kind else {
                continue;
            };
            if element.name != name {
                continue;
            }
            if self.params_match(params, arg_types)? {
                return Ok(Some(self.factory.intern_method(member)));
            }
        }
        Ok(None)
    }

    pub fn constructor(
        &self,
        arg_types: &[&'a TypeHandle<'a>],
    ) -> Result<Option<&'a Constructor<'a>>, ResolveError> {
        for member in self.decl_data().members.iter().copied() {
            let element = self.factory.symbols().element(member);
            let ElementKind::Constructor { params } = &element.kind else {
                continue;
            };
            if self.params_match(params, arg_types)? {
                return Ok(Some(self.factory.intern_constructor(member)));
            }
        }
        Ok(None)
    }

    /// Exact arity plus per-parameter canonical identity, in order.
    fn params_match(
        &self,
        params: &[Param],
        arg_types: &[&'a TypeHandle<'a>],
    ) -> Result<bool, ResolveError> {
        if params.len() != arg_types.len() {
            return Ok(false);
        }
        for (param, &wanted) in params.iter().zip(arg_types) {
            if !core::ptr::eq(self.factory.resolve(&param.ty)?, wanted) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
