use crate::types::handle::TypeHandle;

/// An array type handle. Identity derives recursively from the component:
/// the name is the component's name prefixed with `[`, so multi-dimensional
/// arrays intern uniformly through the same cache.
pub struct ArrayClass<'a> {
    component: &'a TypeHandle<'a>,
    name: &'a str,
    simple_name: &'a str,
    canonical_name: Option<&'a str>,
}

impl<'a> ArrayClass<'a> {
    pub(crate) fn new(
        component: &'a TypeHandle<'a>,
        name: &'a str,
        simple_name: &'a str,
        canonical_name: Option<&'a str>,
    ) -> ArrayClass<'a> {
        ArrayClass {
            component,
            name,
            simple_name,
            canonical_name,
        }
    }

    /// The canonically cached element handle.
    pub fn component_type(&self) -> &'a TypeHandle<'a> {
        self.component
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn simple_name(&self) -> &'a str {
        self.simple_name
    }

    pub fn canonical_name(&self) -> Option<&'a str> {
        self.canonical_name
    }

    pub fn package_name(&self) -> Option<&'a str> {
        self.component.package_name()
    }

    /// Covariant array typing: assignable only to another array whose
    /// component the component is assignable to.
    pub(crate) fn assignable_to(&self, other: &TypeHandle<'a>) -> bool {
        match other {
            TypeHandle::Array(other) => self.component.is_assignable_to(other.component_type()),
            _ => false,
        }
    }
}
