use hashbrown::HashMap;

use crate::symbols::annotations::Annotation;
use crate::symbols::refs::TypeRef;
use crate::{String, ToString, Vec, vec};

/// Index of a declaration in its [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclId(pub(crate) u32);

/// Index of a member element in its [`SymbolTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    Interface,
    Enum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    TopLevel,
    Member,
    Local,
    Anonymous,
}

/// The symbolic modifier vocabulary of the host model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolModifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    /// Interface default-method marker; has no unified-bitmask counterpart.
    Default,
}

/// A class, interface or enum declaration as described by the host.
#[derive(Debug, Clone)]
pub struct Decl {
    pub qualified_name: String,
    pub binary_name: String,
    pub simple_name: String,
    pub package: Option<String>,
    pub kind: DeclKind,
    pub nesting: Nesting,
    pub modifiers: Vec<SymbolModifier>,
    pub enclosing: Option<DeclId>,
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    /// Member elements in declaration order.
    pub members: Vec<ElementId>,
    pub annotations: Vec<Annotation>,
}

impl Decl {
    pub fn class(qualified_name: &str) -> Decl {
        Decl::with_kind(qualified_name, DeclKind::Class)
    }

    pub fn interface(qualified_name: &str) -> Decl {
        Decl::with_kind(qualified_name, DeclKind::Interface)
    }

    pub fn enumeration(qualified_name: &str) -> Decl {
        Decl::with_kind(qualified_name, DeclKind::Enum)
    }

    fn with_kind(qualified_name: &str, kind: DeclKind) -> Decl {
        let (package, simple_name) = match qualified_name.rsplit_once('.') {
            Some((package, simple)) => (Some(package.to_string()), simple.to_string()),
            None => (None, qualified_name.to_string()),
        };
        Decl {
            qualified_name: qualified_name.to_string(),
            binary_name: qualified_name.to_string(),
            simple_name,
            package,
            kind,
            nesting: Nesting::TopLevel,
            modifiers: Vec::new(),
            enclosing: None,
            superclass: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: &[SymbolModifier]) -> Decl {
        self.modifiers = modifiers.to_vec();
        self
    }

    pub fn with_superclass(mut self, superclass: TypeRef) -> Decl {
        self.superclass = Some(superclass);
        self
    }

    pub fn with_interfaces(mut self, interfaces: Vec<TypeRef>) -> Decl {
        self.interfaces = interfaces;
        self
    }

    /// Marks the declaration as lexically nested inside `enclosing`.
    pub fn with_enclosing(mut self, enclosing: DeclId) -> Decl {
        self.enclosing = Some(enclosing);
        if self.nesting == Nesting::TopLevel {
            self.nesting = Nesting::Member;
        }
        self
    }

    pub fn with_nesting(mut self, nesting: Nesting) -> Decl {
        self.nesting = nesting;
        self
    }

    pub fn with_binary_name(mut self, binary_name: &str) -> Decl {
        self.binary_name = binary_name.to_string();
        self
    }

    pub fn with_package(mut self, package: Option<&str>) -> Decl {
        self.package = package.map(ToString::to_string);
        self
    }

    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Decl {
        self.annotations = annotations;
        self
    }
}

/// A formal parameter of a method or constructor.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
}

impl Param {
    pub fn new(name: &str, ty: TypeRef) -> Param {
        Param {
            name: name.to_string(),
            ty,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ElementKind {
    Field { ty: TypeRef },
    EnumConstant,
    Method { params: Vec<Param>, return_type: TypeRef },
    Constructor { params: Vec<Param> },
}

/// A member element, physically declared on exactly one [`Decl`].
#[derive(Debug, Clone)]
pub struct Element {
    pub owner: DeclId,
    pub name: String,
    pub kind: ElementKind,
    pub modifiers: Vec<SymbolModifier>,
    pub annotations: Vec<Annotation>,
}

impl Element {
    pub fn field(owner: DeclId, name: &str, ty: TypeRef) -> Element {
        Element::with_kind(owner, name, ElementKind::Field { ty })
    }

    pub fn enum_constant(owner: DeclId, name: &str) -> Element {
        Element::with_kind(owner, name, ElementKind::EnumConstant)
    }

    pub fn method(owner: DeclId, name: &str, params: Vec<Param>, return_type: TypeRef) -> Element {
        Element::with_kind(
            owner,
            name,
            ElementKind::Method {
                params,
                return_type,
            },
        )
    }

    pub fn constructor(owner: DeclId, params: Vec<Param>) -> Element {
        Element::with_kind(owner, "<init>", ElementKind::Constructor { params })
    }

    fn with_kind(owner: DeclId, name: &str, kind: ElementKind) -> Element {
        Element {
            owner,
            name: name.to_string(),
            kind,
            modifiers: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: &[SymbolModifier]) -> Element {
        self.modifiers = modifiers.to_vec();
        self
    }

    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Element {
        self.annotations = annotations;
        self
    }
}

/// Everything the host compiler knows about the declarations of one
/// processing session, assembled through [`SymbolTableBuilder`].
///
/// [`SymbolTableBuilder`]: crate::symbols::SymbolTableBuilder
#[derive(Debug, Default)]
pub struct SymbolTable {
    pub(crate) decls: Vec<Decl>,
    pub(crate) elements: Vec<Element>,
    pub(crate) by_name: HashMap<String, DeclId>,
}

impl SymbolTable {
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.0 as usize]
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0 as usize]
    }

    /// Looks a declaration up by its fully-qualified (canonical) name.
    pub fn lookup(&self, qualified_name: &str) -> Option<DeclId> {
        self.by_name.get(qualified_name).copied()
    }

    /// All members visible on `id`: its own members in declaration order,
    /// then those inherited from the superclass chain and interfaces.
    /// Constructors are never inherited, and inherited private members are
    /// not visible.
    pub fn all_members(&self, id: DeclId) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.walk_supertypes(id, |decl_id, decl| {
            for &member in &decl.members {
                if decl_id != id {
                    let element = self.element(member);
                    if matches!(element.kind, ElementKind::Constructor { .. })
                        || element.modifiers.contains(&SymbolModifier::Private)
                    {
                        continue;
                    }
                }
                out.push(member);
            }
            false
        });
        out
    }

    /// Erased assignability: true iff `to` appears in the reflexive
    /// supertype closure of `from`. Generic arguments are ignored.
    pub fn is_subtype(&self, from: DeclId, to: DeclId) -> bool {
        self.walk_supertypes(from, |decl_id, _| decl_id == to)
    }

    /// Breadth-first walk over the erased supertype closure of `start`,
    /// the type itself first. Stops early when `visit` returns true.
    fn walk_supertypes(&self, start: DeclId, mut visit: impl FnMut(DeclId, &Decl) -> bool) -> bool {
        let mut visited: Vec<DeclId> = Vec::new();
        let mut queue: Vec<DeclId> = vec![start];
        let mut next = 0;
        while next < queue.len() {
            let current = queue[next];
            next += 1;
            if visited.contains(&current) {
                continue;
            }
            visited.push(current);

            let decl = self.decl(current);
            if visit(current, decl) {
                return true;
            }
            if let Some(TypeRef::Declared { decl: superclass, .. }) = &decl.superclass {
                queue.push(*superclass);
            }
            for interface in &decl.interfaces {
                if let TypeRef::Declared { decl, .. } = interface {
                    queue.push(*decl);
                }
            }
        }
        false
    }
}
