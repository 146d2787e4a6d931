use hashbrown::HashMap;

use crate::symbols::table::{Decl, DeclId, Element, ElementId, SymbolTable};
use crate::{String, Vec};

/// Incrementally assembles a [`SymbolTable`].
///
/// Declarations must be added before the elements they own; member order
/// in the finished table is the order of `add_member` calls, which the
/// host must keep equal to declaration order (enum ordinals depend on it).
#[derive(Debug, Default)]
pub struct SymbolTableBuilder {
    decls: Vec<Decl>,
    elements: Vec<Element>,
    by_name: HashMap<String, DeclId>,
}

impl SymbolTableBuilder {
    pub fn new() -> SymbolTableBuilder {
        SymbolTableBuilder::default()
    }

    /// Registers a declaration and indexes it by qualified name.
    pub fn add(&mut self, decl: Decl) -> DeclId {
        let id = DeclId(self.decls.len() as u32);
        self.by_name.insert(decl.qualified_name.clone(), id);
        self.decls.push(decl);
        id
    }

    /// Registers a member element and appends it to its owner's member
    /// list.
    pub fn add_member(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        self.decls[element.owner.0 as usize].members.push(id);
        self.elements.push(element);
        id
    }

    pub fn finish(self) -> SymbolTable {
        SymbolTable {
            decls: self.decls,
            elements: self.elements,
            by_name: self.by_name,
        }
    }
}
