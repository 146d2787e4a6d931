//! The unification core: one canonical, arena-interned handle per logical
//! type, bridging the symbolic and runtime descriptions.

pub mod array;
pub mod declared;
pub mod error;
pub mod factory;
pub mod handle;
pub mod members;
pub mod modifiers;

#[cfg(test)]
mod members_test;

pub use array::ArrayClass;
pub use declared::DeclaredClass;
pub use error::ResolveError;
pub use factory::{FactoryOptions, TypeFactory};
pub use handle::{PrimitiveKind, TypeHandle};
pub use members::{Constructor, EnumConstant, Field, Method};
pub use modifiers::{Modifiers, translate};
