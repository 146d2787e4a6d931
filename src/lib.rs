#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Unifies two heterogeneous descriptions of program types — a symbolic
//! compile-time model and a reflective runtime description — into one
//! canonical, pointer-identity "type handle" graph consumed by a schema /
//! code-generation pipeline.
//!
//! All handles for one processing session are interned in a single
//! [`bumpalo::Bump`] arena owned by the caller; resolving the same logical
//! type twice yields the identical `&TypeHandle`, so downstream code may
//! compare handles with `core::ptr::eq`.

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod symbols;
pub mod types;

pub use types::{
    ArrayClass, Constructor, DeclaredClass, EnumConstant, FactoryOptions, Field, Method,
    Modifiers, PrimitiveKind, ResolveError, TypeFactory, TypeHandle,
};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
