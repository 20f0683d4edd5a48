//! Reference-type model for Quill's source code generator.
//!
//! This crate models *uses* of reference types in the generated language:
//! named classes and interfaces, arrays, type variables, parameterized
//! instantiations and the null type. Declarations are interned in a
//! [`TypeStore`]; the algebra over uses — [`is_assignable`], [`base_class`],
//! [`substitute`], narrowing, erasure — lives in free functions over the
//! [`TypeEnv`] seam so the recursion over the closed set of variants stays
//! in one place.
//!
//! The model is append-only within one generation session: registration is
//! a single-writer phase (`&mut self`), and every query is a pure,
//! synchronous graph walk over `&self`, bounded because registration
//! rejects cyclic inheritance outright.

mod builtins;
mod error;
mod ids;
mod instantiate;
mod store;
mod subst;
mod subtyping;
mod ty;

pub mod format;

pub use builtins::{PrimitiveType, WellKnownTypes};
pub use error::{Result, TypeModelError};
pub use ids::{ClassId, TypeVarId};
pub use instantiate::base_class;
pub use store::{ClassDef, ClassKind, TypeEnv, TypeParamDef, TypeStore};
pub use subst::{class_bindings, substitute, Subst};
pub use subtyping::{interfaces_of, is_assignable, is_interface, super_class_of};
pub use ty::{ClassType, Type};
