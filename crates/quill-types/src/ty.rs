use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeModelError};
use crate::ids::{ClassId, TypeVarId};

/// A use of a named class or interface, possibly parameterized.
///
/// Empty `args` is the raw (unparameterized) use; the erasure of any use of
/// `class` is the raw use of `class`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassType {
    pub class: ClassId,
    pub args: Vec<Type>,
}

/// A use of a reference type.
///
/// This represents how a type appears at a use site (a field's declared type,
/// a supertype edge, a type argument), not the declaration itself; the
/// declaration lives in the [`crate::TypeStore`] behind a [`ClassId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// A named class or interface, raw or parameterized.
    Class(ClassType),
    /// An array of the component type. The component sits behind an `Arc` so
    /// the store's per-component cache hands out one shared instance.
    Array(Arc<Type>),
    /// A declared type parameter.
    Var(TypeVarId),
    /// The type of the `null` literal, assignable to every reference type.
    Null,
}

impl Type {
    pub fn class(class: ClassId, args: Vec<Type>) -> Self {
        Type::Class(ClassType { class, args })
    }

    pub fn array(component: Type) -> Self {
        Type::Array(Arc::new(component))
    }

    /// The unparameterized form of this type: the raw use for a
    /// parameterized class, the type itself for everything else.
    pub fn erasure(&self) -> Type {
        match self {
            Type::Class(ct) if !ct.args.is_empty() => Type::class(ct.class, Vec::new()),
            other => other.clone(),
        }
    }

    /// Whether this type differs from its own erasure.
    pub fn is_parameterized(&self) -> bool {
        matches!(self, Type::Class(ct) if !ct.args.is_empty())
    }

    /// The type argument at `index` of a parameterized use.
    pub fn type_argument(&self, index: usize) -> Result<&Type> {
        match self {
            Type::Class(ct) if !ct.args.is_empty() => {
                ct.args.get(index).ok_or(TypeModelError::NotParameterized)
            }
            _ => Err(TypeModelError::NotParameterized),
        }
    }

    /// The erased class behind this use, if it is a (possibly parameterized)
    /// named type.
    pub fn as_class(&self) -> Option<ClassId> {
        match self {
            Type::Class(ct) => Some(ct.class),
            _ => None,
        }
    }
}
