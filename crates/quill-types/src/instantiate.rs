use std::collections::HashSet;

use crate::ids::{ClassId, TypeVarId};
use crate::store::TypeEnv;
use crate::subtyping::{interfaces_of, super_class_of};
use crate::ty::Type;

/// Derive how the ancestor `target` is instantiated when viewed through
/// `ty`.
///
/// Given `Foo<T> implements List<List<T>>` and `Bar extends Foo<String>`,
/// viewing `Bar` as `List` yields `List<List<String>>`: every supertype
/// edge crossed has the crossing use's bindings substituted in first.
///
/// Depth-first: the superclass edge is tried before the declared
/// interfaces, and interfaces in declaration order, first match wins.
/// Returns `None` when `target` is not an ancestor of `ty`.
pub fn base_class(env: &dyn TypeEnv, ty: &Type, target: ClassId) -> Option<Type> {
    let mut seen_vars = HashSet::new();
    derive(env, ty, target, &mut seen_vars)
}

fn derive(
    env: &dyn TypeEnv,
    ty: &Type,
    target: ClassId,
    seen_vars: &mut HashSet<TypeVarId>,
) -> Option<Type> {
    match ty {
        Type::Class(ct) => {
            if ct.class == target {
                return Some(ty.clone());
            }
            if let Some(sup) = super_class_of(env, ty) {
                if let Some(found) = derive(env, &sup, target, seen_vars) {
                    return Some(found);
                }
            }
            for iface in interfaces_of(env, ty) {
                if let Some(found) = derive(env, &iface, target, seen_vars) {
                    return Some(found);
                }
            }
            None
        }
        // Arrays are terminal: only the root is above them.
        Type::Array(_) => {
            (target == env.well_known().object).then(|| Type::class(target, Vec::new()))
        }
        Type::Var(v) => {
            if !seen_vars.insert(*v) {
                return None;
            }
            let bound = super_class_of(env, ty)?;
            derive(env, &bound, target, seen_vars)
        }
        Type::Null => None,
    }
}
