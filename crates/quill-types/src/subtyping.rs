use std::collections::HashSet;

use crate::ids::TypeVarId;
use crate::store::{ClassKind, TypeEnv};
use crate::subst::{class_bindings, substitute};
use crate::ty::Type;

/// `true` if a value of type `candidate` can stand where `target` is
/// expected.
///
/// The relation is nominal and erasure-based: identity, then erased
/// identity, then a depth-first walk of the candidate's superclass chain
/// and, at interface targets, its declared interfaces. `Null` is assignable
/// to everything; everything is assignable to the object root. Erasure-based
/// means `List` accepts `List<String>` and `List<Object>` accepts
/// `List<String>`; parameter-sensitive compatibility is the caller's
/// concern.
pub fn is_assignable(env: &dyn TypeEnv, target: &Type, candidate: &Type) -> bool {
    let mut seen_vars = HashSet::new();
    assignable(env, target, candidate, &mut seen_vars)
}

fn assignable(
    env: &dyn TypeEnv,
    target: &Type,
    candidate: &Type,
    seen_vars: &mut HashSet<TypeVarId>,
) -> bool {
    if matches!(candidate, Type::Null) {
        return true;
    }
    if target == candidate || target.erasure() == candidate.erasure() {
        return true;
    }
    if target.as_class() == Some(env.well_known().object) {
        return true;
    }
    // Bounds may mention other variables; guard against revisiting one.
    if let Type::Var(v) = candidate {
        if !seen_vars.insert(*v) {
            return false;
        }
    }
    if let Some(sup) = super_class_of(env, candidate) {
        if assignable(env, target, &sup, seen_vars) {
            return true;
        }
    }
    if is_interface(env, target) {
        for iface in interfaces_of(env, candidate) {
            if assignable(env, target, &iface, seen_vars) {
                return true;
            }
        }
    }
    false
}

/// Whether `ty` is a use of a declared interface.
pub fn is_interface(env: &dyn TypeEnv, ty: &Type) -> bool {
    ty.as_class()
        .and_then(|c| env.class(c))
        .is_some_and(|def| def.kind == ClassKind::Interface)
}

/// The effective superclass of a type use.
///
/// For a parameterized use this is the declared edge with the use's
/// bindings substituted in, so `ArrayList<String>` reports
/// `AbstractList<String>`, not the declaration's `AbstractList<E>`. A
/// class with no declared superclass (including every interface) reports
/// the object root; the root itself, `Null`, and unregistered forward
/// references report none. An array's superclass is the root; a
/// variable's is its bound (root if unbounded).
pub fn super_class_of(env: &dyn TypeEnv, ty: &Type) -> Option<Type> {
    let root = || Type::class(env.well_known().object, Vec::new());
    match ty {
        Type::Class(ct) => {
            if ct.class == env.well_known().object {
                return None;
            }
            let def = env.class(ct.class)?;
            let declared = def.super_class.clone().unwrap_or_else(root);
            if ct.args.is_empty() {
                Some(declared)
            } else {
                Some(substitute(&declared, &class_bindings(def, &ct.args)))
            }
        }
        Type::Array(_) => Some(root()),
        Type::Var(v) => Some(
            env.type_param(*v)
                .and_then(|p| p.bound.clone())
                .unwrap_or_else(root),
        ),
        Type::Null => None,
    }
}

/// The directly declared interfaces of a type use, in declaration order,
/// with the use's bindings substituted in.
///
/// Arrays are terminal here: they carry no declared interfaces in this
/// model. A platform whose arrays implement a sequence or cloneable
/// capability must register that explicitly.
pub fn interfaces_of(env: &dyn TypeEnv, ty: &Type) -> Vec<Type> {
    match ty {
        Type::Class(ct) => {
            let Some(def) = env.class(ct.class) else {
                return Vec::new();
            };
            if ct.args.is_empty() {
                def.interfaces.clone()
            } else {
                let bindings = class_bindings(def, &ct.args);
                def.interfaces
                    .iter()
                    .map(|i| substitute(i, &bindings))
                    .collect()
            }
        }
        _ => Vec::new(),
    }
}
