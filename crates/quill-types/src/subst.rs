use std::collections::HashMap;
use std::sync::Arc;

use crate::ids::TypeVarId;
use crate::store::ClassDef;
use crate::ty::Type;

pub type Subst = HashMap<TypeVarId, Type>;

/// Replace type variables by their bindings, recursively through type
/// argument lists and array components.
///
/// Unbound variables stay unchanged, so substituting into a raw generic
/// use's edges leaves the declaration's own variables free. Raw named types
/// and `Null` are leaves.
pub fn substitute(ty: &Type, subst: &Subst) -> Type {
    match ty {
        Type::Class(ct) if ct.args.is_empty() => ty.clone(),
        Type::Class(ct) => Type::class(
            ct.class,
            ct.args.iter().map(|a| substitute(a, subst)).collect(),
        ),
        Type::Array(component) => Type::Array(Arc::new(substitute(component, subst))),
        Type::Var(v) => subst.get(v).cloned().unwrap_or_else(|| ty.clone()),
        Type::Null => Type::Null,
    }
}

/// The bindings a parameterized use of `def` induces: the declared
/// parameters paired positionally with the use's arguments.
pub fn class_bindings(def: &ClassDef, args: &[Type]) -> Subst {
    def.type_params
        .iter()
        .copied()
        .zip(args.iter().cloned())
        .collect()
}
