//! Java-like rendering of type uses.
//!
//! The output is stable and source-shaped (`java.util.List<java.lang.String>`,
//! `String[]`, `T`), intended for diagnostics and for printing type
//! references in generated source.

use crate::store::TypeEnv;
use crate::ty::Type;

/// Render `ty` with fully-qualified class names.
pub fn display_type(env: &dyn TypeEnv, ty: &Type) -> String {
    let mut out = String::new();
    render(env, ty, true, &mut out);
    out
}

/// Render `ty` with simple class names only.
pub fn display_type_simple(env: &dyn TypeEnv, ty: &Type) -> String {
    let mut out = String::new();
    render(env, ty, false, &mut out);
    out
}

fn render(env: &dyn TypeEnv, ty: &Type, qualified: bool, out: &mut String) {
    match ty {
        Type::Class(ct) => {
            match env.class_name(ct.class) {
                Some(name) if qualified => out.push_str(name.as_str()),
                Some(name) => out.push_str(name.simple_name()),
                None => out.push('?'),
            }
            if let Some((first, rest)) = ct.args.split_first() {
                out.push('<');
                render(env, first, qualified, out);
                for arg in rest {
                    out.push_str(", ");
                    render(env, arg, qualified, out);
                }
                out.push('>');
            }
        }
        Type::Array(component) => {
            render(env, component, qualified, out);
            out.push_str("[]");
        }
        Type::Var(v) => match env.type_param(*v) {
            Some(def) => out.push_str(def.name.as_str()),
            None => out.push('?'),
        },
        Type::Null => out.push_str("null"),
    }
}
