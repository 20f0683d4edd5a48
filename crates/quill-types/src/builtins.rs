//! Seeding of well-known platform ancestors.
//!
//! Which names play the object root, the wrapper classes and so on is
//! configuration handed to the store, not something the algebra derives.

use serde::{Deserialize, Serialize};

use crate::ids::ClassId;
use crate::store::{ClassDef, ClassKind, TypeEnv, TypeStore};
use crate::ty::Type;

/// A primitive of the target language, tracked only for the wrapper-class
/// correspondence (`int` <-> `java.lang.Integer`). Primitives are not
/// reference types and never enter the algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
}

/// Ids of the seeded platform types.
///
/// Only `object` is guaranteed: a bare [`TypeStore::new`] has just the root,
/// while [`TypeStore::with_builtins`] fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellKnownTypes {
    pub object: ClassId,
    pub string: Option<ClassId>,
    pub cloneable: Option<ClassId>,
    pub serializable: Option<ClassId>,
    pub comparable: Option<ClassId>,
    boxes: Vec<(PrimitiveType, ClassId)>,
}

impl WellKnownTypes {
    pub(crate) fn new(object: ClassId) -> Self {
        Self {
            object,
            string: None,
            cloneable: None,
            serializable: None,
            comparable: None,
            boxes: Vec::new(),
        }
    }

    /// The wrapper class boxing `primitive`, if seeded.
    pub fn boxed(&self, primitive: PrimitiveType) -> Option<ClassId> {
        self.boxes
            .iter()
            .find(|(p, _)| *p == primitive)
            .map(|&(_, c)| c)
    }

    /// The primitive unboxed from `class`, if `class` is a seeded wrapper.
    pub fn primitive_of(&self, class: ClassId) -> Option<PrimitiveType> {
        self.boxes
            .iter()
            .find(|(_, c)| *c == class)
            .map(|&(p, _)| p)
    }
}

impl TypeStore {
    /// A store seeded with the `java.lang` ancestors generated source can
    /// rely on: the object root, `String`, `Cloneable`, `Serializable`,
    /// `Comparable<T>`, `Number` and the primitive wrapper classes.
    pub fn with_builtins() -> TypeStore {
        let mut store = TypeStore::default();
        let object = store.well_known().object;

        let serializable = seed(
            &mut store,
            interface("java.io.Serializable", vec![], vec![]),
        );
        let cloneable = seed(
            &mut store,
            interface("java.lang.Cloneable", vec![], vec![]),
        );

        let comparable = store.resolve("java.lang.Comparable");
        let t = store.add_type_param(comparable, "T", None);
        seed(
            &mut store,
            interface("java.lang.Comparable", vec![t], vec![]),
        );
        let comparable_to = |id: ClassId| Type::class(comparable, vec![Type::class(id, vec![])]);

        let string = store.resolve("java.lang.String");
        seed(
            &mut store,
            ClassDef {
                name: "java.lang.String".into(),
                kind: ClassKind::Class,
                is_abstract: false,
                type_params: vec![],
                super_class: None,
                interfaces: vec![Type::class(serializable, vec![]), comparable_to(string)],
            },
        );

        let number = seed(
            &mut store,
            ClassDef {
                name: "java.lang.Number".into(),
                kind: ClassKind::Class,
                is_abstract: true,
                type_params: vec![],
                super_class: None,
                interfaces: vec![Type::class(serializable, vec![])],
            },
        );

        let mut boxes = Vec::new();
        let mut wrapper = |store: &mut TypeStore, primitive, name: &str, numeric: bool| {
            let id = store.resolve(name);
            seed(
                store,
                ClassDef {
                    name: name.into(),
                    kind: ClassKind::Class,
                    is_abstract: false,
                    type_params: vec![],
                    super_class: numeric.then(|| Type::class(number, vec![])),
                    interfaces: vec![Type::class(serializable, vec![]), comparable_to(id)],
                },
            );
            boxes.push((primitive, id));
        };
        wrapper(&mut store, PrimitiveType::Boolean, "java.lang.Boolean", false);
        wrapper(&mut store, PrimitiveType::Byte, "java.lang.Byte", true);
        wrapper(&mut store, PrimitiveType::Char, "java.lang.Character", false);
        wrapper(&mut store, PrimitiveType::Double, "java.lang.Double", true);
        wrapper(&mut store, PrimitiveType::Float, "java.lang.Float", true);
        wrapper(&mut store, PrimitiveType::Int, "java.lang.Integer", true);
        wrapper(&mut store, PrimitiveType::Long, "java.lang.Long", true);
        wrapper(&mut store, PrimitiveType::Short, "java.lang.Short", true);

        store.set_well_known(WellKnownTypes {
            object,
            string: Some(string),
            cloneable: Some(cloneable),
            serializable: Some(serializable),
            comparable: Some(comparable),
            boxes,
        });
        store
    }
}

fn interface(name: &str, type_params: Vec<crate::ids::TypeVarId>, interfaces: Vec<Type>) -> ClassDef {
    ClassDef {
        name: name.into(),
        kind: ClassKind::Interface,
        is_abstract: true,
        type_params,
        super_class: None,
        interfaces,
    }
}

fn seed(store: &mut TypeStore, def: ClassDef) -> ClassId {
    store
        .register(def)
        .expect("builtin declarations are well-formed")
}
