use quill_types::{
    is_assignable, ClassDef, ClassKind, Type, TypeEnv, TypeStore, TypeVarId,
};

fn def(
    name: &str,
    kind: ClassKind,
    type_params: Vec<TypeVarId>,
    super_class: Option<Type>,
    interfaces: Vec<Type>,
) -> ClassDef {
    ClassDef {
        name: name.into(),
        kind,
        is_abstract: false,
        type_params,
        super_class,
        interfaces,
    }
}

#[test]
fn reflexivity_and_null_absorption() {
    let mut store = TypeStore::with_builtins();
    let list = store.resolve("java.util.List");
    let e = store.add_type_param(list, "E", None);
    store
        .register(def("java.util.List", ClassKind::Interface, vec![e], None, vec![]))
        .unwrap();

    let string = store.well_known().string.unwrap();
    let samples = vec![
        Type::class(store.well_known().object, vec![]),
        Type::class(string, vec![]),
        Type::class(list, vec![Type::class(string, vec![])]),
        store.array_of(&Type::class(string, vec![])),
        Type::Var(e),
        Type::Null,
    ];
    for ty in &samples {
        assert!(is_assignable(&store, ty, ty), "{ty:?} should accept itself");
        assert!(
            is_assignable(&store, ty, &Type::Null),
            "{ty:?} should accept null"
        );
    }
}

#[test]
fn root_absorbs_every_reference_type() {
    let mut store = TypeStore::with_builtins();
    let iface = store
        .register(def("com.example.Marker", ClassKind::Interface, vec![], None, vec![]))
        .unwrap();

    let root = Type::class(store.well_known().object, vec![]);
    let string = Type::class(store.well_known().string.unwrap(), vec![]);
    for candidate in [
        string.clone(),
        Type::class(iface, vec![]),
        store.array_of(&string),
        Type::Null,
    ] {
        assert!(is_assignable(&store, &root, &candidate));
    }
}

#[test]
fn superclass_chain_is_transitive() {
    let mut store = TypeStore::default();
    let c = store
        .register(def("com.example.C", ClassKind::Class, vec![], None, vec![]))
        .unwrap();
    let b = store
        .register(def(
            "com.example.B",
            ClassKind::Class,
            vec![],
            Some(Type::class(c, vec![])),
            vec![],
        ))
        .unwrap();
    let a = store
        .register(def(
            "com.example.A",
            ClassKind::Class,
            vec![],
            Some(Type::class(b, vec![])),
            vec![],
        ))
        .unwrap();

    let (a, b, c) = (
        Type::class(a, vec![]),
        Type::class(b, vec![]),
        Type::class(c, vec![]),
    );
    assert!(is_assignable(&store, &b, &a));
    assert!(is_assignable(&store, &c, &b));
    assert!(is_assignable(&store, &c, &a));
    assert!(!is_assignable(&store, &a, &c));
}

#[test]
fn interface_targets_reach_ancestor_interfaces() {
    let mut store = TypeStore::default();
    let i = store
        .register(def("com.example.I", ClassKind::Interface, vec![], None, vec![]))
        .unwrap();
    let base = store
        .register(def(
            "com.example.Base",
            ClassKind::Class,
            vec![],
            None,
            vec![Type::class(i, vec![])],
        ))
        .unwrap();
    let derived = store
        .register(def(
            "com.example.Derived",
            ClassKind::Class,
            vec![],
            Some(Type::class(base, vec![])),
            vec![],
        ))
        .unwrap();

    // The interface is implemented by an ancestor, not by Derived directly.
    assert!(is_assignable(
        &store,
        &Type::class(i, vec![]),
        &Type::class(derived, vec![])
    ));
    // Unrelated class target is not reached through the interface list.
    let other = store
        .register(def("com.example.Other", ClassKind::Class, vec![], None, vec![]))
        .unwrap();
    assert!(!is_assignable(
        &store,
        &Type::class(other, vec![]),
        &Type::class(derived, vec![])
    ));
}

#[test]
fn assignability_is_erasure_based() {
    let mut store = TypeStore::with_builtins();
    let list = store.resolve("java.util.List");
    let e = store.add_type_param(list, "E", None);
    store
        .register(def("java.util.List", ClassKind::Interface, vec![e], None, vec![]))
        .unwrap();

    let string = Type::class(store.well_known().string.unwrap(), vec![]);
    let object = Type::class(store.well_known().object, vec![]);
    let raw = Type::class(list, vec![]);
    let of_string = Type::class(list, vec![string]);
    let of_object = Type::class(list, vec![object]);

    assert!(is_assignable(&store, &raw, &of_string));
    assert!(is_assignable(&store, &of_string, &raw));
    // Parameter-sensitive compatibility is the caller's concern.
    assert!(is_assignable(&store, &of_object, &of_string));
}

#[test]
fn arrays_are_terminal() {
    let store = TypeStore::with_builtins();
    let string = Type::class(store.well_known().string.unwrap(), vec![]);
    let integer = Type::class(
        store.well_known().boxed(quill_types::PrimitiveType::Int).unwrap(),
        vec![],
    );
    let strings = store.array_of(&string);
    let integers = store.array_of(&integer);

    assert!(is_assignable(&store, &strings, &strings));
    assert!(!is_assignable(&store, &strings, &integers));
    // Arrays carry no declared interfaces in this model.
    let serializable = Type::class(store.well_known().serializable.unwrap(), vec![]);
    assert!(!is_assignable(&store, &serializable, &strings));
}

#[test]
fn type_variable_candidate_walks_its_bound() {
    let mut store = TypeStore::with_builtins();
    let number = store.lookup("java.lang.Number").unwrap();
    let integer = store.well_known().boxed(quill_types::PrimitiveType::Int).unwrap();

    let holder = store.resolve("com.example.Holder");
    let t = store.add_type_param(holder, "T", Some(Type::class(number, vec![])));
    store
        .register(def("com.example.Holder", ClassKind::Class, vec![t], None, vec![]))
        .unwrap();

    assert!(is_assignable(
        &store,
        &Type::class(number, vec![]),
        &Type::Var(t)
    ));
    assert!(!is_assignable(
        &store,
        &Type::class(integer, vec![]),
        &Type::Var(t)
    ));
}
