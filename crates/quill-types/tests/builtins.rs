use quill_types::{is_assignable, PrimitiveType, Type, TypeEnv, TypeStore};

#[test]
fn wrappers_box_and_unbox() {
    let store = TypeStore::with_builtins();
    let wk = store.well_known();

    let integer = store.lookup("java.lang.Integer").unwrap();
    assert_eq!(wk.boxed(PrimitiveType::Int), Some(integer));
    assert_eq!(wk.primitive_of(integer), Some(PrimitiveType::Int));
    assert_eq!(wk.primitive_of(wk.object), None);
}

#[test]
fn numeric_wrappers_extend_number() {
    let store = TypeStore::with_builtins();
    let number = Type::class(store.lookup("java.lang.Number").unwrap(), vec![]);
    let integer = Type::class(store.well_known().boxed(PrimitiveType::Int).unwrap(), vec![]);
    let boolean = Type::class(
        store.well_known().boxed(PrimitiveType::Boolean).unwrap(),
        vec![],
    );

    assert!(is_assignable(&store, &number, &integer));
    assert!(!is_assignable(&store, &number, &boolean));
}

#[test]
fn string_is_serializable_and_comparable() {
    let store = TypeStore::with_builtins();
    let wk = store.well_known();
    let string = Type::class(wk.string.unwrap(), vec![]);
    let serializable = Type::class(wk.serializable.unwrap(), vec![]);
    let comparable = Type::class(wk.comparable.unwrap(), vec![]);

    assert!(is_assignable(&store, &serializable, &string));
    assert!(is_assignable(&store, &comparable, &string));
}

#[test]
fn root_name_is_configuration() {
    let store = TypeStore::new("system.Object");
    let root = store.well_known().object;
    assert_eq!(store.lookup("system.Object"), Some(root));
    assert_eq!(store.class_name(root).unwrap().as_str(), "system.Object");
}
